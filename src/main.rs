use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use email_list_checker::config::AppConfig;
use email_list_checker::openapi::ApiDoc;
use email_list_checker::routes::upload::UploadLimit;
use email_list_checker::validation::Validator;
use email_list_checker::validation::dnsmx::DnsMxResolver;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email List Checker Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Upload page at `/` and the bulk check endpoint `/process-files`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - One process-wide DNS resolver shared by all requests
///
/// # Endpoints
/// - Upload page: `/`
/// - Bulk check: `/process-files`
/// - Health: `/health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `0.0.0.0:3000` by default (`HOST`, `PORT`)
/// - See [`AppConfig::from_env`] for the remaining variables
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let resolver = DnsMxResolver::new(&config.dns);
    let validator = Data::new(Validator::new(
        Arc::new(resolver),
        config.lookup_concurrency,
    ));
    let upload_limit = Data::new(UploadLimit::new(config.max_upload_bytes));

    info!(
        "Starting {} v{} on http://{}:{} (lookup concurrency {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.host,
        config.port,
        config.lookup_concurrency
    );

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(validator.clone())
            .app_data(upload_limit.clone())
            .configure(email_list_checker::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await?;

    Ok(())
}

/// Human-readable logs; `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("email_list_checker=info,actix_web=info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
