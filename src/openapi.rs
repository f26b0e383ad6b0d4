use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// route handlers and served at `/api-docs/openapi.json`, with Swagger UI at
/// `/swagger-ui/`.
///
/// # Endpoints
/// - Upload page: `GET /`
/// - Bulk check: `POST /process-files`
/// - Health Check: `GET /health`
///
/// # Schemas
/// - `UploadForm`: multipart body with the `file` field
/// - `ValidationResult`: one report row
/// - `HealthResponse`: Service status payload
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::index::index,
        crate::routes::upload::process_files,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::routes::upload::UploadForm,
            crate::models::validation::ValidationResult,
            crate::models::validation::ValidationStatus,
            crate::models::health::HealthResponse
        )
    ),
    tags(
        (name = "Front End", description = "Browser upload page"),
        (name = "Email Validation", description = "Bulk syntax and MX checks for uploaded address lists"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "Checks uploaded email lists for valid syntax and for MX records on each domain. \
                       A \"Valid (Domain)\" result only means the domain is configured to receive mail; \
                       no SMTP conversation is held and individual mailboxes are not verified.",
        title = "Email List Checker API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
