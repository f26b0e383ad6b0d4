use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// # Upload Page
///
/// Serves the single-page front end. The page posts the chosen file as form
/// field `file` to `/process-files` and saves the returned CSV.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "HTML upload page", body = String, content_type = "text/html")
    ),
    tag = "Front End"
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(index);
}
