use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
pub mod health;

/// # Upload Page
///
/// Static HTML front end served at `/`.
pub mod index;

/// # Bulk Email Check Endpoint
///
/// Accepts an uploaded list and returns a CSV report. Each address is checked
/// for:
/// 1. Syntax (regular expression and length limits)
/// 2. Domain MX records
///
/// ## Request
/// - Method: POST
/// - Body: `multipart/form-data` with a `file` field
///
/// ## Responses
/// - **200 OK**: `text/csv` attachment
/// - **400 Bad Request**: no file, or no addresses in it
pub mod upload;

/// # Route Configuration
///
/// Mounts every endpoint at the root path.
///
/// ## Example Endpoints
///
/// ```text
/// GET  /               - Upload page
/// POST /process-files  - CSV report for an uploaded list
/// GET  /health         - Service health status
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(index::configure_routes)
        .configure(upload::configure_routes)
        .configure(health::configure_routes);
}
