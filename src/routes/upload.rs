use crate::error::AppError;
use crate::extract::extract_candidates;
use crate::report::render_csv;
use crate::validation::Validator;
use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{HttpResponse, post, web};
use futures::TryStreamExt;
use std::time::Instant;
use tracing::{Instrument, debug, info, info_span};
use utoipa::ToSchema;
use uuid::Uuid;

/// Name of the multipart field carrying the uploaded list.
pub const FILE_FIELD: &str = "file";
pub const REPORT_FILENAME: &str = "partial_results.csv";

/// Largest accepted `file` field, in bytes.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimit {
    pub max_bytes: usize,
}

impl UploadLimit {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    /// Line-delimited text; the address is the first comma-separated field.
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// # Bulk Email Check Endpoint
///
/// Accepts one uploaded file and returns a CSV report with one row per
/// distinct address found in it:
/// 1. Syntax validation
/// 2. Domain MX record lookup
///
/// "Valid (Domain)" only means the domain accepts mail. The mailbox is never
/// contacted.
///
/// ## Request
/// - Method: POST
/// - Body: `multipart/form-data` with a file field named `file`
///
/// ## Responses
/// - **200 OK**: `text/csv` attachment `partial_results.csv`
/// - **400 Bad Request**: no file, malformed form, or no addresses in the file
/// - **413 Payload Too Large**: file exceeds the configured limit
/// - **500 Internal Server Error**: the report could not be written
#[utoipa::path(
    post,
    path = "/process-files",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "CSV report with header email,status,reason", body = String, content_type = "text/csv"),
        (status = 400, description = "No file uploaded or no addresses found", body = String, content_type = "text/plain"),
        (status = 413, description = "Uploaded file too large", body = String, content_type = "text/plain"),
        (status = 500, description = "Report generation failed", body = String, content_type = "text/plain")
    ),
    tag = "Email Validation"
)]
#[post("/process-files")]
pub async fn process_files(
    payload: Multipart,
    validator: web::Data<Validator>,
    limit: web::Data<UploadLimit>,
) -> Result<HttpResponse, AppError> {
    let span = info_span!("process_files", request_id = %Uuid::new_v4());
    handle_upload(payload, validator, limit.max_bytes)
        .instrument(span)
        .await
}

async fn handle_upload(
    mut payload: Multipart,
    validator: web::Data<Validator>,
    max_bytes: usize,
) -> Result<HttpResponse, AppError> {
    let content = read_file_field(&mut payload, max_bytes)
        .await?
        .ok_or(AppError::NoFile)?;
    debug!("Received upload of {} bytes", content.len());

    let candidates = extract_candidates(&content);
    if candidates.is_empty() {
        return Err(AppError::NoCandidates);
    }

    let started = Instant::now();
    let results = validator.validate_all(&candidates).await;
    let report = render_csv(&results)?;

    info!(
        candidates = results.len(),
        valid = results.iter().filter(|r| r.is_valid()).count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Upload validated"
    );

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", REPORT_FILENAME),
        ))
        .body(report))
}

/// Returns the body of the first `file` field. Other fields are drained and
/// ignored.
async fn read_file_field(
    payload: &mut Multipart,
    max_bytes: usize,
) -> Result<Option<Vec<u8>>, AppError> {
    let mut file = None;

    while let Some(mut field) = payload.try_next().await? {
        if file.is_some() || field.name() != Some(FILE_FIELD) {
            while field.try_next().await?.is_some() {}
            continue;
        }

        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if data.len() + chunk.len() > max_bytes {
                return Err(AppError::UploadTooLarge { limit: max_bytes });
            }
            data.extend_from_slice(&chunk);
        }
        file = Some(data);
    }

    Ok(file)
}

/// Registers the upload endpoint.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(process_files);
}
