use actix_multipart::MultipartError;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::error;

use crate::report::ReportError;

/// Request-level failures of the upload endpoint.
///
/// Client mistakes render as 4xx plain text carrying the message below.
/// Internal failures render as a bare 500 so no half-written report leaves the
/// server.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No files were uploaded.")]
    NoFile,
    #[error("No valid emails found in the file.")]
    NoCandidates,
    #[error("Malformed upload: {0}")]
    Upload(#[from] MultipartError),
    #[error("Uploaded file exceeds the {limit} byte limit.")]
    UploadTooLarge { limit: usize },
    #[error("Failed to generate report.")]
    Report(#[from] ReportError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NoFile | Self::NoCandidates | Self::Upload(_) => StatusCode::BAD_REQUEST,
            Self::UploadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Report(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Report(source) = self {
            error!("Report generation failed: {}", source);
        }

        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_client_errors_are_plain_text_400() {
        for err in [AppError::NoFile, AppError::NoCandidates] {
            let message = err.to_string();
            let resp = err.error_response();

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                resp.headers().get("content-type").unwrap(),
                "text/plain; charset=utf-8"
            );
            let body = to_bytes(resp.into_body()).await.unwrap();
            assert_eq!(body, message.as_bytes());
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(AppError::NoFile.to_string(), "No files were uploaded.");
        assert_eq!(
            AppError::NoCandidates.to_string(),
            "No valid emails found in the file."
        );
    }

    #[test]
    fn test_upload_too_large_status() {
        let err = AppError::UploadTooLarge { limit: 10 };
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "Uploaded file exceeds the 10 byte limit.");
    }

    #[actix_web::test]
    async fn test_report_failure_is_500_without_details() {
        let io = std::io::Error::other("disk on fire");
        let err = AppError::Report(ReportError::Flush(io));

        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, "Failed to generate report.".as_bytes());
    }
}
