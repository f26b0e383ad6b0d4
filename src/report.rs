use csv::{Terminator, WriterBuilder};
use thiserror::Error;

use crate::models::ValidationResult;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to encode report row: {0}")]
    Encode(#[from] csv::Error),
    #[error("failed to flush report: {0}")]
    Flush(#[from] std::io::Error),
}

/// Renders results as CSV with the header `email,status,reason`.
///
/// Fields are quoted only when they contain a comma, a quote or a line
/// break. Rows keep the order of `results`.
pub fn render_csv(results: &[ValidationResult]) -> Result<Vec<u8>, ReportError> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    // serialize() only emits the header with the first row
    if results.is_empty() {
        wtr.write_record(["email", "status", "reason"])?;
    }
    for result in results {
        wtr.serialize(result)?;
    }

    wtr.into_inner().map_err(|e| ReportError::Flush(e.into_error()))
}
