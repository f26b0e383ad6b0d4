use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Outcome category written to the `status` column of the report.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    #[serde(rename = "Valid (Domain)")]
    ValidDomain,
    #[serde(rename = "Invalid")]
    Invalid,
}

impl ValidationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidDomain => "Valid (Domain)",
            Self::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single decision reached for a candidate.
///
/// Every variant maps to one fixed status and reason string. All DNS failure
/// causes (NXDOMAIN, timeout, unreachable resolver, malformed name) land in
/// [`Verdict::DomainNotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    InvalidSyntax,
    MailServerExists,
    NoMxRecords,
    DomainNotFound,
}

impl Verdict {
    pub fn status(&self) -> ValidationStatus {
        match self {
            Self::MailServerExists => ValidationStatus::ValidDomain,
            Self::InvalidSyntax | Self::NoMxRecords | Self::DomainNotFound => {
                ValidationStatus::Invalid
            }
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidSyntax => "Invalid Syntax",
            Self::MailServerExists => "Mail server exists",
            Self::NoMxRecords => "No MX records found",
            Self::DomainNotFound => "Domain does not exist",
        }
    }
}

/// # Validation Result
///
/// One row of the downloadable report. Field order matches the CSV header
/// `email,status,reason`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub email: String,
    pub status: ValidationStatus,
    pub reason: String,
}

impl ValidationResult {
    pub fn new(email: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            email: email.into(),
            status: verdict.status(),
            reason: verdict.reason().to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == ValidationStatus::ValidDomain
    }
}
