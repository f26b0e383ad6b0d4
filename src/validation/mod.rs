use futures::stream::{self, StreamExt};
use std::sync::Arc;

use crate::models::{ValidationResult, Verdict};

/// MX lookups: the [`dnsmx::LookupMx`] seam and its DNS-backed implementation.
pub mod dnsmx;

/// Regular-expression syntax check for candidate addresses.
pub mod syntax;

use dnsmx::LookupMx;

/// Decides the outcome for each candidate address.
///
/// A candidate first has to pass [`syntax::is_valid_email`]; only then is its
/// domain looked up. A "Valid (Domain)" result means the domain publishes at
/// least one MX record. The mailbox itself is never contacted.
pub struct Validator {
    resolver: Arc<dyn LookupMx>,
    concurrency: usize,
}

impl Validator {
    /// `concurrency` bounds the number of lookups in flight for one call to
    /// [`Validator::validate_all`]. Values below 1 are treated as 1.
    pub fn new(resolver: Arc<dyn LookupMx>, concurrency: usize) -> Self {
        Self {
            resolver,
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub async fn validate(&self, candidate: &str) -> ValidationResult {
        ValidationResult::new(candidate, self.verdict(candidate).await)
    }

    async fn verdict(&self, candidate: &str) -> Verdict {
        if !syntax::is_valid_email(candidate) {
            return Verdict::InvalidSyntax;
        }

        let domain = match candidate.split_once('@') {
            Some((_, domain)) => domain,
            None => return Verdict::InvalidSyntax,
        };

        match self.resolver.lookup_mx(domain).await {
            Ok(records) if !records.is_empty() => Verdict::MailServerExists,
            Ok(_) => Verdict::NoMxRecords,
            Err(_) => Verdict::DomainNotFound,
        }
    }

    /// Validates every candidate, returning results in input order no matter
    /// which lookups finish first.
    pub async fn validate_all(&self, candidates: &[String]) -> Vec<ValidationResult> {
        stream::iter(candidates)
            .map(|candidate| self.validate(candidate))
            .buffered(self.concurrency)
            .collect()
            .await
    }
}
