use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use trust_dns_resolver::{
    TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    proto::op::ResponseCode,
    system_conf,
};

use crate::config::DnsConfig;

/// A single mail exchanger published for a domain.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("MX lookup failed: {source}")]
    Resolve {
        #[source]
        source: ResolveError,
    },
}

impl LookupError {
    pub fn resolve(source: ResolveError) -> Self {
        Self::Resolve { source }
    }
}

/// MX lookup by domain name.
///
/// `Ok` with an empty vector means the domain answered but publishes no mail
/// exchanger. Every other failure is an `Err`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LookupMx: Send + Sync {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError>;
}

/// Process-wide DNS client used for MX lookups.
///
/// Built from the host's resolver configuration (`/etc/resolv.conf` on Unix).
/// When that cannot be read the library defaults are used instead.
pub struct DnsMxResolver {
    resolver: TokioAsyncResolver,
}

impl DnsMxResolver {
    pub fn new(settings: &DnsConfig) -> Self {
        let (config, mut opts) = match system_conf::read_system_conf() {
            Ok(conf) => conf,
            Err(e) => {
                warn!("Could not read system DNS configuration, using defaults: {}", e);
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };

        if let Some(timeout) = settings.timeout {
            opts.timeout = timeout;
        }
        if let Some(attempts) = settings.attempts {
            opts.attempts = attempts;
        }

        info!(
            "DNS resolver initialized - timeout: {:?}, attempts: {}",
            opts.timeout, opts.attempts
        );

        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

#[async_trait]
impl LookupMx for DnsMxResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError> {
        match self.resolver.mx_lookup(domain).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .map(|mx| {
                    MxRecord::new(mx.preference(), normalize_exchange(mx.exchange().to_utf8()))
                })
                .collect()),
            Err(e) if is_empty_answer(&e) => Ok(Vec::new()),
            Err(e) => Err(LookupError::resolve(e)),
        }
    }
}

/// NOERROR with an empty answer section: the name exists but has no MX.
fn is_empty_answer(err: &ResolveError) -> bool {
    matches!(
        err.kind(),
        ResolveErrorKind::NoRecordsFound { response_code, .. } if *response_code == ResponseCode::NoError
    )
}

fn normalize_exchange(exchange: String) -> String {
    exchange.trim_end_matches('.').to_ascii_lowercase()
}
