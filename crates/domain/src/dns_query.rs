use super::{DomainError, RecordType};
use std::sync::Arc;

/// A query as submitted by the user, before any resolution has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    /// Submission time, epoch milliseconds.
    pub timestamp_ms: i64,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType, timestamp_ms: i64) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            timestamp_ms,
        }
    }

    /// Builds a query from free-form user input, which may be a bare domain
    /// or a full URL.
    pub fn from_input(
        input: &str,
        record_type: RecordType,
        timestamp_ms: i64,
    ) -> Result<Self, DomainError> {
        if input.trim().is_empty() {
            return Err(DomainError::InvalidDomainName(
                "Please enter a domain name or URL".to_string(),
            ));
        }

        let domain = extract_domain(input);
        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "No domain found in '{}'",
                input.trim()
            )));
        }

        Ok(Self::new(domain, record_type, timestamp_ms))
    }
}

/// Strips scheme, path, query string, fragment and port from `input`.
///
/// `https://example.com:8443/path?q=1#top` becomes `example.com`; input that
/// is already a bare domain is returned trimmed.
pub fn extract_domain(input: &str) -> String {
    let trimmed = input.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);

    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();

    host.split(':').next().unwrap_or_default().to_string()
}
