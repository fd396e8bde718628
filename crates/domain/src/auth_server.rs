use super::{DomainError, RecordType};
use std::sync::Arc;

/// One row of the user-maintained authoritative table, the simulator's
/// stand-in for a zone file fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthServerRecord {
    pub domain: Arc<str>,
    pub ip: Arc<str>,
    pub record_type: RecordType,
}

impl AuthServerRecord {
    pub fn new(
        domain: impl Into<Arc<str>>,
        ip: impl Into<Arc<str>>,
        record_type: RecordType,
    ) -> Self {
        Self {
            domain: domain.into(),
            ip: ip.into(),
            record_type,
        }
    }

    /// Trims both fields and rejects the record if either ends up empty.
    pub fn from_input(domain: &str, ip: &str, record_type: RecordType) -> Result<Self, DomainError> {
        let domain = domain.trim();
        let ip = ip.trim();

        Self::validate_domain(domain).map_err(DomainError::InvalidDomainName)?;
        Self::validate_ip(ip).map_err(DomainError::InvalidRecordValue)?;

        Ok(Self::new(domain, ip, record_type))
    }

    pub fn validate_domain(domain: &str) -> Result<(), String> {
        if domain.is_empty() {
            return Err("Domain cannot be empty".to_string());
        }
        Ok(())
    }

    pub fn validate_ip(ip: &str) -> Result<(), String> {
        if ip.is_empty() {
            return Err("IP address cannot be empty".to_string());
        }
        Ok(())
    }

    #[inline]
    pub fn matches(&self, domain: &str, record_type: RecordType) -> bool {
        self.record_type == record_type && self.domain.as_ref() == domain
    }
}
