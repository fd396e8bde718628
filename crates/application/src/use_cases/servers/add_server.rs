use crate::ports::AuthoritativeTable;
use ferrous_sim_domain::{AuthServerRecord, DomainError, RecordType};
use std::sync::Arc;
use tracing::{info, warn};

pub struct AddAuthServerUseCase {
    servers: Arc<dyn AuthoritativeTable>,
}

impl AddAuthServerUseCase {
    pub fn new(servers: Arc<dyn AuthoritativeTable>) -> Self {
        Self { servers }
    }

    pub fn execute(
        &self,
        domain: &str,
        ip: &str,
        record_type: RecordType,
    ) -> Result<AuthServerRecord, DomainError> {
        let record = AuthServerRecord::from_input(domain, ip, record_type).map_err(|e| {
            warn!(domain = %domain, ip = %ip, error = %e, "Rejected authoritative record");
            e
        })?;

        self.servers.insert(record.clone());

        info!(
            domain = %record.domain,
            ip = %record.ip,
            record_type = %record.record_type,
            "Added authoritative record"
        );

        Ok(record)
    }
}
