use crate::ports::AuthoritativeTable;
use ferrous_sim_domain::AuthServerRecord;
use std::sync::Arc;

pub struct GetAuthServersUseCase {
    servers: Arc<dyn AuthoritativeTable>,
}

impl GetAuthServersUseCase {
    pub fn new(servers: Arc<dyn AuthoritativeTable>) -> Self {
        Self { servers }
    }

    pub fn execute(&self) -> Vec<AuthServerRecord> {
        self.servers.records()
    }
}
