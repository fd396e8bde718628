use ferrous_sim_application::ports::AuthoritativeTable;
use ferrous_sim_domain::{AuthServerRecord, RecordType};
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct InMemoryAuthoritativeTable {
    records: RwLock<Vec<AuthServerRecord>>,
}

impl InMemoryAuthoritativeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<AuthServerRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl AuthoritativeTable for InMemoryAuthoritativeTable {
    fn lookup(&self, domain: &str, record_type: RecordType) -> Option<AuthServerRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|r| r.matches(domain, record_type))
            .cloned()
    }

    fn insert(&self, record: AuthServerRecord) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    fn records(&self) -> Vec<AuthServerRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn len(&self) -> usize {
        self.records.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
