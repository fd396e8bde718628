use ferrous_sim_domain::{AuthServerRecord, RecordType};

/// Port for the user-maintained authoritative records.
pub trait AuthoritativeTable: Send + Sync {
    /// First record inserted for `domain` and `record_type`.
    fn lookup(&self, domain: &str, record_type: RecordType) -> Option<AuthServerRecord>;

    /// Appends without deduplication.
    fn insert(&self, record: AuthServerRecord);

    fn records(&self) -> Vec<AuthServerRecord>;

    fn len(&self) -> usize;
}
