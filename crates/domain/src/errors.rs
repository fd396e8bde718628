use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record value: {0}")]
    InvalidRecordValue(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("No query data to export, perform a DNS query first")]
    EmptyQueryLog,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
