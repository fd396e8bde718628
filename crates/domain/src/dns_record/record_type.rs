use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record types the simulator knows how to resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    #[default]
    A,
    AAAA,
    CNAME,
    MX,
}

impl RecordType {
    pub const ALL: [RecordType; 4] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::CNAME,
        RecordType::MX,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
        }
    }

    /// Short description shown next to the type in selectors and help text.
    pub fn describe(&self) -> &'static str {
        match self {
            RecordType::A => "IPv4 address",
            RecordType::AAAA => "IPv6 address",
            RecordType::CNAME => "Canonical name",
            RecordType::MX => "Mail exchange",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}
