use crate::auth_server::AuthServerRecord;
use crate::cache_entry::CacheEntry;
use crate::dns_record::RecordType;
use serde::{Deserialize, Serialize};

/// Initial cache contents and authoritative table for a new session.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    /// Preload the demo cache and server table before any custom entries
    #[serde(default = "default_true")]
    pub use_defaults: bool,

    #[serde(default)]
    pub cache: Vec<SeedCacheEntry>,

    #[serde(default)]
    pub servers: Vec<SeedServerRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedCacheEntry {
    pub domain: String,
    pub ip: String,
    #[serde(default)]
    pub record_type: RecordType,
    #[serde(default = "default_seed_ttl")]
    pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedServerRecord {
    pub domain: String,
    pub ip: String,
    #[serde(default)]
    pub record_type: RecordType,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            use_defaults: true,
            cache: Vec::new(),
            servers: Vec::new(),
        }
    }
}

impl SeedConfig {
    /// Cache entries to preload, all stamped with `now_ms`. Fields are trimmed.
    pub fn cache_entries(&self, now_ms: i64) -> Vec<CacheEntry> {
        let defaults = if self.use_defaults {
            default_cache()
        } else {
            Vec::new()
        };

        defaults
            .iter()
            .chain(self.cache.iter())
            .map(|e| CacheEntry::new(e.domain.trim(), e.ip.trim(), e.record_type, e.ttl, now_ms))
            .collect()
    }

    pub fn server_records(&self) -> Vec<AuthServerRecord> {
        let defaults = if self.use_defaults {
            default_servers()
        } else {
            Vec::new()
        };

        defaults
            .iter()
            .chain(self.servers.iter())
            .map(|s| AuthServerRecord::new(s.domain.trim(), s.ip.trim(), s.record_type))
            .collect()
    }

    pub fn validate(&self) -> Result<(), String> {
        for entry in &self.cache {
            if entry.domain.trim().is_empty() || entry.ip.trim().is_empty() {
                return Err("Seed cache entries need a domain and an IP".to_string());
            }
            if entry.ttl == 0 {
                return Err(format!("Seed cache entry '{}' has a zero TTL", entry.domain));
            }
        }

        for server in &self.servers {
            AuthServerRecord::validate_domain(server.domain.trim())?;
            AuthServerRecord::validate_ip(server.ip.trim())
                .map_err(|e| format!("Seed server '{}': {}", server.domain, e))?;
        }

        Ok(())
    }
}

fn default_cache() -> Vec<SeedCacheEntry> {
    vec![
        SeedCacheEntry {
            domain: "google.com".to_string(),
            ip: "142.250.185.46".to_string(),
            record_type: RecordType::A,
            ttl: 300,
        },
        SeedCacheEntry {
            domain: "github.com".to_string(),
            ip: "140.82.121.4".to_string(),
            record_type: RecordType::A,
            ttl: 60,
        },
    ]
}

fn default_servers() -> Vec<SeedServerRecord> {
    [
        ("google.com", "142.250.185.46"),
        ("example.com", "93.184.216.34"),
        ("github.com", "140.82.121.4"),
        ("cloudflare.com", "104.16.132.229"),
    ]
    .into_iter()
    .map(|(domain, ip)| SeedServerRecord {
        domain: domain.to_string(),
        ip: ip.to_string(),
        record_type: RecordType::A,
    })
    .collect()
}

fn default_seed_ttl() -> u32 {
    300
}

fn default_true() -> bool {
    true
}
