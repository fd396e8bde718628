use crate::query_log::CompletedQuery;
use crate::resolver_stats::ResolverStats;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Downloadable snapshot of the latest completed query and the session
/// statistics at export time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExport {
    pub domain: String,
    pub query_type: String,
    pub timestamp: String,
    pub total_resolution_time: String,
    pub steps: Vec<ExportedStep>,
    pub statistics: ExportedStatistics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedStep {
    pub step_number: usize,
    pub step: String,
    pub description: String,
    pub result: String,
    pub status: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedStatistics {
    pub total_queries: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub hit_rate: String,
    pub average_time: String,
}

impl QueryExport {
    pub fn build(latest: &CompletedQuery, stats: &ResolverStats) -> Self {
        let steps = latest
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| ExportedStep {
                step_number: index + 1,
                step: step.kind.label().to_string(),
                description: step.description.clone(),
                result: step.result.to_string(),
                status: step.status.as_str().to_string(),
                time: format!("{}ms", step.time_ms),
            })
            .collect();

        Self {
            domain: latest.query.domain.to_string(),
            query_type: latest.query.record_type.as_str().to_string(),
            timestamp: format_local_timestamp(latest.query.timestamp_ms),
            total_resolution_time: format!("{}ms", latest.total_time_ms),
            steps,
            statistics: ExportedStatistics::from(stats),
        }
    }

    /// `dns-query-<domain>-<epochMs>.json`, stamped with the export time.
    pub fn file_name(&self, exported_at_ms: i64) -> String {
        format!("dns-query-{}-{}.json", self.domain, exported_at_ms)
    }
}

impl From<&ResolverStats> for ExportedStatistics {
    fn from(stats: &ResolverStats) -> Self {
        let hit_rate = if stats.total_queries > 0 {
            format!("{}%", to_fixed(stats.hit_rate(), 1))
        } else {
            "0%".to_string()
        };

        Self {
            total_queries: stats.total_queries,
            cache_hits: stats.hits,
            cache_misses: stats.misses,
            hit_rate,
            average_time: format!("{}ms", to_fixed(stats.avg_time_ms, 2)),
        }
    }
}

/// Formats `value` with `digits` decimals, rounding ties away from zero.
///
/// `{:.N}` alone rounds exact ties to even, so 7.125 would print as 7.12.
pub fn to_fixed(value: f64, digits: u32) -> String {
    let scale = 10f64.powi(digits as i32);
    format!("{:.*}", digits as usize, (value * scale).round() / scale)
}

/// Renders epoch milliseconds as e.g. `3/14/2025, 9:26:53 AM` in local time.
pub fn format_local_timestamp(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        None => timestamp_ms.to_string(),
    }
}
