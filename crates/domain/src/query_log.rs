use crate::dns_query::DnsQuery;
use crate::resolution::{total_time_ms, ResolutionStep, StepStatus};

/// A query together with the steps the engine produced for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedQuery {
    pub query: DnsQuery,
    pub steps: Vec<ResolutionStep>,
    pub total_time_ms: u64,
}

impl CompletedQuery {
    pub fn new(query: DnsQuery, steps: Vec<ResolutionStep>) -> Self {
        let total_time_ms = total_time_ms(&steps);
        Self {
            query,
            steps,
            total_time_ms,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.steps.iter().any(|s| s.status == StepStatus::Success)
    }

    pub fn is_failed(&self) -> bool {
        self.steps.iter().any(|s| s.status == StepStatus::Error)
    }

    /// Result of the successful step, if the query resolved.
    pub fn answer(&self) -> Option<&str> {
        self.steps
            .iter()
            .find(|s| s.status == StepStatus::Success)
            .map(|s| s.result.as_ref())
    }
}
