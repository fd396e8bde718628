#![allow(dead_code)]
use ferrous_sim_domain::{
    CompletedQuery, DnsQuery, RecordType, ResolutionStep, StepKind, StepStatus,
};
use std::sync::Arc;

pub struct CompletedQueryBuilder {
    domain: Arc<str>,
    record_type: RecordType,
    timestamp_ms: i64,
    steps: Vec<ResolutionStep>,
}

impl CompletedQueryBuilder {
    pub fn new() -> Self {
        Self {
            domain: "example.com".into(),
            record_type: RecordType::A,
            timestamp_ms: 1_700_000_000_000,
            steps: Vec::new(),
        }
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn timestamp_ms(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    pub fn step(mut self, kind: StepKind, result: &str, status: StepStatus, time_ms: u64) -> Self {
        self.steps.push(ResolutionStep::new(
            kind,
            format!("{} step", kind.label()),
            result,
            status,
            time_ms,
        ));
        self
    }

    /// Cache hit path: a single successful local cache step.
    pub fn cache_hit(self, ip: &str) -> Self {
        self.step(StepKind::LocalCache, ip, StepStatus::Success, 2)
    }

    /// Miss path that ends in an authoritative answer.
    pub fn resolved(self, ip: &str) -> Self {
        self.step(StepKind::LocalCache, "MISS", StepStatus::Warning, 1)
            .step(StepKind::RecursiveResolver, "8.8.8.8", StepStatus::Info, 15)
            .step(StepKind::AuthoritativeServer, ip, StepStatus::Success, 25)
    }

    /// Miss path that ends in NXDOMAIN.
    pub fn nxdomain(self) -> Self {
        self.step(StepKind::LocalCache, "MISS", StepStatus::Warning, 1)
            .step(StepKind::RecursiveResolver, "8.8.8.8", StepStatus::Info, 15)
            .step(StepKind::AuthoritativeServer, "NXDOMAIN", StepStatus::Error, 30)
    }

    pub fn build(self) -> CompletedQuery {
        CompletedQuery::new(
            DnsQuery::new(self.domain, self.record_type, self.timestamp_ms),
            self.steps,
        )
    }
}

impl Default for CompletedQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
