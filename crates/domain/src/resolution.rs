use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Stage of the simulated resolution path that produced a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    LocalCache,
    RecursiveResolver,
    AuthoritativeServer,
}

impl StepKind {
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::LocalCache => "Local Cache",
            StepKind::RecursiveResolver => "Recursive Resolver",
            StepKind::AuthoritativeServer => "Authoritative Server",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Success,
    Error,
    Warning,
    Info,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Success => "success",
            StepStatus::Error => "error",
            StepStatus::Warning => "warning",
            StepStatus::Info => "info",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One hop of a simulated resolution. Steps are only produced by the
/// resolution engine and their order is the order the hops happened in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionStep {
    pub kind: StepKind,
    pub description: String,
    pub result: Arc<str>,
    pub status: StepStatus,
    pub time_ms: u64,
}

impl ResolutionStep {
    pub fn new(
        kind: StepKind,
        description: impl Into<String>,
        result: impl Into<Arc<str>>,
        status: StepStatus,
        time_ms: u64,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            result: result.into(),
            status,
            time_ms,
        }
    }
}

pub fn total_time_ms(steps: &[ResolutionStep]) -> u64 {
    steps.iter().map(|step| step.time_ms).sum()
}
