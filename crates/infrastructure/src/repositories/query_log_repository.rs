use ferrous_sim_application::ports::QueryLogRepository;
use ferrous_sim_domain::CompletedQuery;
use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

/// Unbounded session history. The front of the deque is the newest query.
#[derive(Debug, Default)]
pub struct InMemoryQueryLogRepository {
    queries: RwLock<VecDeque<CompletedQuery>>,
}

impl InMemoryQueryLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QueryLogRepository for InMemoryQueryLogRepository {
    fn append(&self, query: CompletedQuery) {
        self.queries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push_front(query);
    }

    fn recent(&self, limit: Option<usize>) -> Vec<CompletedQuery> {
        let queries = self.queries.read().unwrap_or_else(PoisonError::into_inner);
        let limit = limit.unwrap_or(queries.len());
        queries.iter().take(limit).cloned().collect()
    }

    fn latest(&self) -> Option<CompletedQuery> {
        self.queries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .front()
            .cloned()
    }

    fn len(&self) -> usize {
        self.queries.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
