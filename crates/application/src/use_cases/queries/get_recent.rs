use crate::ports::QueryLogRepository;
use ferrous_sim_domain::CompletedQuery;
use std::sync::Arc;

pub struct GetRecentQueriesUseCase {
    repository: Arc<dyn QueryLogRepository>,
}

impl GetRecentQueriesUseCase {
    pub fn new(repository: Arc<dyn QueryLogRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, limit: Option<usize>) -> Vec<CompletedQuery> {
        self.repository.recent(limit)
    }
}
