use ferrous_sim_domain::CompletedQuery;

/// Session history of completed queries, newest first.
pub trait QueryLogRepository: Send + Sync {
    /// Prepends `query` so it becomes the most recent entry.
    fn append(&self, query: CompletedQuery);

    /// Up to `limit` most recent queries, or all of them for `None`.
    fn recent(&self, limit: Option<usize>) -> Vec<CompletedQuery>;

    fn latest(&self) -> Option<CompletedQuery>;

    fn len(&self) -> usize;
}
