use crate::ports::StatsRepository;
use ferrous_sim_domain::ResolverStats;
use std::sync::Arc;

pub struct GetResolverStatsUseCase {
    stats: Arc<dyn StatsRepository>,
}

impl GetResolverStatsUseCase {
    pub fn new(stats: Arc<dyn StatsRepository>) -> Self {
        Self { stats }
    }

    pub fn execute(&self) -> ResolverStats {
        self.stats.snapshot()
    }
}
