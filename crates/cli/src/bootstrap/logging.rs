use ferrous_sim_domain::Config;
use tracing::{info, warn};

pub fn init_logging(config: &Config) {
    let known = config.logging.is_known_level();
    let log_level = if known {
        config.logging.level.trim().parse().unwrap_or(tracing::Level::INFO)
    } else {
        tracing::Level::INFO
    };

    // stdout belongs to the simulator output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(true)
        .init();

    if !known {
        warn!(level = %config.logging.level, "Unknown log level, falling back to info");
    }

    info!("Logging initialized at level: {}", log_level);
}
