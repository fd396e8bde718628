use ferrous_sim_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        export_dir = %config.export.directory,
        seed_defaults = config.seed.use_defaults,
        "Configuration loaded"
    );

    Ok(config)
}
