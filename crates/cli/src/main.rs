use clap::{Parser, Subcommand};
use ferrous_sim_domain::{CliOverrides, RecordType};
use std::io::{self, Write};
use std::str::FromStr;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod render;
mod shell;

#[derive(Parser)]
#[command(name = "ferrous-sim")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous DNS Simulator - step through cache, resolver and authoritative lookups")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Directory export files are written to
    #[arg(long, value_name = "DIR", global = true)]
    export_dir: Option<String>,

    /// Start with an empty cache and server table
    #[arg(long, global = true)]
    no_seed: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one or more domains in a single session
    Resolve {
        /// Domains or URLs, resolved in order
        #[arg(required = true)]
        domains: Vec<String>,

        /// Record type for every query
        #[arg(short = 't', long = "type", default_value = "A", value_parser = RecordType::from_str)]
        record_type: RecordType,

        /// Export the last query as JSON
        #[arg(long)]
        export: bool,
    },
    /// Interactive session over stdin (default)
    Shell,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        export_directory: cli.export_dir.clone(),
        no_seed: cli.no_seed,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous DNS Simulator v{}", env!("CARGO_PKG_VERSION"));

    let repos = di::Repositories::new(&config);
    let use_cases = di::UseCases::new(&repos);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Shell) {
        Command::Resolve {
            domains,
            record_type,
            export,
        } => {
            for domain in &domains {
                match use_cases.resolve.execute(domain, record_type) {
                    Ok(completed) => render::completed_query(&mut out, &completed)?,
                    Err(e) => {
                        warn!(input = %domain, error = %e, "Skipping query");
                        writeln!(out, "error: {}", e)?;
                    }
                }
            }

            writeln!(out)?;
            render::stats(&mut out, &use_cases.get_stats.execute())?;

            if export {
                let exported = use_cases.export.execute()?;
                writeln!(out, "Query data written to {}", exported.path.display())?;
            }
        }
        Command::Shell => {
            let stdin = io::stdin();
            shell::run(&use_cases, stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}
