use crate::di::UseCases;
use crate::render;
use ferrous_sim_domain::{DomainError, RecordType};
use std::io::{BufRead, Write};
use std::str::FromStr;

const HELP: &str = "\
Commands:
  query <domain|url> [A|AAAA|CNAME|MX]   resolve a domain
  add <domain> <ip> [A|AAAA|CNAME|MX]    add an authoritative record
  servers                                list authoritative records
  cache                                  list cache entries with remaining TTL
  remove <domain>                        drop every cached record for a domain
  clear                                  empty the cache
  history [n]                            show the n most recent queries
  stats                                  show hit rate and average time
  types                                  list supported record types
  export                                 write the latest query as JSON
  help                                   show this message
  quit                                   leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Query {
        domain: String,
        record_type: RecordType,
    },
    AddServer {
        domain: String,
        ip: String,
        record_type: RecordType,
    },
    Servers,
    Cache,
    Remove {
        domain: String,
    },
    Clear,
    History {
        limit: Option<usize>,
    },
    Stats,
    Types,
    Export,
    Help,
    Quit,
    Empty,
}

fn parse_type(arg: Option<&str>) -> Result<RecordType, String> {
    match arg {
        None => Ok(RecordType::default()),
        Some(text) => RecordType::from_str(text)
            .map_err(|_| DomainError::InvalidRecordType(text.to_string()).to_string()),
    }
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(ShellCommand::Empty);
        };
        let args: Vec<&str> = words.collect();

        let parsed = match (command.to_lowercase().as_str(), args.as_slice()) {
            ("query" | "q" | "resolve", [domain, rest @ ..]) if rest.len() <= 1 => {
                ShellCommand::Query {
                    domain: domain.to_string(),
                    record_type: parse_type(rest.first().copied())?,
                }
            }
            ("add", [domain, ip, rest @ ..]) if rest.len() <= 1 => ShellCommand::AddServer {
                domain: domain.to_string(),
                ip: ip.to_string(),
                record_type: parse_type(rest.first().copied())?,
            },
            ("servers", []) => ShellCommand::Servers,
            ("cache", []) => ShellCommand::Cache,
            ("remove" | "rm", [domain]) => ShellCommand::Remove {
                domain: domain.to_string(),
            },
            ("clear", []) => ShellCommand::Clear,
            ("history", []) => ShellCommand::History { limit: None },
            ("history", [n]) => ShellCommand::History {
                limit: Some(n.parse().map_err(|_| format!("Invalid count: {}", n))?),
            },
            ("stats", []) => ShellCommand::Stats,
            ("types", []) => ShellCommand::Types,
            ("export", []) => ShellCommand::Export,
            ("help" | "?", []) => ShellCommand::Help,
            ("quit" | "exit", []) => ShellCommand::Quit,
            (other, _) => {
                return Err(format!(
                    "Unrecognized command '{}', type 'help' for usage",
                    other
                ))
            }
        };

        Ok(parsed)
    }
}

/// Reads commands line by line until `quit` or end of input.
pub fn run(use_cases: &UseCases, mut input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "ferrous-sim shell, type 'help' for commands")?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                if let Err(e) = execute(use_cases, command, out)? {
                    writeln!(out, "error: {}", e)?;
                }
            }
            Err(e) => writeln!(out, "error: {}", e)?,
        }
    }

    Ok(())
}

/// Outer error is an output failure; inner error is a rejected action that
/// leaves the session unchanged.
fn execute(
    use_cases: &UseCases,
    command: ShellCommand,
    out: &mut impl Write,
) -> std::io::Result<Result<(), DomainError>> {
    match command {
        ShellCommand::Query {
            domain,
            record_type,
        } => match use_cases.resolve.execute(&domain, record_type) {
            Ok(completed) => render::completed_query(out, &completed)?,
            Err(e) => return Ok(Err(e)),
        },
        ShellCommand::AddServer {
            domain,
            ip,
            record_type,
        } => match use_cases.add_server.execute(&domain, &ip, record_type) {
            Ok(record) => writeln!(out, "Added {} to authoritative servers", record.domain)?,
            Err(e) => return Ok(Err(e)),
        },
        ShellCommand::Servers => render::servers(out, &use_cases.get_servers.execute())?,
        ShellCommand::Cache => render::cache(out, &use_cases.get_cache.execute())?,
        ShellCommand::Remove { domain } => {
            let removed = use_cases.remove_cache_entry.execute(&domain);
            writeln!(out, "Removed {} ({} entries) from cache", domain, removed)?;
        }
        ShellCommand::Clear => {
            use_cases.clear_cache.execute();
            writeln!(out, "Cache cleared")?;
        }
        ShellCommand::History { limit } => {
            render::history(out, &use_cases.get_queries.execute(limit))?
        }
        ShellCommand::Stats => render::stats(out, &use_cases.get_stats.execute())?,
        ShellCommand::Export => match use_cases.export.execute() {
            Ok(exported) => writeln!(
                out,
                "Query data written to {}",
                exported.path.display()
            )?,
            Err(e) => return Ok(Err(e)),
        },
        ShellCommand::Types => {
            for record_type in RecordType::ALL {
                writeln!(out, "  {:<6} {}", record_type, record_type.describe())?;
            }
        }
        ShellCommand::Help => writeln!(out, "{}", HELP)?,
        ShellCommand::Quit | ShellCommand::Empty => {}
    }

    Ok(Ok(()))
}
