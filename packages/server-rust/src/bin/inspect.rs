//! Prints how an invocation resolves: qualified name, lookup name and target
//! executor. Nothing is executed.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use svcgate_core::{CommandError, DefaultNamespace};
use svcgate_server::service::{resolve_encoded, resolve_named, Resolution};
use svcgate_server::telemetry::{init_tracing, DEFAULT_FILTER};

#[derive(Debug, Parser)]
#[command(name = "svcgate-inspect", version, about = "Resolve service invocations against default namespaces")]
struct Cli {
    /// Default database for partial service names.
    #[arg(long, env = "SVCGATE_DEFAULT_DATABASE")]
    default_database: Option<String>,

    /// Default schema for bare service names.
    #[arg(long, env = "SVCGATE_DEFAULT_SCHEMA")]
    default_schema: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve an encoded `type;name;jsonArgs` command.
    Encoded { command: String },
    /// Resolve a structured service/method call.
    Named { service: String, method: String },
}

fn resolve(cli: &Cli) -> Result<Resolution, CommandError> {
    let namespace = DefaultNamespace::new(cli.default_database.clone(), cli.default_schema.clone());
    match &cli.command {
        Command::Encoded { command } => resolve_encoded(&namespace, command),
        Command::Named { service, method } => Ok(resolve_named(&namespace, service, method)),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(DEFAULT_FILTER, cli.json_logs)?;

    match resolve(&cli) {
        Ok(resolution) => {
            tracing::info!(
                name = %resolution.qualified_name,
                target = resolution.target.as_str(),
                "resolved"
            );
            println!("{}", serde_json::to_string_pretty(&resolution)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ CommandError::MissingDelimiter { .. }) => {
            println!("{err}");
            Ok(ExitCode::from(2))
        }
        Err(err) => Err(err.into()),
    }
}
