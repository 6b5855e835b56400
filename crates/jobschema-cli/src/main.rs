mod config;
mod logging;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use jobschema_core::{Error as CoreError, build, redact_connection_string, scheduler_tables};
use jobschema_ddl::{DdlEmitter, Dialect, EmitError};
use thiserror::Error;

use config::{ConfigError, Overrides};
use logging::{LoggingError, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("schema error: {0}")]
    Schema(#[from] CoreError),
    #[error("emit error: {0}")]
    Emit(#[from] EmitError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "jobschema",
    version,
    about = "Generate job-store DDL for a SQL dialect"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the job-store DDL script.
    Generate(GenerateArgs),
    /// Print the built schema graph as JSON.
    Inspect(InspectArgs),
    /// List supported dialect identifiers.
    Dialects,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Config file (defaults to ./jobschema.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Target dialect (postgres, mysql, sqlserver, oracle, h2, hsqldb, sqlite, db2).
    #[arg(long)]
    dialect: Option<String>,
    /// Connection URL used to detect the dialect.
    #[arg(long)]
    url: Option<String>,
    /// Prefix prepended to every table name.
    #[arg(long)]
    prefix: Option<String>,
    /// Output path for the SQL script.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Emit drop statements before the create statements.
    #[arg(long, default_value_t = false, conflicts_with = "no_drop")]
    drop: bool,
    /// Skip drop statements even when the config file asks for them.
    #[arg(long, default_value_t = false)]
    no_drop: bool,
    /// One column per line.
    #[arg(long, default_value_t = false, conflicts_with = "no_pretty")]
    pretty: bool,
    /// Compact layout even when the config file asks for pretty output.
    #[arg(long, default_value_t = false)]
    no_pretty: bool,
    /// Append JSON log lines to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Config file (defaults to ./jobschema.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Prefix prepended to every table name.
    #[arg(long)]
    prefix: Option<String>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Dialects => {
            for dialect in Dialect::ALL {
                println!("{dialect}");
            }
            Ok(())
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        config,
        dialect,
        url,
        prefix,
        out,
        drop,
        no_drop,
        pretty,
        no_pretty,
        log_file,
    } = args;

    init_logging(log_file.as_deref())?;
    let timer = Instant::now();
    tracing::info!(event = "run_started", command = "generate");

    let file = config::load_file_config(config.as_deref())?;
    if file.is_some() {
        tracing::info!(event = "config_loaded");
    }

    let overrides = Overrides {
        dialect,
        url,
        table_prefix: prefix,
        output: out,
        drop_first: switch(drop, no_drop),
        pretty: switch(pretty, no_pretty),
    };
    let settings = config::resolve(file.unwrap_or_default(), overrides)?;

    match settings.url.as_deref().map(redact_connection_string) {
        Some(connection) => tracing::info!(
            event = "dialect_resolved",
            dialect = %settings.dialect,
            url = %connection.redacted
        ),
        None => tracing::info!(event = "dialect_resolved", dialect = %settings.dialect),
    }

    let graph = build(&scheduler_tables(), &settings.table_prefix)?;
    tracing::info!(
        event = "schema_built",
        tables = graph.len(),
        prefix = %settings.table_prefix
    );

    DdlEmitter::new(settings.emit.clone()).emit(&graph, settings.dialect, &settings.output)?;

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(event = "run_finished", status = "success", duration_ms = duration_ms);

    Ok(())
}

/// Collapse an `--x` / `--no-x` pair; `None` defers to the config file.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn run_inspect(args: InspectArgs) -> Result<(), CliError> {
    let file = config::load_file_config(args.config.as_deref())?.unwrap_or_default();
    let overrides = Overrides {
        table_prefix: args.prefix,
        ..Overrides::default()
    };
    let prefix = config::resolve_prefix(&file, &overrides);

    let graph = build(&scheduler_tables(), &prefix)?;
    println!("{}", serde_json::to_string_pretty(&graph)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "jobschema",
            "generate",
            "--dialect",
            "oracle",
            "--prefix",
            "SCHED_",
            "--out",
            "quartz.sql",
            "--drop",
        ])
        .expect("parse args");

        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.dialect.as_deref(), Some("oracle"));
        assert_eq!(args.prefix.as_deref(), Some("SCHED_"));
        assert_eq!(args.out, Some(PathBuf::from("quartz.sql")));
        assert!(args.drop);
        assert!(!args.pretty);
        assert_eq!(switch(args.drop, args.no_drop), Some(true));
        assert_eq!(switch(args.pretty, args.no_pretty), None);
    }

    #[test]
    fn negated_flags_turn_options_off() {
        let cli = Cli::try_parse_from(["jobschema", "generate", "--no-drop", "--no-pretty"])
            .expect("parse args");
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(switch(args.drop, args.no_drop), Some(false));
        assert_eq!(switch(args.pretty, args.no_pretty), Some(false));
    }

    #[test]
    fn drop_and_no_drop_conflict() {
        assert!(Cli::try_parse_from(["jobschema", "generate", "--drop", "--no-drop"]).is_err());
    }

    #[test]
    fn parses_dialects_command() {
        let cli = Cli::try_parse_from(["jobschema", "dialects"]).expect("parse args");
        assert!(matches!(cli.command, Command::Dialects));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
