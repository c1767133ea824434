//! Simak CLI entry point.
//!
//! Parses arguments, initializes logging, loads settings, and dispatches to
//! the subcommand handlers. All errors surface as a single styled line and a
//! non-zero exit code.

use clap::Parser;
use simak::cli::{Cli, Commands};
use simak::config::AppSettings;
use simak::error::CliResult;
use simak::output;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            output::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &settings) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Dispatch to the subcommand handler.
fn run(cli: &Cli, settings: &AppSettings) -> CliResult<()> {
    let data_file = cli.data_file.as_deref();
    let quiet = cli.quiet;

    match &cli.command {
        Commands::Add(cmd) => cmd.execute(data_file, quiet),
        Commands::List(cmd) => cmd.execute(settings, data_file, quiet),
        Commands::Update(cmd) => cmd.execute(data_file, quiet),
        Commands::Remove(cmd) => cmd.execute(settings, data_file, quiet),
        Commands::Reset(cmd) => cmd.execute(settings, data_file, quiet),
        Commands::Import(cmd) => cmd.execute(data_file, quiet),
        Commands::Export(cmd) => cmd.execute(settings, data_file, quiet),
    }
}

/// Load settings, honoring a `--config` override.
fn load_settings(cli: &Cli) -> CliResult<AppSettings> {
    match &cli.config {
        Some(path) => Ok(AppSettings::load_from(path)?),
        None => Ok(AppSettings::load()?),
    }
}

/// Initialize tracing to stderr; `-v` raises the default level to debug.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "simak=debug" } else { "simak=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
