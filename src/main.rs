//! modelsync - keep client model declarations in sync with backend JSON

use clap::Parser;
use tracing_subscriber::EnvFilter;

use modelsync::cli::{Cli, Commands};
use modelsync::commands;

/// Log to stderr; `MODELSYNC_LOG` takes an env-filter directive, otherwise `-v` enables debug
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("MODELSYNC_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("modelsync=debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(cli.config, args, cli.verbose),
        Commands::Check => commands::check::run(cli.config),
        Commands::Infer(args) => commands::infer::run(args),
        Commands::Languages => commands::languages::run(),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = miette::Diagnostic::help(&e) {
            eprintln!("Help: {}", help);
        }
        std::process::exit(1);
    }
}
