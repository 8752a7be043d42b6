use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use planwise::cli::args::{Cli, Commands};
use planwise::cli::commands;
use planwise::config::{Config, Paths};
use planwise::error::PlannerError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run() -> Result<(), PlannerError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file)?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Parse(args) => commands::parse(args, &config, format)?,
        Commands::Templates(args) => commands::templates(args, &config, format)?,
        Commands::Occurrences(args) => commands::occurrences(args, &config, format)?,
        Commands::Config(args) => commands::config(&paths, args.command, format)?,
        Commands::Completions { shell, install } => commands::completions(&shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
