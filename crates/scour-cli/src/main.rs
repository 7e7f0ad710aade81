//! Scour CLI - data quality and cleaning tool for tabular datasets.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { file, json } => commands::analyze::run(file, json, cli.verbose),

        Commands::Clean {
            file,
            trim,
            dedupe,
            fill,
            drop_empty,
            output,
        } => commands::clean::run(file, trim, dedupe, fill, drop_empty, output, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
