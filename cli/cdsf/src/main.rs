//! cdsf CLI — validate, inspect, and publish CloudDSF+ knowledge bases.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cdsf", version, about = "CloudDSF+ knowledge-base toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the consistency rule battery on a knowledge base
    Validate {
        /// Knowledge-base document (.toml)
        input: PathBuf,
        /// Report format (human, json)
        #[arg(long)]
        report: Option<String>,
    },
    /// Validate a knowledge base and serialize it to JSON
    Export {
        /// Knowledge-base document (.toml)
        input: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print aggregate statistics for a knowledge base
    Inspect {
        /// Knowledge-base document (.toml)
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Exit codes: 0 clean, 1 consistency defects, 2 load or referential errors.
    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Commands::Validate { input, report } => commands::validate::run(&input, report.as_deref()),
        Commands::Export { input, output } => commands::export::run(&input, output.as_deref()),
        Commands::Inspect { input } => commands::inspect::run(&input),
    }
}
