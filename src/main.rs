//! JS Heap Inspector CLI
//!
//! Converts V8 heap snapshots into the common runtime format and extracts
//! snapshots from performance-reporter runs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use heap_inspector::commands::{
    display_schema, execute_convert, execute_extract, print_stats, ConvertArgs, ExtractArgs,
};

/// JS Heap Inspector - heap snapshot conversion
#[derive(Parser, Debug)]
#[command(name = "heap-inspector")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a V8 heap snapshot to the common runtime format
    Convert {
        /// Path to V8 heap snapshot (.heapsnapshot)
        input: PathBuf,

        /// Path to output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Ignore the embedded energy metrics
        #[arg(long)]
        no_energy: bool,
    },

    /// Extract heap snapshots from a performance-reporter run
    Extract {
        /// Path to performance-reporter run (.json)
        report: PathBuf,

        /// Path to output heap snapshot (.heapsnapshot)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write every snapshot, numbered, instead of only the latest
        #[arg(long)]
        all: bool,
    },

    /// Display the runtime output schema
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            no_energy,
        } => {
            let args = ConvertArgs {
                input,
                output,
                skip_energy: no_energy,
            };

            let (output, stats) = execute_convert(&args)?;
            print_stats(&args, &output, &stats);
        }

        Commands::Extract {
            report,
            output,
            all,
        } => {
            let args = ExtractArgs {
                report,
                output,
                all,
            };

            let written = execute_extract(&args)?;

            println!("Input file: {}", args.report.display());
            for path in written {
                println!("Output file: {}", path.display());
            }
        }

        Commands::Schema => {
            display_schema();
        }
    }

    Ok(())
}
