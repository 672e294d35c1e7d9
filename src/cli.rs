//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use linecheck::output::OutputMode;

/// linecheck - Inspection result screens for the quality station
#[derive(Parser, Debug)]
#[command(
    name = "linecheck",
    version,
    about = "Inspection result screens for the quality station",
    long_about = "Classify an inspection score, derive its diagnostic checklist\n\
                  and display metrics, and render the operator result screen.\n\n\
                  The score comes from the station's measurement subsystem and\n\
                  must lie between 0 and 100."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the full result screen for a measured score
    Inspect {
        /// Measured quality score (0-100)
        #[arg(short, long)]
        score: i32,
    },

    /// Show the diagnostic checklist for a measured score
    Checklist {
        /// Measured quality score (0-100)
        #[arg(short, long)]
        score: i32,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Inspect { score }) => commands::inspect(score, output_mode),
        Some(Command::Checklist { score }) => commands::checklist(score, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("linecheck v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("linecheck v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'linecheck --help' for usage");
                println!("Run 'linecheck inspect --score <N>' to render a result screen");
            }
            Ok(())
        },
    }
}
