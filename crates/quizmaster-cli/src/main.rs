//! quizmaster CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "quizmaster", version, about = "Interactive quiz competition administrator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive quiz competition
    Run {
        /// Path to a .toml question bank (defaults to the configured bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Questions per participant per session
        #[arg(long)]
        questions: Option<usize>,

        /// Directory for saved reports
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to a bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Render a saved competition report
    Show {
        /// Path to a report JSON file
        #[arg(long)]
        report: PathBuf,
    },

    /// Create starter config and example question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizmaster=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            bank,
            questions,
            output,
            config,
        } => commands::run::execute(bank, questions, output, config),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Show { report } => commands::show::execute(report),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
