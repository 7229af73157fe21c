//! CLI frontend for the Orakel oracle engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ora",
    about = "Orakel: dice, oracles and random tables for solo play",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one generator and print the result
    Roll {
        /// Generator kind (see `ora kinds`)
        generator: String,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Generator parameter as key=value (repeatable)
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Append the result to this history file
        #[arg(long)]
        history: Option<PathBuf>,

        /// Print the stored JSON document instead of text
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive oracle session
    Play {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Initial chaos factor (1-9)
        #[arg(short, long, default_value = "5")]
        chaos: u32,

        /// History file to load and keep up to date
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Show a saved history file
    History {
        /// History file
        file: PathBuf,

        /// Output format: table, markdown, text
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List every generator and result kind
    Kinds,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            generator,
            seed,
            params,
            history,
            json,
        } => commands::roll::run(&generator, seed, &params, history.as_deref(), json),
        Commands::Play {
            seed,
            chaos,
            history,
        } => commands::play::run(seed, chaos, history),
        Commands::History { file, format } => commands::history::run(&file, &format),
        Commands::Kinds => commands::kinds::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
