//! CLI frontend for the three-coin I Ching oracle.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use iching_core::CatalogSource;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "ICHING_LOG";

#[derive(Parser)]
#[command(
    name = "iching",
    about = "Consult the I Ching with the three-coin method",
    version,
    propagate_version = true
)]
struct Cli {
    /// Load hexagram data from this CSV file instead of the built-in table
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Toss the coins and read the resulting hexagrams
    Cast {
        /// The question to put to the oracle
        question: Option<String>,

        /// RNG seed for a reproducible reading
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read lines that were cast elsewhere (e.g. 9,8,8,6,7,8 or 988678, bottom first)
    Interpret {
        /// Six line values from 6 to 9, bottom line first
        lines: String,

        /// The question that was asked
        #[arg(short, long, default_value = "")]
        question: String,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a hexagram by number or name
    Show {
        /// Hexagram number (1-64) or name
        hexagram: String,
    },

    /// List all 64 hexagrams
    List,

    /// Validate hexagram data
    Check,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = cli.data.map_or(CatalogSource::Builtin, CatalogSource::File);

    let result = match cli.command {
        Commands::Cast {
            question,
            seed,
            json,
        } => commands::cast::run(&source, question.as_deref().unwrap_or(""), seed, json),
        Commands::Interpret {
            lines,
            question,
            json,
        } => commands::interpret::run(&source, &lines, &question, json),
        Commands::Show { hexagram } => commands::show::run(&source, &hexagram),
        Commands::List => commands::list::run(&source),
        Commands::Check => commands::check::run(&source),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
