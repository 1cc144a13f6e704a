//! Bloch Command-Line Interface
//!
//! Builds a single-qubit gate sequence one event at a time and hands the
//! finished circuit to the Bloch sphere renderer as OpenQASM 3.
//!
//! ```text
//!              |0>
//!               |
//!          .----+----.
//!        /      |      \
//!       |       o------|---- |+>
//!        \     /       /
//!          '--/------'
//!            /
//!          |1>
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;

use bloch_core::Config;

mod commands;

use commands::{about, interactive, replay, version};

/// Bloch - build single-qubit gate sequences and watch them on the Bloch sphere
#[derive(Parser)]
#[command(name = "bloch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ~/.bloch/config.yaml)
    #[arg(short, long, global = true, env = "BLOCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read events from stdin, one per line
    Interactive,

    /// Dispatch a scripted list of events and print the final state
    Replay {
        /// Events: gate symbols (H, RX, SD...), angles (PI/4, -2*PI...),
        /// clear, visualize, about, quit. Put `--` before the list when it
        /// holds negative angles.
        #[arg(required = true)]
        events: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Describe the gates and limits
    About,

    /// Show version information
    Version,
}

/// How `replay` prints the final snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    // -v flags win over the configured level
    let filter = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Interactive => interactive::execute(&config),
        Commands::Replay { events, format } => replay::execute(&config, &events, format),
        Commands::About => {
            about::execute();
            Ok(())
        }
        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}
