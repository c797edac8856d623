#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    CommandStrategy, InitStrategy, ParseInput, ParseStrategy, PatchInput, PatchStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "xuangu")]
#[command(about = "Chinese stock-screening instruction parser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an instruction into screening criteria
    Parse {
        /// The instruction text
        instruction: String,

        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Patch recognized values back into an instruction
    Patch {
        /// The instruction text
        instruction: String,

        /// Field changes, e.g. --set large_order_ranking=20
        #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { instruction, json } => {
            ParseStrategy.execute(ParseInput { instruction, json })
        }
        Commands::Patch { instruction, set } => {
            PatchStrategy.execute(PatchInput { instruction, set })
        }
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
