use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "terrascope",
    version,
    about = "Soil fertility assessment and crop recommendation engine"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to terrascope.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assess a soil measurement and print the report
    Assess {
        /// JSON file with the raw measurement
        #[arg(short, long)]
        input: PathBuf,

        /// Override the measurement's season
        #[arg(short, long)]
        season: Option<String>,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Show only a sampled handful of suitable crops
        #[arg(long)]
        showcase: Option<usize>,

        /// Seed for showcase sampling
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Ask the soil advisor a question
    Ask {
        /// The question
        question: String,

        /// JSON measurement file giving the advisor context
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// List the fertilizer rules in evaluation order
    Rules,
    /// Validate configuration and crop catalog
    Check,
}
