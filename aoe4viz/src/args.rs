use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Explore AoE4 unit data from the terminal", long_about = None)]
pub struct Cli {
    /// Path to the unit dataset (JSON array, or object with a `data` array)
    #[arg(long)]
    pub data: PathBuf,

    /// Optional heatmap configuration (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the civilizations present in the dataset
    Civs,
    /// Print the bonus damage heatmap for a pair of civilizations
    Heatmap {
        /// Attacking civilization (code or title)
        #[arg(short, long)]
        attacker: Option<String>,
        /// Defending civilization (code or title)
        #[arg(short, long)]
        defender: Option<String>,
        /// Only show attackers with at least one bonus
        #[arg(long)]
        relevant_attackers: bool,
        /// Only show defenders receiving at least one bonus
        #[arg(long)]
        relevant_defenders: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Shade cells by bonus instead of printing values
        #[arg(long)]
        shade: bool,
    },
    /// Print the unit table of one civilization
    Units {
        #[arg(long)]
        civ: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
