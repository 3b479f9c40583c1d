use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding saved sessions (overrides the configured location)
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the monitored nutrigenomic variants
    Catalog {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the lifestyle questionnaire fields and allowed options as JSON
    Template,

    /// Analyze a raw genotype export (23andMe, AncestryDNA, FamilyTreeDNA; may be compressed)
    Analyze {
        /// Raw data file
        file: PathBuf,
        /// Write the analysis export envelope to this file
        #[arg(short = 'o', long = "output")]
        output_file: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Submit questionnaire answers (JSON file) for a session
    Questionnaire {
        session_id: String,
        answers_file: PathBuf,
    },

    /// Show personalized recommendations for a session
    Recommend {
        session_id: String,
        #[arg(short = 'o', long = "output")]
        output_file: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show per-category nutrient need scores for a session
    Radar {
        session_id: String,
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate a meal plan for a session (needs the configured API key)
    MealPlan {
        session_id: String,
        /// Number of days (1-7)
        #[arg(long, default_value = "3")]
        days: u8,
        #[arg(short = 'o', long = "output")]
        output_file: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show session status
    Status { session_id: String },

    /// Delete a session and all data derived from it
    Delete { session_id: String },

    /// Print the effective configuration as TOML
    Config {
        /// Write the effective configuration to the user config file
        #[arg(long)]
        save: bool,
    },
}
