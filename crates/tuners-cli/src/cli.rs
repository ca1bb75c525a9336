//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tuners_types::OutputFormat;

#[derive(Parser)]
#[command(name = "tuners-cost")]
#[command(version)]
#[command(about = "Vehicle type classification with insurance and financing estimates")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a vehicle image and show cost estimates
    Predict {
        /// Path to an image file (takes precedence over --url)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Public URL of an image
        #[arg(long)]
        url: Option<String>,
    },

    /// Show the insurance and financing table
    Costs,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the prediction key
        #[arg(long)]
        set_prediction_key: Option<String>,

        /// Set the prediction endpoint for image URLs
        #[arg(long)]
        set_endpoint_url: Option<String>,

        /// Set the prediction endpoint for image files
        #[arg(long)]
        set_endpoint_file: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set request timeout in seconds (0 = no timeout)
        #[arg(long)]
        set_timeout: Option<u64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
