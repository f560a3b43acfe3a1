//! Command-line argument parsing for autotriage
//!
//! Provides clap-based CLI with subcommands for the front-desk workflows.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Autotriage - symptom-to-diagnosis triage for the workshop front desk
#[derive(Parser, Debug)]
#[command(name = "autotriage")]
#[command(version)]
#[command(about = "Rule-based symptom triage for auto-repair workshops", long_about = None)]
pub struct Args {
    /// Customer complaint to diagnose
    #[arg(value_name = "COMPLAINT")]
    pub complaint: Option<String>,

    /// Vehicle make
    #[arg(long)]
    pub make: Option<String>,

    /// Vehicle model
    #[arg(long)]
    pub model: Option<String>,

    /// Vehicle model year
    #[arg(long)]
    pub year: Option<i32>,

    /// Emit the JSON response envelope instead of the formatted report
    #[arg(long)]
    pub json: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive triage session
    Interactive,

    /// Diagnose a file of JSON-line requests
    Batch {
        /// Input file, one JSON request per line
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List the active fault categories and their estimates
    Categories,

    /// Validate the active catalog
    Check,

    /// Display current configuration
    Config,
}

impl Args {
    /// Vehicle descriptor assembled from the flags, if any were given
    pub fn vehicle(&self) -> Option<crate::diagnosis::VehicleInfo> {
        if self.make.is_none() && self.model.is_none() && self.year.is_none() {
            return None;
        }
        Some(crate::diagnosis::VehicleInfo {
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year,
        })
    }
}
