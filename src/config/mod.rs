pub mod file;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments. `-h` is reclaimed for height; help lives on
/// `--help` only.
#[derive(Debug, Clone, Parser)]
#[command(name = "shiprate")]
#[command(about = "Compare parcel shipping rates from the Canada Post API")]
#[command(disable_help_flag = true)]
pub struct CliArgs {
    /// Package width in centimetres
    #[arg(short = 'w', long)]
    pub width: f64,

    /// Package length in centimetres
    #[arg(short = 'l', long)]
    pub length: f64,

    /// Package height in centimetres
    #[arg(short = 'h', long)]
    pub height: f64,

    /// Package mass in grams
    #[arg(short = 'm', long)]
    pub mass: f64,

    /// Destination address: "Street, City, Province/State, PostalCode"
    #[arg(short = 't', long)]
    pub to: String,

    /// Origin address; defaults to the configured origin
    #[arg(short = 'f', long)]
    pub from: Option<String>,

    /// Path to the config file (default: ~/.shiprate/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    #[arg(long, action = clap::ArgAction::HelpLong, help = "Print help")]
    help: Option<bool>,
}

impl Validate for CliArgs {
    fn validate(&self) -> Result<()> {
        validation::validate_positive("width", self.width)?;
        validation::validate_positive("length", self.length)?;
        validation::validate_positive("height", self.height)?;
        validation::validate_positive("mass", self.mass)?;
        validation::validate_non_empty_string("to", &self.to)?;
        Ok(())
    }
}
