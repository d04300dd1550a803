
use clap::{Parser, Subcommand};
use lazy_static::lazy_static;
use log::error;
use std::path::Path;

use crate::cli::analyze::AnalyzeSettings;
use crate::cli::catalog_export::CatalogExportSettings;
use crate::cli::catalog_stat::CatalogStatSettings;

lazy_static! {
    /// Stores the full version string we plan to use
    pub static ref FULL_VERSION: String = env!("CARGO_PKG_VERSION").to_string();

    /// Shared after help string containing the usage disclaimer.
    pub static ref AFTER_HELP: String = "This program is intended for Research Use Only and not for use in \
diagnostic procedures.".to_string();
}

#[derive(Parser)]
#[clap(author,
    version = &**FULL_VERSION,
    about,
    after_help = &**AFTER_HELP)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

/// pgxscreen, a tool for screening drug risk from single-sample variant calls.
/// Select a subcommand to see more usage information:
#[derive(Subcommand)]
pub enum Commands {
    /// Run the drug risk analysis on a variant file
    Analyze(Box<AnalyzeSettings>),
    /// Write the built-in reference catalog to a JSON file for customization
    CatalogExport(Box<CatalogExportSettings>),
    /// Generate statistics about a catalog file
    CatalogStat(Box<CatalogStatSettings>),
}

pub fn get_cli() -> Cli {
    Cli::parse()
}

/// Checks if a file exists and will otherwise exit
/// # Arguments
/// * `filename` - the file path to check for
/// * `label` - the label to use for error messages
pub fn check_required_filename(filename: &Path, label: &str) {
    if !filename.exists() {
        error!("{} does not exist: \"{}\"", label, filename.display());
        std::process::exit(exitcode::NOINPUT);
    } else {
        // file exists, we're good
    }
}

/// Checks if a file exists and will otherwise exit
/// # Arguments
/// * `opt_filename` - the file path to check for
/// * `label` - the label to use for error messages
pub fn check_optional_filename(opt_filename: Option<&Path>, label: &str) {
    if let Some(filename) = opt_filename {
        if !filename.exists() {
            error!("{} does not exist: \"{}\"", label, filename.display());
            std::process::exit(exitcode::NOINPUT);
        } else {
            // file exists, we're good
        }
    }
}
