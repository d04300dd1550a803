
use clap::Args;
use log::info;
use std::path::PathBuf;

use crate::cli::core::{AFTER_HELP, check_optional_filename};

#[derive(Args, Clone, Default)]
#[clap(author, about,
    after_help = &**AFTER_HELP)]
pub struct CatalogStatSettings {
    /// Input catalog file (JSON); the built-in reference catalog is used when omitted
    #[clap(short = 'c')]
    #[clap(long = "catalog")]
    #[clap(value_name = "JSON")]
    #[clap(help_heading = Some("Input/Output"))]
    pub catalog_filename: Option<PathBuf>,

    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

pub fn check_catalog_stat_settings(settings: CatalogStatSettings) -> CatalogStatSettings {
    info!("Inputs:");
    check_optional_filename(settings.catalog_filename.as_deref(), "Catalog JSON");
    match settings.catalog_filename.as_ref() {
        Some(catalog_fn) => info!("\tCatalog: {:?}", catalog_fn),
        None => info!("\tCatalog: <built-in reference catalog>")
    };
    settings
}
