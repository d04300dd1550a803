
use clap::Args;
use log::info;
use std::path::PathBuf;

use crate::cli::core::AFTER_HELP;

#[derive(Args, Clone, Default)]
#[clap(author, about,
    after_help = &**AFTER_HELP)]
pub struct CatalogExportSettings {
    /// Output catalog file (JSON)
    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-catalog")]
    #[clap(value_name = "JSON")]
    #[clap(help_heading = Some("Input/Output"))]
    pub output_catalog: PathBuf,

    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

pub fn check_catalog_export_settings(settings: CatalogExportSettings) -> CatalogExportSettings {
    info!("Outputs:");
    info!("\tCatalog: {:?}", settings.output_catalog);
    settings
}
