
use clap::Args;
use log::info;
use std::path::PathBuf;

use crate::cli::core::{AFTER_HELP, check_optional_filename, check_required_filename};

#[derive(Args, Clone, Default)]
#[clap(author, about,
    after_help = &**AFTER_HELP)]
pub struct AnalyzeSettings {
    /// Input variant file in VCF format, optionally gzipped
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "vcf")]
    #[clap(value_name = "VCF")]
    #[clap(help_heading = Some("Input/Output"))]
    pub vcf_filename: PathBuf,

    /// Input catalog file (JSON); the built-in reference catalog is used when omitted
    #[clap(short = 'c')]
    #[clap(long = "catalog")]
    #[clap(value_name = "JSON")]
    #[clap(help_heading = Some("Input/Output"))]
    pub catalog_filename: Option<PathBuf>,

    /// Output analysis report file (JSON)
    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-report")]
    #[clap(value_name = "JSON")]
    #[clap(help_heading = Some("Input/Output"))]
    pub report_filename: PathBuf,

    /// Optional output summary with one row per drug (TSV)
    #[clap(long = "summary-tsv")]
    #[clap(value_name = "TSV")]
    #[clap(help_heading = Some("Input/Output"))]
    pub summary_tsv: Option<PathBuf>,

    /// Opaque patient identifier carried into the report for correlation
    #[clap(long = "patient-id")]
    #[clap(value_name = "ID")]
    #[clap(default_value = "UNKNOWN")]
    pub patient_id: String,

    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

pub fn check_analyze_settings(settings: AnalyzeSettings) -> AnalyzeSettings {
    info!("Inputs:");

    // check for all the required input files
    check_required_filename(&settings.vcf_filename, "Variant file");
    check_optional_filename(settings.catalog_filename.as_deref(), "Catalog JSON");

    // dump stuff to the logger
    info!("\tVCF: {:?}", settings.vcf_filename);
    match settings.catalog_filename.as_ref() {
        Some(catalog_fn) => info!("\tCatalog: {:?}", catalog_fn),
        None => info!("\tCatalog: <built-in reference catalog>")
    };
    info!("\tPatient ID: {:?}", settings.patient_id);

    // outputs
    info!("Outputs:");
    info!("\tAnalysis report: {:?}", settings.report_filename);
    if let Some(filename) = settings.summary_tsv.as_ref() {
        info!("\tSummary TSV: {:?}", filename);
    }

    settings
}
