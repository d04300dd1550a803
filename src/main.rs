
use log::{LevelFilter, error, info};
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use pgxscreen::catalog::pgx_catalog::PgxCatalog;
use pgxscreen::cli::analyze::{AnalyzeSettings, check_analyze_settings};
use pgxscreen::cli::catalog_export::{CatalogExportSettings, check_catalog_export_settings};
use pgxscreen::cli::catalog_stat::{CatalogStatSettings, check_catalog_stat_settings};
use pgxscreen::cli::core::{Commands, get_cli};
use pgxscreen::data_types::analysis::PgxAnalysis;
use pgxscreen::util::file_io::{load_json, load_text_file, save_json};

/// Shared helper for loading either a user catalog or the built-in reference catalog
/// # Arguments
/// * `opt_catalog_fn` - the user-provided catalog path, if any
fn load_catalog(opt_catalog_fn: Option<&Path>) -> PgxCatalog {
    let catalog: PgxCatalog = match opt_catalog_fn {
        Some(catalog_fn) => {
            info!("Loading catalog from {:?}...", catalog_fn);
            match load_json(catalog_fn) {
                Ok(c) => c,
                Err(e) => {
                    error!("Error while loading catalog file: {e}");
                    std::process::exit(exitcode::IOERR);
                }
            }
        },
        None => {
            info!("Using built-in reference catalog.");
            PgxCatalog::default()
        }
    };

    // we also need to validate that the catalog is complete enough to run
    if let Err(e) = catalog.validate() {
        error!("Error while validating catalog: {e}");
        std::process::exit(exitcode::DATAERR);
    }

    catalog
}

/// This will run the "analyze" mode of the tool
/// # Arguments
/// * `settings` - the AnalyzeSettings object
fn run_analyze(settings: AnalyzeSettings) {
    // get the settings
    let filter_level: LevelFilter = match settings.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };

    // immediately setup logging first
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();

    // okay, now we can check all the other settings
    let cli_settings: AnalyzeSettings = check_analyze_settings(settings);

    // load the catalog, then the variant text
    let catalog: PgxCatalog = load_catalog(cli_settings.catalog_filename.as_deref());

    info!("Loading variant file from {:?}...", cli_settings.vcf_filename);
    let vcf_text: String = match load_text_file(&cli_settings.vcf_filename) {
        Ok(t) => t,
        Err(e) => {
            error!("Error while loading variant file: {e}");
            std::process::exit(exitcode::IOERR);
        }
    };

    // all the work
    let report: PgxAnalysis = match pgxscreen::risk_engine::analyze_to_report(
        &catalog,
        &vcf_text,
        &cli_settings.patient_id
    ) {
        Ok(r) => r,
        Err(e) => {
            error!("Error while analyzing variant file: {e}");
            std::process::exit(exitcode::DATAERR);
        }
    };

    // save the report to the defined file
    info!("Saving analysis report to {:?}", cli_settings.report_filename);
    match save_json(&report, &cli_settings.report_filename) {
        Ok(()) => {},
        Err(e) => {
            error!("Error while writing analysis report to file: {e}");
            std::process::exit(exitcode::IOERR);
        }
    };

    if let Some(filename) = cli_settings.summary_tsv.as_ref() {
        info!("Saving drug summary to {:?}", filename);
        match save_summary_tsv(&report, filename) {
            Ok(()) => {},
            Err(e) => {
                error!("Error while writing drug summary to file: {e}");
                std::process::exit(exitcode::IOERR);
            }
        };
    }

    info!("Process finished successfully.");
}

/// Wrapper for one row of the drug summary output
#[derive(Serialize)]
struct SummaryRow {
    #[serde(rename = "#drug")]
    drug: String,
    gene: String,
    diplotype: String,
    phenotype: String,
    risk_label: String,
    severity: String,
    confidence: f64,
    gene_covered: bool
}

/// Helper function to save the per-drug TSV summary for spreadsheet review
/// # Arguments
/// * `report` - our analysis report
/// * `filename` - the output filename, TSV
/// # Errors
/// * if we have any errors opening or writing to the file
fn save_summary_tsv(report: &PgxAnalysis, filename: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let delimiter: u8 = b'\t';
    let mut csv_writer: csv::Writer<File> = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(filename)?;

    // the report is already in catalog order, just flatten each result
    for result in report.results().iter() {
        let profile = result.pharmacogenomic_profile();
        let assessment = result.risk_assessment();
        let summary_row = SummaryRow {
            drug: result.drug().to_string(),
            gene: profile.primary_gene().to_string(),
            diplotype: profile.diplotype().diplotype().diplotype().to_string(),
            phenotype: profile.phenotype().to_string(),
            risk_label: assessment.risk_label().to_string(),
            severity: assessment.severity().to_string(),
            confidence: assessment.confidence_score(),
            gene_covered: result.quality_metrics().gene_covered()
        };
        csv_writer.serialize(&summary_row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// This will run the "catalog-export" mode of the tool
/// # Arguments
/// * `settings` - the CatalogExportSettings object
fn run_catalog_export(settings: CatalogExportSettings) {
    // get the settings
    let filter_level: LevelFilter = match settings.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };

    // immediately setup logging first
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();

    // okay, now we can check all the other settings
    let cli_settings: CatalogExportSettings = check_catalog_export_settings(settings);

    // the built-in catalog is the thing being exported
    let catalog = PgxCatalog::default();

    info!("Saving catalog to {:?}", cli_settings.output_catalog);
    match save_json(&catalog, &cli_settings.output_catalog) {
        Ok(()) => {},
        Err(e) => {
            error!("Error while writing catalog to file: {e}");
            std::process::exit(exitcode::IOERR);
        }
    };

    info!("Process finished successfully.");
}

/// This will run the "catalog-stat" mode of the tool
/// # Arguments
/// * `settings` - the CatalogStatSettings object
fn run_catalog_stat(settings: CatalogStatSettings) {
    // get the settings
    let filter_level: LevelFilter = match settings.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };

    // immediately setup logging first
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();

    // okay, now we can check all the other settings
    let cli_settings: CatalogStatSettings = check_catalog_stat_settings(settings);

    // first load the catalog
    let catalog: PgxCatalog = load_catalog(cli_settings.catalog_filename.as_deref());
    info!("Catalog loaded successfully.");

    // display the catalog statistics
    pgxscreen::catalog_stat::print_stats(&catalog);
}

fn main() {
    let cli = get_cli();
    match cli.command {
        Commands::Analyze(settings) => {
            run_analyze(*settings);
        },
        Commands::CatalogExport(settings) => {
            run_catalog_export(*settings);
        },
        Commands::CatalogStat(settings) => {
            run_catalog_stat(*settings);
        }
    }
}
