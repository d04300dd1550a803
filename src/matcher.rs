
use log::debug;
use rustc_hash::FxHashSet as HashSet;
use serde::Serialize;

use crate::catalog::pgx_catalog::PgxCatalog;
use crate::data_types::variant_match::{GeneCoverage, VariantMatch};
use crate::data_types::vcf_record::normalize_chromosome;
use crate::vcf::errors::VcfFormatError;
use crate::vcf::reader::parse_vcf_text;

/// The outcome of intersecting one parsed document against the catalog
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParseSummary {
    /// Count of non-header lines seen, including malformed skipped lines
    total_data_lines: usize,
    /// Count of lines that parsed into records
    parsed_records: usize,
    /// The records that matched a catalog locus
    detected_variants: Vec<VariantMatch>,
    /// Per-gene flag: did the input touch any of the gene's catalog loci at all
    gene_coverage: GeneCoverage
}

impl ParseSummary {
    pub fn total_data_lines(&self) -> usize {
        self.total_data_lines
    }

    pub fn parsed_records(&self) -> usize {
        self.parsed_records
    }

    pub fn detected_variants(&self) -> &[VariantMatch] {
        &self.detected_variants
    }

    pub fn gene_coverage(&self) -> &GeneCoverage {
        &self.gene_coverage
    }

    /// The detected variants belonging to one gene, in input order
    pub fn variants_for_gene(&self, gene: &str) -> Vec<&VariantMatch> {
        self.detected_variants.iter()
            .filter(|v| v.gene() == gene)
            .collect()
    }
}

/// Parses document text and intersects it against the catalog.
/// Detection and coverage are computed independently: a locus can be covered
/// (present in the input) while contributing no variant because the call there
/// was reference. Downstream confidence scoring relies on that distinction to
/// separate "confirmed reference" from "not tested at all".
/// # Arguments
/// * `catalog` - the pre-loaded reference catalog
/// * `text` - the full document text
/// # Errors
/// * if the input is not recognizable as this tabular format
pub fn parse_variants(catalog: &PgxCatalog, text: &str) -> Result<ParseSummary, VcfFormatError> {
    let document = parse_vcf_text(text)?;

    // identifier lookup first, coordinates as the fallback track
    let mut detected_variants: Vec<VariantMatch> = vec![];
    for record in document.records() {
        let rsid_hit = record.identifier()
            .and_then(|id| catalog.variant_by_rsid(id));
        let entry = match rsid_hit {
            Some(e) => Some(e),
            None => catalog.variant_by_coordinates(record.chromosome(), record.position())
        };

        if let Some(entry) = entry {
            debug!("Record at {}:{} matched {} ({} {})", record.chromosome(), record.position(), entry.rsid(), entry.gene(), entry.star_allele());
            detected_variants.push(VariantMatch::new(
                entry.rsid().to_string(),
                entry.gene().to_string(),
                entry.star_allele().to_string(),
                record.genotype_call()
            ));
        }
    }

    // coverage is a separate pass over observed loci, ignoring genotype outcomes
    let observed_loci: HashSet<(String, u64)> = document.records().iter()
        .map(|r| (r.normalized_chromosome(), r.position()))
        .collect();
    let mut gene_coverage: GeneCoverage = Default::default();
    for entry in catalog.variant_entries().values() {
        let locus = (normalize_chromosome(entry.chromosome()), entry.position());
        let covered = observed_loci.contains(&locus);
        let flag = gene_coverage.entry(entry.gene().to_string()).or_insert(false);
        *flag = *flag || covered;
    }

    Ok(ParseSummary {
        total_data_lines: document.data_lines(),
        parsed_records: document.parsed_records(),
        detected_variants,
        gene_coverage
    })
}
