
use std::collections::BTreeMap;

use crate::catalog::pgx_catalog::PgxCatalog;

/// Prints the statistics for a given catalog
/// # Arguments
/// * `catalog` - the catalog to print the statistics for
pub fn print_stats(catalog: &PgxCatalog) {
    // display the catalog metadata
    let metadata = catalog.catalog_metadata();
    println!("Catalog metadata:");
    println!("\tVersion: {}", metadata.catalog_version);
    println!("\tSource: {}", metadata.source);
    println!("\tBuild time: {}", metadata.build_time);

    // display the aggregate statistics
    println!("Catalog statistics:");
    println!("\tTotal loci: {}", catalog.variant_entries().len());
    println!("\tTotal genes: {}", catalog.phenotype_tables().len());
    println!("\tTotal drugs: {}", catalog.drug_entries().len());
    let total_assignments: usize = catalog.phenotype_tables().values()
        .map(|t| t.assignments().len())
        .sum();
    println!("\tTotal diplotype assignments: {}", total_assignments);
    let total_rules: usize = catalog.drug_entries().values()
        .map(|d| d.rules().len())
        .sum();
    println!("\tTotal risk rules: {}", total_rules);
    println!("Confidence policy:");
    println!("\tMissing coverage penalty: {}", catalog.confidence_policy().missing_coverage_penalty());
    println!("\tUnknown zygosity penalty: {}", catalog.confidence_policy().unknown_zygosity_penalty());

    // now do per-gene statistics, but these are just if we have elevated verbosity
    if log::log_enabled!(log::Level::Debug) {
        let mut loci_per_gene: BTreeMap<&str, usize> = BTreeMap::new();
        for entry in catalog.variant_entries().values() {
            *loci_per_gene.entry(entry.gene()).or_insert(0) += 1;
        }

        println!();
        println!("Gene statistics:");
        println!("gene\tloci\tassignments\treference_allele\tfallback");
        for (gene, table) in catalog.phenotype_tables().iter() {
            let loci = loci_per_gene.get(gene.as_str()).unwrap_or(&0);
            println!("{gene}\t{loci}\t{}\t{}\t{}", table.assignments().len(), table.reference_allele(), table.fallback());
        }

        println!();
        println!("Drug statistics:");
        println!("drug\tprimary_gene\trules\tfallback_label");
        for (drug, entry) in catalog.drug_entries().iter() {
            println!("{drug}\t{}\t{}\t{}", entry.primary_gene(), entry.rules().len(), entry.fallback_rule().risk_label());
        }
        println!();
    }
}
