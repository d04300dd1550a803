
use itertools::Itertools;
use log::debug;
use std::collections::BTreeMap;

use crate::catalog::pgx_catalog::PgxCatalog;
use crate::data_types::diplotype::{Diplotype, DiplotypeCall};
use crate::data_types::genotype::Zygosity;
use crate::data_types::phenotype::Phenotype;
use crate::data_types::variant_match::VariantMatch;

/// Resolves one diplotype call per catalog gene from the detected variants.
/// Genes with no detected variant get the both-reference diplotype, never an
/// absent entry, so downstream drug lookups are total.
/// # Arguments
/// * `catalog` - the pre-loaded reference catalog
/// * `detected_variants` - all variant matches from one parsed document
pub fn resolve_diplotypes(catalog: &PgxCatalog, detected_variants: &[VariantMatch]) -> BTreeMap<String, DiplotypeCall> {
    let mut diplotypes: BTreeMap<String, DiplotypeCall> = Default::default();

    for (gene, table) in catalog.phenotype_tables().iter() {
        // process this gene's matches in catalog locus order so slot assignment
        // is deterministic regardless of input line order
        let ordered: Vec<&VariantMatch> = detected_variants.iter()
            .filter(|v| v.gene() == gene)
            .sorted_by_key(|v| {
                catalog.variant_by_rsid(v.rsid())
                    .map(|e| e.position())
                    .unwrap_or(u64::MAX)
            })
            .collect();

        let reference = table.reference_allele();
        let mut slots: [String; 2] = [reference.to_string(), reference.to_string()];
        let mut imprecise: bool = false;

        for variant in ordered.iter() {
            let allele = variant.star_allele();
            match variant.zygosity() {
                Zygosity::HomozygousAlternate => {
                    // both chromosomes carry the variant allele
                    slots = [allele.to_string(), allele.to_string()];
                },
                Zygosity::Heterozygous => {
                    // one copy: fill a reference slot if one remains, otherwise
                    // more variant alleles compete than the diplotype can hold
                    // and the catalog's priority policy decides which two stay
                    if slots[0] == reference {
                        slots[0] = allele.to_string();
                    } else if slots[1] == reference {
                        slots[1] = allele.to_string();
                    } else {
                        let winners: Vec<String> = [slots[0].as_str(), slots[1].as_str(), allele].iter()
                            .map(|a| a.to_string())
                            .sorted_by_key(|a| table.priority_rank(a))
                            .take(2)
                            .collect();
                        debug!("{gene}: alleles competing for two slots, keeping {winners:?}");
                        slots = [winners[0].clone(), winners[1].clone()];
                    }
                },
                Zygosity::HomozygousReference => {
                    // a confirmed reference call changes nothing
                },
                Zygosity::Unknown => {
                    // no zygosity to act on; flag the call instead
                    imprecise = true;
                }
            }
        }

        // present reference-first, then in catalog priority order
        slots.sort_by_key(|a| (a.as_str() != reference, table.priority_rank(a)));
        let diplotype = Diplotype::new(&slots[0], &slots[1]);
        debug!("{gene} => {} (imprecise: {imprecise})", diplotype.diplotype());
        diplotypes.insert(gene.clone(), DiplotypeCall::new(diplotype, imprecise));
    }

    diplotypes
}

/// Maps each gene's diplotype call to a metabolizer phenotype.
/// Resolved once per gene; every drug sharing the gene reads the same entry,
/// which is what keeps same-gene drugs consistent within one analysis.
/// # Arguments
/// * `catalog` - the pre-loaded reference catalog
/// * `diplotypes` - the per-gene diplotype calls
pub fn resolve_phenotypes(catalog: &PgxCatalog, diplotypes: &BTreeMap<String, DiplotypeCall>) -> BTreeMap<String, Phenotype> {
    diplotypes.iter()
        .map(|(gene, call)| {
            let phenotype = catalog.phenotype_for(gene, call.diplotype());
            debug!("{gene} {} => {phenotype}", call.diplotype().diplotype());
            (gene.clone(), phenotype)
        })
        .collect()
}
