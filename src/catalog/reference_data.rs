
use std::collections::BTreeMap;

use crate::catalog::pgx_catalog::{
    CatalogMetadata, ConfidencePolicy, DrugEntry, PgxCatalog, PhenotypeTable, RiskRule, VariantEntry
};
use crate::data_types::phenotype::Phenotype;
use crate::data_types::risk::Severity;

// gene names to prevent dev typos
pub const CYP2C9: &str = "CYP2C9";
pub const CYP2C19: &str = "CYP2C19";
pub const CYP2D6: &str = "CYP2D6";
pub const DPYD: &str = "DPYD";
pub const SLCO1B1: &str = "SLCO1B1";
pub const TPMT: &str = "TPMT";

// drug names, same reasoning
pub const AZATHIOPRINE: &str = "AZATHIOPRINE";
pub const CLOPIDOGREL: &str = "CLOPIDOGREL";
pub const CODEINE: &str = "CODEINE";
pub const FLUOROURACIL: &str = "FLUOROURACIL";
pub const SIMVASTATIN: &str = "SIMVASTATIN";
pub const VORICONAZOLE: &str = "VORICONAZOLE";
pub const WARFARIN: &str = "WARFARIN";

/// Builds the built-in reference catalog.
/// The values here are swappable reference data (GRCh38 coordinates, CPIC-style
/// assignments); the shape is the contract the rest of the pipeline relies on.
pub fn reference_catalog() -> PgxCatalog {
    let catalog_metadata = CatalogMetadata {
        catalog_version: "builtin-2024.1".to_string(),
        source: "CPIC guideline reference subset".to_string(),
        build_time: chrono::Utc::now()
    };

    // (rsid, gene, star allele, chromosome, 1-based position, ref, alt)
    let variant_table = [
        ("rs3918290", DPYD, "*2A", "1", 97915614, "C", "T"),
        ("rs1142345", TPMT, "*3C", "6", 18139051, "A", "G"),
        ("rs12248560", CYP2C19, "*17", "10", 94761900, "C", "T"),
        ("rs4244285", CYP2C19, "*2", "10", 94781859, "G", "A"),
        ("rs1799853", CYP2C9, "*2", "10", 94942290, "C", "T"),
        ("rs1057910", CYP2C9, "*3", "10", 94981296, "A", "C"),
        ("rs4149056", SLCO1B1, "*5", "12", 21178615, "T", "C"),
        ("rs1065852", CYP2D6, "*10", "22", 42126611, "C", "T"),
        ("rs3892097", CYP2D6, "*4", "22", 42128945, "C", "T")
    ];
    let variant_entries: BTreeMap<String, VariantEntry> = variant_table.into_iter()
        .map(|(rsid, gene, star, chrom, pos, reference, alternate)| {
            (rsid.to_string(), VariantEntry::new(rsid, gene, star, chrom, pos, reference, alternate))
        })
        .collect();

    let phenotype_tables: BTreeMap<String, PhenotypeTable> = BTreeMap::from_iter([
        (CYP2D6.to_string(), build_table(
            "*1",
            &["*4", "*10"],
            &[
                ("*1/*1", Phenotype::NormalMetabolizer),
                ("*1/*4", Phenotype::IntermediateMetabolizer),
                ("*1/*10", Phenotype::IntermediateMetabolizer),
                ("*4/*10", Phenotype::PoorMetabolizer),
                ("*4/*4", Phenotype::PoorMetabolizer),
                ("*10/*10", Phenotype::IntermediateMetabolizer)
            ]
        )),
        (CYP2C19.to_string(), build_table(
            "*1",
            &["*2", "*17"],
            &[
                ("*1/*1", Phenotype::NormalMetabolizer),
                ("*1/*2", Phenotype::IntermediateMetabolizer),
                ("*2/*2", Phenotype::PoorMetabolizer),
                ("*1/*17", Phenotype::RapidMetabolizer),
                ("*17/*17", Phenotype::UltrarapidMetabolizer),
                ("*2/*17", Phenotype::IntermediateMetabolizer)
            ]
        )),
        (CYP2C9.to_string(), build_table(
            "*1",
            &["*3", "*2"],
            &[
                ("*1/*1", Phenotype::NormalMetabolizer),
                ("*1/*2", Phenotype::IntermediateMetabolizer),
                ("*1/*3", Phenotype::IntermediateMetabolizer),
                ("*2/*2", Phenotype::PoorMetabolizer),
                ("*2/*3", Phenotype::PoorMetabolizer),
                ("*3/*3", Phenotype::PoorMetabolizer)
            ]
        )),
        (SLCO1B1.to_string(), build_table(
            "*1",
            &[],
            &[
                ("*1/*1", Phenotype::NormalMetabolizer),
                ("*1/*5", Phenotype::IntermediateMetabolizer),
                ("*5/*5", Phenotype::PoorMetabolizer)
            ]
        )),
        (TPMT.to_string(), build_table(
            "*1",
            &[],
            &[
                ("*1/*1", Phenotype::NormalMetabolizer),
                ("*1/*3C", Phenotype::IntermediateMetabolizer),
                ("*3C/*3C", Phenotype::PoorMetabolizer)
            ]
        )),
        (DPYD.to_string(), build_table(
            "*1",
            &[],
            &[
                ("*1/*1", Phenotype::NormalMetabolizer),
                ("*1/*2A", Phenotype::IntermediateMetabolizer),
                ("*2A/*2A", Phenotype::PoorMetabolizer)
            ]
        ))
    ]);

    let consult_fallback = RiskRule::new("Consult pharmacogenomics specialist", Severity::Moderate, 0.50);

    let drug_entries: BTreeMap<String, DrugEntry> = BTreeMap::from_iter([
        (CODEINE.to_string(), DrugEntry::new(
            CYP2D6,
            BTreeMap::from_iter([
                (Phenotype::UltrarapidMetabolizer, RiskRule::new("Avoid - risk of severe toxicity", Severity::Critical, 0.92)),
                (Phenotype::RapidMetabolizer, RiskRule::new("Monitor for adverse effects", Severity::Moderate, 0.85)),
                (Phenotype::NormalMetabolizer, RiskRule::new("Standard dosing", Severity::Low, 0.95)),
                (Phenotype::IntermediateMetabolizer, RiskRule::new("Monitor for reduced efficacy", Severity::Moderate, 0.85)),
                (Phenotype::PoorMetabolizer, RiskRule::new("Avoid - ineffective analgesia", Severity::High, 0.90))
            ]),
            consult_fallback.clone()
        )),
        (CLOPIDOGREL.to_string(), DrugEntry::new(
            CYP2C19,
            BTreeMap::from_iter([
                (Phenotype::UltrarapidMetabolizer, RiskRule::new("Standard dosing - monitor bleeding risk", Severity::Low, 0.88)),
                (Phenotype::RapidMetabolizer, RiskRule::new("Standard dosing", Severity::Low, 0.90)),
                (Phenotype::NormalMetabolizer, RiskRule::new("Standard dosing", Severity::Low, 0.95)),
                (Phenotype::IntermediateMetabolizer, RiskRule::new("Consider alternative antiplatelet", Severity::Moderate, 0.87)),
                (Phenotype::PoorMetabolizer, RiskRule::new("Avoid - impaired activation, use alternative", Severity::Critical, 0.92))
            ]),
            consult_fallback.clone()
        )),
        (VORICONAZOLE.to_string(), DrugEntry::new(
            CYP2C19,
            BTreeMap::from_iter([
                (Phenotype::UltrarapidMetabolizer, RiskRule::new("Choose alternative - subtherapeutic risk", Severity::High, 0.89)),
                (Phenotype::RapidMetabolizer, RiskRule::new("Choose alternative - subtherapeutic risk", Severity::High, 0.87)),
                (Phenotype::NormalMetabolizer, RiskRule::new("Standard dosing", Severity::Low, 0.95)),
                (Phenotype::IntermediateMetabolizer, RiskRule::new("Standard dosing - monitor levels", Severity::Moderate, 0.86)),
                (Phenotype::PoorMetabolizer, RiskRule::new("Reduce dose - monitor for toxicity", Severity::High, 0.90))
            ]),
            consult_fallback.clone()
        )),
        (WARFARIN.to_string(), DrugEntry::new(
            CYP2C9,
            BTreeMap::from_iter([
                (Phenotype::NormalMetabolizer, RiskRule::new("Standard dosing", Severity::Low, 0.95)),
                (Phenotype::IntermediateMetabolizer, RiskRule::new("Reduce starting dose", Severity::Moderate, 0.86)),
                (Phenotype::PoorMetabolizer, RiskRule::new("Major dose reduction - high bleeding risk", Severity::High, 0.91))
            ]),
            consult_fallback.clone()
        )),
        (SIMVASTATIN.to_string(), DrugEntry::new(
            SLCO1B1,
            BTreeMap::from_iter([
                (Phenotype::NormalMetabolizer, RiskRule::new("Standard dosing", Severity::Low, 0.95)),
                (Phenotype::IntermediateMetabolizer, RiskRule::new("Limit dose to 20mg daily", Severity::Moderate, 0.88)),
                (Phenotype::PoorMetabolizer, RiskRule::new("Avoid high dose - myopathy risk", Severity::High, 0.90))
            ]),
            consult_fallback.clone()
        )),
        (AZATHIOPRINE.to_string(), DrugEntry::new(
            TPMT,
            BTreeMap::from_iter([
                (Phenotype::NormalMetabolizer, RiskRule::new("Standard dosing", Severity::Low, 0.95)),
                (Phenotype::IntermediateMetabolizer, RiskRule::new("Reduce dose 30-70%", Severity::Moderate, 0.89)),
                (Phenotype::PoorMetabolizer, RiskRule::new("Drastically reduce dose or avoid", Severity::Critical, 0.93))
            ]),
            consult_fallback.clone()
        )),
        (FLUOROURACIL.to_string(), DrugEntry::new(
            DPYD,
            BTreeMap::from_iter([
                (Phenotype::NormalMetabolizer, RiskRule::new("Standard dosing", Severity::Low, 0.95)),
                (Phenotype::IntermediateMetabolizer, RiskRule::new("Reduce starting dose 50%", Severity::Moderate, 0.88)),
                (Phenotype::PoorMetabolizer, RiskRule::new("Avoid - risk of severe toxicity", Severity::Critical, 0.94))
            ]),
            consult_fallback
        ))
    ]);

    PgxCatalog::new(
        catalog_metadata,
        variant_entries,
        phenotype_tables,
        drug_entries,
        ConfidencePolicy::default()
    )
}

/// Small helper to keep the table literals above readable
fn build_table(reference_allele: &str, allele_priority: &[&str], assignments: &[(&str, Phenotype)]) -> PhenotypeTable {
    PhenotypeTable::new(
        reference_allele,
        allele_priority.iter().map(|a| a.to_string()).collect(),
        assignments.iter().map(|(d, p)| (d.to_string(), *p)).collect(),
        Phenotype::NormalMetabolizer
    )
}
