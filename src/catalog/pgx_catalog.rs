
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use simple_error::{SimpleError, bail};
use std::collections::BTreeMap;

use crate::data_types::diplotype::Diplotype;
use crate::data_types::phenotype::Phenotype;
use crate::data_types::risk::Severity;
use crate::data_types::vcf_record::normalize_chromosome;

lazy_static! {
    /// Matches reference-SNP identifiers such as "rs4244285"
    pub static ref RSID_REGEX: Regex = Regex::new(r"^rs[0-9]+$").unwrap();
}

/// Phenotype assigned when a gene has no table at all; tables carry their own fallback
fn default_fallback_phenotype() -> Phenotype {
    Phenotype::NormalMetabolizer
}

/// Contains metadata about the construction of the catalog
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CatalogMetadata {
    /// The version label of the catalog content
    pub catalog_version: String,
    /// Human-readable origin of the content, e.g. a guideline source
    pub source: String,
    /// The time the catalog was constructed
    pub build_time: chrono::DateTime<chrono::Utc>
}

/// One catalog-defined pharmacogenomic locus
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VariantEntry {
    /// Reference-SNP identifier for the locus
    rsid: String,
    /// The gene the locus belongs to
    gene: String,
    /// The star allele the alternate allele defines
    star_allele: String,
    /// Chromosome label, stored without a "chr" prefix requirement
    chromosome: String,
    /// 1-based position of the locus
    position: u64,
    /// Reference base(s) at the locus
    reference_allele: String,
    /// Alternate base(s) defining the star allele
    variant_allele: String
}

impl VariantEntry {
    pub fn new(rsid: &str, gene: &str, star_allele: &str, chromosome: &str, position: u64, reference_allele: &str, variant_allele: &str) -> VariantEntry {
        VariantEntry {
            rsid: rsid.to_string(),
            gene: gene.to_string(),
            star_allele: star_allele.to_string(),
            chromosome: chromosome.to_string(),
            position,
            reference_allele: reference_allele.to_string(),
            variant_allele: variant_allele.to_string()
        }
    }

    pub fn rsid(&self) -> &str {
        &self.rsid
    }

    pub fn gene(&self) -> &str {
        &self.gene
    }

    pub fn star_allele(&self) -> &str {
        &self.star_allele
    }

    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn reference_allele(&self) -> &str {
        &self.reference_allele
    }

    pub fn variant_allele(&self) -> &str {
        &self.variant_allele
    }
}

/// Diplotype-to-phenotype assignments for one gene.
/// The lookup is total: anything not listed resolves to the fallback phenotype.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PhenotypeTable {
    /// The star allele label representing the reference haplotype
    reference_allele: String,
    /// Tie-break order when more variant alleles compete than a diplotype can hold;
    /// alleles not listed rank after listed ones, lexicographically
    #[serde(default)]
    allele_priority: Vec<String>,
    /// Diplotype string (e.g. "*1/*4") to phenotype
    assignments: BTreeMap<String, Phenotype>,
    /// Phenotype for any diplotype not explicitly listed
    #[serde(default = "default_fallback_phenotype")]
    fallback: Phenotype
}

impl PhenotypeTable {
    pub fn new(reference_allele: &str, allele_priority: Vec<String>, assignments: BTreeMap<String, Phenotype>, fallback: Phenotype) -> PhenotypeTable {
        PhenotypeTable {
            reference_allele: reference_allele.to_string(),
            allele_priority,
            assignments,
            fallback
        }
    }

    /// Total lookup: tries the diplotype as written, then with the haplotypes swapped,
    /// then falls back to the table's fallback phenotype.
    /// # Arguments
    /// * `diplotype` - the resolved diplotype to map
    pub fn phenotype_for(&self, diplotype: &Diplotype) -> Phenotype {
        let forward = diplotype.diplotype();
        if let Some(&phenotype) = self.assignments.get(forward) {
            return phenotype;
        }
        let swapped = format!("{}/{}", diplotype.hap2(), diplotype.hap1());
        if let Some(&phenotype) = self.assignments.get(&swapped) {
            return phenotype;
        }
        self.fallback
    }

    /// Sort key for allele tie-breaking: listed alleles rank by list position,
    /// everything else ranks after, lexicographically.
    /// # Arguments
    /// * `allele` - the star allele label to rank
    pub fn priority_rank(&self, allele: &str) -> (usize, String) {
        let listed = self.allele_priority.iter()
            .position(|a| a == allele)
            .unwrap_or(self.allele_priority.len());
        (listed, allele.to_string())
    }

    pub fn reference_allele(&self) -> &str {
        &self.reference_allele
    }

    pub fn allele_priority(&self) -> &[String] {
        &self.allele_priority
    }

    pub fn assignments(&self) -> &BTreeMap<String, Phenotype> {
        &self.assignments
    }

    pub fn fallback(&self) -> Phenotype {
        self.fallback
    }
}

/// One phenotype's dosing guidance for a drug
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RiskRule {
    /// The dosing guidance label
    risk_label: String,
    /// Ordinal severity of the guidance
    severity: Severity,
    /// Confidence assigned before any data-quality penalties
    base_confidence: f64
}

impl RiskRule {
    pub fn new(risk_label: &str, severity: Severity, base_confidence: f64) -> RiskRule {
        RiskRule {
            risk_label: risk_label.to_string(),
            severity,
            base_confidence
        }
    }

    pub fn risk_label(&self) -> &str {
        &self.risk_label
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn base_confidence(&self) -> f64 {
        self.base_confidence
    }
}

/// Rule table for one drug.
/// The lookup is total: phenotypes not listed resolve to the fallback rule.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DrugEntry {
    /// The gene whose phenotype drives this drug's rules
    primary_gene: String,
    /// Phenotype to dosing guidance
    rules: BTreeMap<Phenotype, RiskRule>,
    /// Guidance for any phenotype not explicitly listed
    fallback_rule: RiskRule
}

impl DrugEntry {
    pub fn new(primary_gene: &str, rules: BTreeMap<Phenotype, RiskRule>, fallback_rule: RiskRule) -> DrugEntry {
        DrugEntry {
            primary_gene: primary_gene.to_string(),
            rules,
            fallback_rule
        }
    }

    /// Total lookup of the rule for a phenotype
    pub fn rule_for(&self, phenotype: Phenotype) -> &RiskRule {
        self.rules.get(&phenotype).unwrap_or(&self.fallback_rule)
    }

    pub fn primary_gene(&self) -> &str {
        &self.primary_gene
    }

    pub fn rules(&self) -> &BTreeMap<Phenotype, RiskRule> {
        &self.rules
    }

    pub fn fallback_rule(&self) -> &RiskRule {
        &self.fallback_rule
    }
}

/// Penalty magnitudes applied by the risk engine; policy values that belong
/// to the catalog content, not the algorithm
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConfidencePolicy {
    /// Subtracted when the primary gene's loci never appeared in the input
    #[serde(default = "ConfidencePolicy::default_missing_coverage_penalty")]
    missing_coverage_penalty: f64,
    /// Subtracted when the diplotype was resolved from any unknown zygosity
    #[serde(default = "ConfidencePolicy::default_unknown_zygosity_penalty")]
    unknown_zygosity_penalty: f64
}

impl ConfidencePolicy {
    fn default_missing_coverage_penalty() -> f64 {
        0.30
    }

    fn default_unknown_zygosity_penalty() -> f64 {
        0.20
    }

    pub fn new(missing_coverage_penalty: f64, unknown_zygosity_penalty: f64) -> ConfidencePolicy {
        ConfidencePolicy {
            missing_coverage_penalty,
            unknown_zygosity_penalty
        }
    }

    pub fn missing_coverage_penalty(&self) -> f64 {
        self.missing_coverage_penalty
    }

    pub fn unknown_zygosity_penalty(&self) -> f64 {
        self.unknown_zygosity_penalty
    }
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        ConfidencePolicy {
            missing_coverage_penalty: Self::default_missing_coverage_penalty(),
            unknown_zygosity_penalty: Self::default_unknown_zygosity_penalty()
        }
    }
}

/// This is the full set of pharmacogenomic reference data the pipeline runs against.
/// It is loaded once, never mutated, and safely shareable across analysis calls.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PgxCatalog {
    /// Metadata for the catalog
    catalog_metadata: CatalogMetadata,
    /// rsID to locus definition
    variant_entries: BTreeMap<String, VariantEntry>,
    /// Gene name to diplotype-phenotype table
    phenotype_tables: BTreeMap<String, PhenotypeTable>,
    /// Drug name to rule table
    drug_entries: BTreeMap<String, DrugEntry>,
    /// Penalty magnitudes for the risk engine
    #[serde(default)]
    confidence_policy: ConfidencePolicy
}

impl PgxCatalog {
    pub fn new(
        catalog_metadata: CatalogMetadata,
        variant_entries: BTreeMap<String, VariantEntry>,
        phenotype_tables: BTreeMap<String, PhenotypeTable>,
        drug_entries: BTreeMap<String, DrugEntry>,
        confidence_policy: ConfidencePolicy
    ) -> PgxCatalog {
        PgxCatalog {
            catalog_metadata,
            variant_entries,
            phenotype_tables,
            drug_entries,
            confidence_policy
        }
    }

    /// Validates the loaded catalog where possible.
    /// This does not prevent content errors, but it enforces the shape contract
    /// so no pipeline lookup can fall through unmapped.
    /// # Errors
    /// * if a variant entry is internally inconsistent or has a malformed rsID
    /// * if a gene with loci or a drug's primary gene is missing its phenotype table
    /// * if any confidence value or penalty is outside [0, 1]
    pub fn validate(&self) -> Result<(), SimpleError> {
        for (key, entry) in self.variant_entries.iter() {
            if key != entry.rsid() {
                bail!("Variant entry keyed as {} has rsid {}", key, entry.rsid());
            }
            if !RSID_REGEX.is_match(entry.rsid()) {
                bail!("Malformed rsID in catalog: {}", entry.rsid());
            }
            if entry.position() == 0 {
                bail!("Variant entry {} has no position", entry.rsid());
            }
            if !self.phenotype_tables.contains_key(entry.gene()) {
                bail!("Gene {} has loci but no phenotype table", entry.gene());
            }
        }

        for (gene, table) in self.phenotype_tables.iter() {
            if table.reference_allele().is_empty() {
                bail!("Phenotype table for {} has no reference allele label", gene);
            }
        }

        for (drug, entry) in self.drug_entries.iter() {
            if !self.phenotype_tables.contains_key(entry.primary_gene()) {
                bail!("Drug {} references gene {} which has no phenotype table", drug, entry.primary_gene());
            }
            for rule in entry.rules().values().chain(std::iter::once(entry.fallback_rule())) {
                if !(0.0..=1.0).contains(&rule.base_confidence()) {
                    bail!("Drug {} has a rule confidence outside [0, 1]: {}", drug, rule.base_confidence());
                }
            }
        }

        if !(0.0..=1.0).contains(&self.confidence_policy.missing_coverage_penalty()) {
            bail!("Missing-coverage penalty outside [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.confidence_policy.unknown_zygosity_penalty()) {
            bail!("Unknown-zygosity penalty outside [0, 1]");
        }

        Ok(())
    }

    /// Locus lookup by reference-SNP identifier
    pub fn variant_by_rsid(&self, rsid: &str) -> Option<&VariantEntry> {
        self.variant_entries.get(rsid)
    }

    /// Locus lookup by chromosome and 1-based position; "chr" prefixes are ignored
    /// on both sides of the comparison
    pub fn variant_by_coordinates(&self, chromosome: &str, position: u64) -> Option<&VariantEntry> {
        let normalized = normalize_chromosome(chromosome);
        self.variant_entries.values()
            .find(|e| e.position() == position && normalize_chromosome(e.chromosome()) == normalized)
    }

    /// Total phenotype lookup for a gene's diplotype; a gene without a table
    /// resolves to the global fallback so the pipeline never fails on content gaps
    pub fn phenotype_for(&self, gene: &str, diplotype: &Diplotype) -> Phenotype {
        match self.phenotype_tables.get(gene) {
            Some(table) => table.phenotype_for(diplotype),
            None => default_fallback_phenotype()
        }
    }

    /// The reference star allele label for a gene; "*1" when no table exists
    pub fn reference_allele(&self, gene: &str) -> &str {
        self.phenotype_tables.get(gene)
            .map(|t| t.reference_allele())
            .unwrap_or("*1")
    }

    pub fn catalog_metadata(&self) -> &CatalogMetadata {
        &self.catalog_metadata
    }

    pub fn variant_entries(&self) -> &BTreeMap<String, VariantEntry> {
        &self.variant_entries
    }

    pub fn phenotype_tables(&self) -> &BTreeMap<String, PhenotypeTable> {
        &self.phenotype_tables
    }

    pub fn drug_entries(&self) -> &BTreeMap<String, DrugEntry> {
        &self.drug_entries
    }

    pub fn confidence_policy(&self) -> &ConfidencePolicy {
        &self.confidence_policy
    }
}

impl Default for PgxCatalog {
    /// The built-in reference catalog
    fn default() -> Self {
        crate::catalog::reference_data::reference_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_validates() {
        let catalog = PgxCatalog::default();
        catalog.validate().unwrap();
    }

    #[test]
    fn test_rsid_lookup() {
        let catalog = PgxCatalog::default();
        let entry = catalog.variant_by_rsid("rs4244285").unwrap();
        assert_eq!(entry.gene(), "CYP2C19");
        assert_eq!(entry.star_allele(), "*2");
        assert!(catalog.variant_by_rsid("rs999999999").is_none());
    }

    #[test]
    fn test_coordinate_lookup() {
        let catalog = PgxCatalog::default();
        // stored without a chr prefix requirement; both spellings must hit
        let entry = catalog.variant_by_coordinates("chr10", 94781859).unwrap();
        assert_eq!(entry.rsid(), "rs4244285");
        let entry = catalog.variant_by_coordinates("10", 94781859).unwrap();
        assert_eq!(entry.rsid(), "rs4244285");
        assert!(catalog.variant_by_coordinates("10", 1).is_none());
    }

    #[test]
    fn test_phenotype_lookup_is_total() {
        let catalog = PgxCatalog::default();
        let listed = catalog.phenotype_for("CYP2C19", &Diplotype::new("*2", "*2"));
        assert_eq!(listed, Phenotype::PoorMetabolizer);

        // swapped haplotype order must land on the same assignment
        let swapped = catalog.phenotype_for("CYP2C19", &Diplotype::new("*2", "*1"));
        let forward = catalog.phenotype_for("CYP2C19", &Diplotype::new("*1", "*2"));
        assert_eq!(swapped, forward);

        // unknown diplotypes and unknown genes resolve to fallbacks, never errors
        let fallback = catalog.phenotype_for("CYP2C19", &Diplotype::new("*99", "*98"));
        assert_eq!(fallback, catalog.phenotype_tables().get("CYP2C19").unwrap().fallback());
        let no_table = catalog.phenotype_for("NOT_A_GENE", &Diplotype::new("*1", "*1"));
        assert_eq!(no_table, Phenotype::NormalMetabolizer);
    }

    #[test]
    fn test_rule_lookup_is_total() {
        let catalog = PgxCatalog::default();
        let warfarin = catalog.drug_entries().get("WARFARIN").unwrap();
        // warfarin's table does not list ultrarapid; the fallback must cover it
        let rule = warfarin.rule_for(Phenotype::UltrarapidMetabolizer);
        assert_eq!(rule, warfarin.fallback_rule());
        // listed phenotypes hit their own rule
        let rule = warfarin.rule_for(Phenotype::PoorMetabolizer);
        assert_ne!(rule, warfarin.fallback_rule());
    }

    #[test]
    fn test_validate_rejects_malformed_rsid() {
        let mut catalog = PgxCatalog::default();
        let bogus = VariantEntry::new("snp42", "CYP2C19", "*2", "10", 94781859, "G", "A");
        catalog.variant_entries.insert("snp42".to_string(), bogus);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_table() {
        let mut catalog = PgxCatalog::default();
        catalog.phenotype_tables.remove("DPYD");
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_priority_rank() {
        let table = PhenotypeTable::new(
            "*1",
            vec!["*4".to_string(), "*10".to_string()],
            Default::default(),
            Phenotype::NormalMetabolizer
        );
        assert!(table.priority_rank("*4") < table.priority_rank("*10"));
        // unlisted alleles rank after listed ones
        assert!(table.priority_rank("*10") < table.priority_rank("*2"));
    }
}
