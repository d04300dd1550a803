
use serde::Serialize;
use std::collections::BTreeMap;

use crate::data_types::genotype::{GenotypeCall, Zygosity};

/// One input record that matched a catalog-defined pharmacogenomic locus
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariantMatch {
    /// The catalog identifier for the locus, e.g. an rsID
    rsid: String,
    /// The gene the locus belongs to
    gene: String,
    /// The star allele the locus defines
    star_allele: String,
    /// The genotype call extracted from the matching record
    genotype: GenotypeCall
}

impl VariantMatch {
    pub fn new(rsid: String, gene: String, star_allele: String, genotype: GenotypeCall) -> VariantMatch {
        VariantMatch {
            rsid,
            gene,
            star_allele,
            genotype
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

    pub fn genotype(&self) -> &GenotypeCall {
        &self.genotype
    }

    pub fn zygosity(&self) -> Zygosity {
        self.genotype.zygosity()
    }
}

/// Per-gene data quality signal: true iff any catalog-defined locus for the gene
/// appeared in the input, independent of the genotype called there
pub type GeneCoverage = BTreeMap<String, bool>;
