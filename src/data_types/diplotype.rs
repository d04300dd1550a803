
use serde::Serialize;

/// Contains a single gene's pair of star allele labels
#[derive(Clone, Debug, Serialize)]
pub struct Diplotype {
    /// short string for haplotype 1
    hap1: String,
    /// short string for haplotype 2
    hap2: String,
    /// combination diplotype call
    diplotype: String
}

impl Diplotype {
    pub fn new(hap1: &str, hap2: &str) -> Diplotype {
        Diplotype {
            hap1: hap1.to_string(),
            hap2: hap2.to_string(),
            diplotype: format!("{}/{}", hap1, hap2)
        }
    }

    /// Creates the both-reference diplotype for a gene
    /// # Arguments
    /// * `reference_allele` - the gene's reference star allele label
    pub fn homozygous_reference(reference_allele: &str) -> Diplotype {
        Diplotype::new(reference_allele, reference_allele)
    }

    /// If homozygous, return the single haplotype
    pub fn homozygous_haplotype(&self) -> Option<&str> {
        if self.hap1 == self.hap2 {
            Some(&self.hap1)
        } else {
            None
        }
    }

    pub fn hap1(&self) -> &str {
        &self.hap1
    }

    pub fn hap2(&self) -> &str {
        &self.hap2
    }

    pub fn diplotype(&self) -> &str {
        &self.diplotype
    }
}

impl PartialEq for Diplotype {
    fn eq(&self, other: &Self) -> bool {
        // this allows for a swap in hap1/hap2 and we still report identity
        (self.hap1 == other.hap1 && self.hap2 == other.hap2) ||
            (self.hap1 == other.hap2 && self.hap2 == other.hap1)
    }
}

/// A resolved diplotype plus the quality flag the resolver attaches to it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiplotypeCall {
    /// The resolved pair of star alleles
    diplotype: Diplotype,
    /// Set when any contributing genotype had unknown zygosity
    imprecise: bool
}

impl DiplotypeCall {
    pub fn new(diplotype: Diplotype, imprecise: bool) -> DiplotypeCall {
        DiplotypeCall {
            diplotype,
            imprecise
        }
    }

    pub fn diplotype(&self) -> &Diplotype {
        &self.diplotype
    }

    pub fn imprecise(&self) -> bool {
        self.imprecise
    }
}
