
use serde::{Deserialize, Serialize};

/// The genotype subfield key inside a colon-delimited FORMAT column
const GT_KEY: &str = "GT";
/// The read depth subfield key inside a colon-delimited FORMAT column
const DP_KEY: &str = "DP";

/// Classification of a genotype call relative to the reference allele
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, strum_macros::Display)]
pub enum Zygosity {
    /// Both allele indices are zero, e.g. "0/0"
    #[strum(to_string = "homozygous_reference")]
    #[serde(rename = "homozygous_reference")]
    HomozygousReference,
    /// One zero and one non-zero index in either order, e.g. "0/1" or "1|0";
    /// also covers two unequal non-zero indices (compound calls like "1/2")
    #[strum(to_string = "heterozygous")]
    #[serde(rename = "heterozygous")]
    Heterozygous,
    /// Two equal non-zero indices, e.g. "1/1"
    #[strum(to_string = "homozygous_alternate")]
    #[serde(rename = "homozygous_alternate")]
    HomozygousAlternate,
    /// Missing or unparseable genotype subfield
    #[strum(to_string = "unknown")]
    #[serde(rename = "unknown")]
    Unknown
}

impl Zygosity {
    /// Classifies a raw genotype subfield, supporting both phased "|" and unphased "/" separators.
    /// Anything that does not split into exactly two parseable allele indices is Unknown.
    /// # Arguments
    /// * `genotype` - the raw genotype subfield, e.g. "0/1" or "1|1"
    pub fn from_genotype(genotype: &str) -> Zygosity {
        let alleles: Vec<&str> = genotype.split(['/', '|']).collect();
        if alleles.len() != 2 {
            return Zygosity::Unknown;
        }

        let a1: u32 = match alleles[0].parse() {
            Ok(a) => a,
            Err(_) => return Zygosity::Unknown
        };
        let a2: u32 = match alleles[1].parse() {
            Ok(a) => a,
            Err(_) => return Zygosity::Unknown
        };

        if a1 == 0 && a2 == 0 {
            Zygosity::HomozygousReference
        } else if a1 == a2 {
            Zygosity::HomozygousAlternate
        } else {
            // one reference + one alternate, or two distinct alternates
            Zygosity::Heterozygous
        }
    }
}

/// A genotype call extracted from the FORMAT/sample columns of a single record
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GenotypeCall {
    /// The raw genotype subfield, e.g. "0/1"; None when the columns were absent
    genotype: Option<String>,
    /// Zygosity classification of the genotype subfield
    zygosity: Zygosity,
    /// Read depth when declared in FORMAT; retained as a quality signal only
    read_depth: Option<u32>
}

impl GenotypeCall {
    /// Extracts a genotype call from the FORMAT and sample columns of a record.
    /// The genotype subfield is located by the position of "GT" in the colon-delimited
    /// FORMAT list; a missing column or subfield yields an Unknown call, never an error.
    /// # Arguments
    /// * `format` - the FORMAT column content when present, e.g. "GT:DP"
    /// * `sample` - the per-sample column content when present, e.g. "0/1:35"
    pub fn from_columns(format: Option<&str>, sample: Option<&str>) -> GenotypeCall {
        let (format, sample) = match (format, sample) {
            (Some(f), Some(s)) => (f, s),
            _ => return GenotypeCall::unknown()
        };

        let format_keys: Vec<&str> = format.split(':').collect();
        let sample_fields: Vec<&str> = sample.split(':').collect();

        let genotype: Option<String> = format_keys.iter()
            .position(|&k| k == GT_KEY)
            .and_then(|i| sample_fields.get(i))
            .map(|gt| gt.to_string());

        let read_depth: Option<u32> = format_keys.iter()
            .position(|&k| k == DP_KEY)
            .and_then(|i| sample_fields.get(i))
            .and_then(|dp| dp.parse().ok());

        let zygosity: Zygosity = match genotype.as_deref() {
            Some(gt) => Zygosity::from_genotype(gt),
            None => Zygosity::Unknown
        };

        GenotypeCall {
            genotype,
            zygosity,
            read_depth
        }
    }

    /// Creates a call for a record with no genotype information at all
    pub fn unknown() -> GenotypeCall {
        GenotypeCall {
            genotype: None,
            zygosity: Zygosity::Unknown,
            read_depth: None
        }
    }

    pub fn genotype(&self) -> Option<&str> {
        self.genotype.as_deref()
    }

    pub fn zygosity(&self) -> Zygosity {
        self.zygosity
    }

    pub fn read_depth(&self) -> Option<u32> {
        self.read_depth
    }
}
