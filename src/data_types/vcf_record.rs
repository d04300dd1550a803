
use serde::Serialize;
use simple_error::{SimpleError, bail};

use crate::data_types::genotype::GenotypeCall;

/// Number of mandatory tab-delimited columns in a data line
pub const REQUIRED_COLUMNS: usize = 8;
/// Sentinel used when the position column does not parse
pub const UNKNOWN_POSITION: u64 = 0;

/// Strips an optional leading "chr" (any case) so "chr22" and "22" compare equal
/// # Arguments
/// * `chromosome` - the raw chromosome label
pub fn normalize_chromosome(chromosome: &str) -> String {
    let stripped = if chromosome.len() >= 3 && chromosome[..3].eq_ignore_ascii_case("chr") {
        &chromosome[3..]
    } else {
        chromosome
    };
    stripped.to_ascii_uppercase()
}

/// One parsed data line from a single-sample variant file
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VcfRecord {
    /// The chromosome label as written in the file
    chromosome: String,
    /// 1-based position; UNKNOWN_POSITION when the column did not parse
    position: u64,
    /// Variant identifier, e.g. an rsID; "." maps to None
    identifier: Option<String>,
    /// Reference allele
    reference: String,
    /// Alternate alleles, comma-split
    alternates: Vec<String>,
    /// Quality score; "." or unparseable maps to None
    quality: Option<f64>,
    /// Filter status column
    filter: String,
    /// Info column, kept verbatim
    info: String,
    /// FORMAT column when the line carries sample data
    format: Option<String>,
    /// Per-sample column when the line carries sample data
    sample: Option<String>
}

impl VcfRecord {
    /// Parses a single tab-delimited data line into a record.
    /// Numeric fields that do not parse fall back to sentinels instead of failing;
    /// only a wrong column count is an error, which callers are expected to skip.
    /// # Arguments
    /// * `line` - one non-header line from the input document
    /// # Errors
    /// * if the line has fewer than the required number of columns
    pub fn from_line(line: &str) -> Result<VcfRecord, SimpleError> {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < REQUIRED_COLUMNS {
            bail!("Expected at least {} columns, found {}", REQUIRED_COLUMNS, columns.len());
        }

        let position: u64 = columns[1].parse().unwrap_or(UNKNOWN_POSITION);
        let identifier: Option<String> = match columns[2] {
            "" | "." => None,
            id => Some(id.to_string())
        };
        let alternates: Vec<String> = columns[4].split(',')
            .map(|a| a.to_string())
            .collect();
        let quality: Option<f64> = columns[5].parse().ok();

        // FORMAT and sample columns are both required to extract a genotype later
        let format: Option<String> = columns.get(8).map(|c| c.to_string());
        let sample: Option<String> = columns.get(9).map(|c| c.to_string());

        Ok(VcfRecord {
            chromosome: columns[0].to_string(),
            position,
            identifier,
            reference: columns[3].to_string(),
            alternates,
            quality,
            filter: columns[6].to_string(),
            info: columns[7].to_string(),
            format,
            sample
        })
    }

    /// Extracts the genotype call for this record; Unknown when sample data is absent
    pub fn genotype_call(&self) -> GenotypeCall {
        GenotypeCall::from_columns(self.format.as_deref(), self.sample.as_deref())
    }

    /// The chromosome label with any leading "chr" stripped, for catalog comparisons
    pub fn normalized_chromosome(&self) -> String {
        normalize_chromosome(&self.chromosome)
    }

    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn alternates(&self) -> &[String] {
        &self.alternates
    }

    pub fn quality(&self) -> Option<f64> {
        self.quality
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn sample(&self) -> Option<&str> {
        self.sample.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data_types::genotype::Zygosity;

    #[test]
    fn test_full_line() {
        let line = "chr22\t42128945\trs3892097\tC\tT\t100\tPASS\t.\tGT:DP\t0/1:35";
        let record = VcfRecord::from_line(line).unwrap();
        assert_eq!(record.chromosome(), "chr22");
        assert_eq!(record.position(), 42128945);
        assert_eq!(record.identifier(), Some("rs3892097"));
        assert_eq!(record.reference(), "C");
        assert_eq!(record.alternates(), &["T".to_string()]);
        assert_eq!(record.quality(), Some(100.0));
        assert_eq!(record.filter(), "PASS");
        assert_eq!(record.format(), Some("GT:DP"));
        assert_eq!(record.sample(), Some("0/1:35"));

        let call = record.genotype_call();
        assert_eq!(call.zygosity(), Zygosity::Heterozygous);
        assert_eq!(call.read_depth(), Some(35));
    }

    #[test]
    fn test_minimal_line() {
        // eight columns, no sample data
        let line = "10\t94781859\trs4244285\tG\tA\t.\t.\t.";
        let record = VcfRecord::from_line(line).unwrap();
        assert_eq!(record.quality(), None);
        assert_eq!(record.format(), None);
        assert_eq!(record.sample(), None);
        assert_eq!(record.genotype_call().zygosity(), Zygosity::Unknown);
    }

    #[test]
    fn test_dot_identifier() {
        let line = "chr1\t97915614\t.\tC\tT\t250\tPASS\t.";
        let record = VcfRecord::from_line(line).unwrap();
        assert_eq!(record.identifier(), None);
    }

    #[test]
    fn test_position_sentinel() {
        let line = "chr1\tnot_a_number\trs1\tC\tT\t250\tPASS\t.";
        let record = VcfRecord::from_line(line).unwrap();
        assert_eq!(record.position(), UNKNOWN_POSITION);
    }

    #[test]
    fn test_multi_alternate() {
        let line = "chr1\t100\trs1\tC\tT,G\t250\tPASS\t.";
        let record = VcfRecord::from_line(line).unwrap();
        assert_eq!(record.alternates(), &["T".to_string(), "G".to_string()]);
    }

    #[test]
    fn test_short_line_rejected() {
        let line = "chr1\t100\trs1\tC\tT";
        assert!(VcfRecord::from_line(line).is_err());
    }

    #[test]
    fn test_chromosome_normalization() {
        assert_eq!(normalize_chromosome("chr22"), "22");
        assert_eq!(normalize_chromosome("22"), "22");
        assert_eq!(normalize_chromosome("CHRX"), "X");
        assert_eq!(normalize_chromosome("x"), "X");
    }
}
