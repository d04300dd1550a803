
use log::debug;

use crate::data_types::vcf_record::VcfRecord;
use crate::vcf::errors::VcfFormatError;

/// Marker for meta/comment header lines
const META_PREFIX: &str = "##";
/// Marker for the column-name header line
const HEADER_PREFIX: char = '#';

/// An in-memory parse of one single-sample variant document.
/// `data_lines` counts every non-header line seen, including malformed ones that
/// were skipped; `records` holds only the lines that parsed. The two counters are
/// deliberately independent so callers can detect skipped lines.
#[derive(Clone, Debug, PartialEq)]
pub struct VcfDocument {
    /// The records that parsed, in input order
    records: Vec<VcfRecord>,
    /// Count of non-header, non-blank lines seen
    data_lines: usize
}

impl VcfDocument {
    pub fn records(&self) -> &[VcfRecord] {
        &self.records
    }

    pub fn data_lines(&self) -> usize {
        self.data_lines
    }

    pub fn parsed_records(&self) -> usize {
        self.records.len()
    }
}

/// Parses raw document text into records plus line accounting.
/// Meta lines ("##...") and the column-name line ("#CHROM...") are skipped and
/// never counted. Malformed data lines are counted, logged, and skipped; no
/// structural issue inside a recognizable document ever aborts the parse.
/// # Arguments
/// * `text` - the full document text
/// # Errors
/// * if the input has no header marker and no parseable data line at all,
///   i.e. it is not this tabular format
pub fn parse_vcf_text(text: &str) -> Result<VcfDocument, VcfFormatError> {
    let mut records: Vec<VcfRecord> = vec![];
    let mut data_lines: usize = 0;
    let mut saw_header: bool = false;

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        if line.starts_with(HEADER_PREFIX) {
            // both "##meta" and the "#CHROM" column line land here; neither is data
            saw_header = true;
            if !line.starts_with(META_PREFIX) {
                debug!("Column header: {line}");
            }
            continue;
        }

        data_lines += 1;
        match VcfRecord::from_line(line) {
            Ok(record) => records.push(record),
            Err(e) => {
                debug!("Skipping malformed data line {data_lines}: {e}");
            }
        }
    }

    if !saw_header && records.is_empty() {
        return Err(VcfFormatError::UnrecognizedFormat);
    }

    Ok(VcfDocument {
        records,
        data_lines
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data_types::genotype::Zygosity;

    /// Mirrors a realistic clinical export: meta lines, column header, genotyped data
    const SIX_LINE_VCF: &str = "##fileformat=VCFv4.2\n\
        ##reference=GRCh38\n\
        ##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">\n\
        #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tSAMPLE1\n\
        chr22\t42128945\trs3892097\tC\tT\t100\tPASS\t.\tGT:DP\t0/1:35\n\
        chr10\t94781859\trs4244285\tG\tA\t200\tPASS\t.\tGT:DP\t1/1:42\n\
        chr10\t94942290\trs1799853\tC\tT\t150\tPASS\t.\tGT:DP\t0/1:28\n\
        chr12\t21178615\trs4149056\tT\tC\t180\tPASS\t.\tGT:DP\t0/0:50\n\
        chr6\t18139051\trs1142345\tA\tG\t120\tPASS\t.\tGT:DP\t0/1:30\n\
        chr1\t97915614\trs3918290\tC\tT\t250\tPASS\t.\tGT:DP\t1/1:60\n";

    #[test]
    fn test_six_line_document() {
        let document = parse_vcf_text(SIX_LINE_VCF).unwrap();
        assert_eq!(document.data_lines(), 6);
        assert_eq!(document.parsed_records(), 6);
        assert_eq!(document.records()[0].identifier(), Some("rs3892097"));
        assert_eq!(document.records()[0].genotype_call().zygosity(), Zygosity::Heterozygous);
        assert_eq!(document.records()[5].genotype_call().zygosity(), Zygosity::HomozygousAlternate);
    }

    #[test]
    fn test_malformed_lines_counted_not_emitted() {
        let text = "##fileformat=VCFv4.2\n\
            #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
            chr1\t100\trs1\tC\tT\t50\tPASS\t.\n\
            chr1\tonly_three_columns\tbroken\n\
            chr2\t200\trs2\tG\tA\t60\tPASS\t.\n";
        let document = parse_vcf_text(text).unwrap();
        assert_eq!(document.data_lines(), 3);
        assert_eq!(document.parsed_records(), 2);
    }

    #[test]
    fn test_header_lines_not_counted() {
        let text = "##fileformat=VCFv4.2\n\
            ##source=Test\n\
            #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";
        let document = parse_vcf_text(text).unwrap();
        assert_eq!(document.data_lines(), 0);
        assert_eq!(document.parsed_records(), 0);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let text = "##fileformat=VCFv4.2\n\n\
            #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
            chr1\t100\trs1\tC\tT\t50\tPASS\t.\n\n";
        let document = parse_vcf_text(text).unwrap();
        assert_eq!(document.data_lines(), 1);
        assert_eq!(document.parsed_records(), 1);
    }

    #[test]
    fn test_unrecognizable_input() {
        assert_eq!(parse_vcf_text("").unwrap_err(), VcfFormatError::UnrecognizedFormat);
        assert_eq!(parse_vcf_text("this is just prose\nwith two lines\n").unwrap_err(), VcfFormatError::UnrecognizedFormat);
    }

    #[test]
    fn test_headerless_but_parseable() {
        // a bare data line without any header still parses; format detection
        // only rejects inputs with neither header nor data
        let text = "chr1\t100\trs1\tC\tT\t50\tPASS\t.\n";
        let document = parse_vcf_text(text).unwrap();
        assert_eq!(document.parsed_records(), 1);
    }

    #[test]
    fn test_idempotent_parse() {
        let first = parse_vcf_text(SIX_LINE_VCF).unwrap();
        let second = parse_vcf_text(SIX_LINE_VCF).unwrap();
        assert_eq!(first, second);
    }
}
