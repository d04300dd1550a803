
/// The one caller-visible failure of the analysis pipeline.
/// Zero detected variants is NOT an error; a fully-processed input with no
/// catalog hits still produces a default result per drug.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum VcfFormatError {
    #[error("input contains no header line and no parseable data line")]
    UnrecognizedFormat
}
