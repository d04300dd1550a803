
use serde::{Deserialize, Serialize};

/// Metabolizer status categories, ordered from least to most enzyme activity.
/// The derived ordering is relied on when rule tables are displayed.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, strum_macros::Display)]
pub enum Phenotype {
    #[strum(to_string = "Poor Metabolizer")]
    #[serde(rename = "Poor Metabolizer")]
    PoorMetabolizer,
    #[strum(to_string = "Intermediate Metabolizer")]
    #[serde(rename = "Intermediate Metabolizer")]
    IntermediateMetabolizer,
    #[strum(to_string = "Normal Metabolizer")]
    #[serde(rename = "Normal Metabolizer")]
    NormalMetabolizer,
    #[strum(to_string = "Rapid Metabolizer")]
    #[serde(rename = "Rapid Metabolizer")]
    RapidMetabolizer,
    #[strum(to_string = "Ultrarapid Metabolizer")]
    #[serde(rename = "Ultrarapid Metabolizer")]
    UltrarapidMetabolizer
}
