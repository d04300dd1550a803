
/// Contains the final per-drug result types and the serializable report
pub mod analysis;
/// Contains the paired star-allele representation for a gene
pub mod diplotype;
/// Contains genotype extraction and zygosity classification
pub mod genotype;
/// Contains the metabolizer phenotype categories
pub mod phenotype;
/// Contains the risk assessment output types
pub mod risk;
/// Contains the detected variant and gene coverage types
pub mod variant_match;
/// Contains the parsed variant record representation
pub mod vcf_record;
