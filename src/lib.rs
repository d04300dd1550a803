
/// Contains functionality for constructing or using our catalog file
pub mod catalog;
/// Contains functionality for displaying catalog statistics
pub mod catalog_stat;
/// Contains all the CLI related functionality
pub mod cli;
/// Contains any specialized data types that are shared across the tooling
pub mod data_types;
/// Contains the functionality for resolving diplotypes and phenotypes per gene
pub mod diplotyper;
/// Contains the functionality for intersecting parsed records with the catalog
pub mod matcher;
/// Contains the per-drug risk scoring and the analysis entry points
pub mod risk_engine;
/// Contains generic utilities that are handy wrappers
pub mod util;
/// Contains the variant document parsing functionality
pub mod vcf;
