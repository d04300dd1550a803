
/// Contains definitions for our catalog of loci -> diplotypes -> phenotypes -> drug rules
pub mod pgx_catalog;
/// Built-in reference content that is typically written to the catalog file
pub mod reference_data;
