
/// Contains the settings for the analysis subcommand
pub mod analyze;
/// Contains the settings for exporting the built-in catalog
pub mod catalog_export;
/// Contains the settings for the catalog statistics subcommand
pub mod catalog_stat;
/// Contains the core CLI entry point and shared checks
pub mod core;
