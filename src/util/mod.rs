
/// Contains wrappers for loading and saving our file types
pub mod file_io;
