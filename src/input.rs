//! Input files: path validation and CSV loading

pub mod reader;
pub mod validate;

pub use reader::read_csv;
pub use validate::validate_files;
