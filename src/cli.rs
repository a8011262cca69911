//! Command-line parsing and the top-level run loop

pub mod args;
pub mod run;

// Re-export types for convenient access
pub use args::Options;
pub use run::{EXIT_ERROR, EXIT_SUCCESS, execute, run};
