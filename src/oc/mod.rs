//! OpenShift CLI operations

pub mod cli;

// Re-export commonly used items
pub use cli::OcCli;
