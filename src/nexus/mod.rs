//! Nexus artifact repository access

pub mod client;

// Re-export commonly used items
pub use client::{NexusClient, ResolveError, VersionMode};
