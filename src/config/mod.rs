//! Static catalog, credentials and settings

pub mod catalog;
pub mod credentials;
pub mod settings;

// Re-export commonly used items
pub use catalog::{CATALOG, Namespace, Service};
pub use credentials::{Credentials, OcLogin};
pub use settings::Settings;
