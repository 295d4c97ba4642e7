//! Credentials and tool locations read from the environment at startup

use anyhow::{Result, anyhow};
use std::env;
use std::path::PathBuf;

/// Login credentials for the `oc` binary
#[derive(Debug, Clone)]
pub struct OcLogin {
    pub username: String,
    pub password: String,
}

/// Everything secret or machine-specific, collected once and passed to
/// collaborators instead of being read ad hoc from the environment.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Path to the `oc` binary (`OC_PATH`, defaults to `oc` on PATH)
    pub oc_binary: PathBuf,

    /// `OC_USERNAME`/`OC_PASSWORD`; only required for online deployments
    pub oc_login: Option<OcLogin>,

    /// `NEXUS_USER`
    pub nexus_username: String,

    /// `NEXUS_PASSWORD`
    pub nexus_password: String,
}

impl Credentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build credentials from an arbitrary key lookup
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let oc_binary = PathBuf::from(get("OC_PATH").unwrap_or_else(|| "oc".to_string()));

        let oc_login = match (get("OC_USERNAME"), get("OC_PASSWORD")) {
            (Some(username), Some(password)) => Some(OcLogin { username, password }),
            _ => None,
        };

        let nexus_username = get("NEXUS_USER")
            .ok_or_else(|| anyhow!("NEXUS_USER is not set"))?;
        let nexus_password = get("NEXUS_PASSWORD")
            .ok_or_else(|| anyhow!("NEXUS_PASSWORD is not set"))?;

        Ok(Self {
            oc_binary,
            oc_login,
            nexus_username,
            nexus_password,
        })
    }

    /// The oc login, or an error telling the operator what to set
    pub fn require_oc_login(&self) -> Result<&OcLogin> {
        self.oc_login
            .as_ref()
            .ok_or_else(|| anyhow!("OC_USERNAME and OC_PASSWORD must be set to log in"))
    }
}
