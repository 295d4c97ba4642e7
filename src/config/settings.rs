//! Configuration file support for hcp-deploy

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub nexus: NexusSettings,

    #[serde(default)]
    pub registry: RegistrySettings,
}

/// Nexus search endpoint settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NexusSettings {
    #[serde(default = "default_nexus_base_url")]
    pub base_url: String,

    #[serde(default = "default_nexus_repository")]
    pub repository: String,
}

/// Docker registry the images are imported from
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RegistrySettings {
    #[serde(default = "default_registry_host")]
    pub host: String,
}

// Default value functions
fn default_nexus_base_url() -> String {
    "https://devops.digital.belgium.be/nexus".to_string()
}

fn default_nexus_repository() -> String {
    "docker-ecosystem".to_string()
}

fn default_registry_host() -> String {
    "devops.digital.belgium.be:1443".to_string()
}

impl Default for NexusSettings {
    fn default() -> Self {
        Self {
            base_url: default_nexus_base_url(),
            repository: default_nexus_repository(),
        }
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            host: default_registry_host(),
        }
    }
}

impl Settings {
    /// Load settings from file or return defaults
    pub fn load() -> Self {
        if let Some(path) = Self::find_config_file() {
            Self::load_from_file(&path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Find config file in standard locations
    /// Priority:
    /// 1. .hcp-deploy.toml in current directory
    /// 2. ~/.config/hcp-deploy/config.toml (XDG config directory)
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory
        let local_config = PathBuf::from(".hcp-deploy.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("hcp-deploy").join("config.toml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Generate example config file content
    pub fn example_config() -> String {
        let header = "# hcp-deploy configuration file\n\
                      # Place this file at ~/.config/hcp-deploy/config.toml or .hcp-deploy.toml in your project\n\n";

        match toml::to_string_pretty(&Settings::default()) {
            Ok(config) => format!("{}{}", header, config),
            Err(_) => header.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(
            settings.nexus.base_url,
            "https://devops.digital.belgium.be/nexus"
        );
        assert_eq!(settings.nexus.repository, "docker-ecosystem");
        assert_eq!(settings.registry.host, "devops.digital.belgium.be:1443");
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        assert!(toml_str.contains("base_url"));
        assert!(toml_str.contains("docker-ecosystem"));
    }

    #[test]
    fn test_settings_deserialization() {
        let toml_str = r#"
[nexus]
base_url = "https://nexus.example.com"

[registry]
host = "registry.example.com:5000"
"#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.nexus.base_url, "https://nexus.example.com");
        // Omitted fields fall back to defaults
        assert_eq!(settings.nexus.repository, "docker-ecosystem");
        assert_eq!(settings.registry.host, "registry.example.com:5000");
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut temp = tempfile::NamedTempFile::new().unwrap();
        temp.write_all(b"[registry]\nhost = \"localhost:5000\"\n")
            .unwrap();

        let settings = Settings::load_from_file(&temp.path().to_path_buf()).unwrap();
        assert_eq!(settings.registry.host, "localhost:5000");
    }

    #[test]
    fn test_example_config() {
        let example = Settings::example_config();
        assert!(example.contains("hcp-deploy configuration"));
        assert!(example.contains("[nexus]"));
        assert!(example.contains("[registry]"));
    }
}
