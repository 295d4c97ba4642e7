//! Nexus search client used to resolve service versions

use serde::Deserialize;
use thiserror::Error;

use crate::config::catalog::Service;
use crate::config::credentials::Credentials;
use crate::config::settings::NexusSettings;

/// Marker distinguishing snapshot builds from releases
const SNAPSHOT_MARKER: &str = "SNAPSHOT";

/// Server-side version wildcard for snapshot queries
const SNAPSHOT_FILTER: &str = "*SNAPSHOT*";

/// Which kind of version a lookup was after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionMode {
    Release,
    Snapshot,
}

impl VersionMode {
    pub fn as_str(&self) -> &str {
        match self {
            VersionMode::Release => "release",
            VersionMode::Snapshot => "snapshot",
        }
    }
}

impl std::fmt::Display for VersionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Version lookup failure
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no {mode} version of '{artifact}' found in repository '{repository}'")]
    NotFound {
        artifact: String,
        mode: VersionMode,
        repository: String,
    },

    #[error("Nexus search for '{artifact}' failed")]
    Request {
        artifact: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Nexus returned a malformed search response for '{artifact}'")]
    Malformed {
        artifact: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Subset of the Nexus search response this tool reads. The item list is
/// assumed to be sorted by version, descending, by the registry.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    version: String,
}

/// Blocking client for the Nexus `/service/rest/v1/search` endpoint.
/// One network call per lookup; no caching across calls.
pub struct NexusClient {
    base_url: String,
    repository: String,
    username: String,
    password: String,
    client: reqwest::blocking::Client,
}

impl NexusClient {
    pub fn new(settings: &NexusSettings, credentials: &Credentials) -> Self {
        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            repository: settings.repository.clone(),
            username: credentials.nexus_username.clone(),
            password: credentials.nexus_password.clone(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Resolve the version to deploy for `service`.
    ///
    /// Release-pinned services always resolve their latest release, even
    /// when a snapshot deployment was requested.
    pub fn resolve(&self, service: &Service, release: bool) -> Result<String, ResolveError> {
        if release || service.release_pinned {
            self.latest_release(&service.artifact())
        } else {
            self.latest_snapshot(&service.artifact())
        }
    }

    /// Newest version of `artifact` without the snapshot marker
    pub fn latest_release(&self, artifact: &str) -> Result<String, ResolveError> {
        let items = self.search(artifact, None)?;

        items
            .into_iter()
            .map(|item| item.version)
            .find(|version| !version.contains(SNAPSHOT_MARKER))
            .ok_or_else(|| self.not_found(artifact, VersionMode::Release))
    }

    /// Newest snapshot version of `artifact`
    pub fn latest_snapshot(&self, artifact: &str) -> Result<String, ResolveError> {
        let items = self.search(artifact, Some(SNAPSHOT_FILTER))?;

        items
            .into_iter()
            .next()
            .map(|item| item.version)
            .ok_or_else(|| self.not_found(artifact, VersionMode::Snapshot))
    }

    fn search(
        &self,
        artifact: &str,
        version_filter: Option<&str>,
    ) -> Result<Vec<SearchItem>, ResolveError> {
        let url = format!("{}/service/rest/v1/search", self.base_url);

        let mut query: Vec<(&str, &str)> = vec![
            ("repository", &self.repository),
            ("name", artifact),
            ("sort", "version"),
        ];
        if let Some(filter) = version_filter {
            query.push(("version", filter));
        }

        let body = self
            .client
            .get(&url)
            .query(&query)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|source| ResolveError::Request {
                artifact: artifact.to_string(),
                source,
            })?;

        tracing::debug!("Nexus search response for {}: {}", artifact, body);

        let response: SearchResponse =
            serde_json::from_str(&body).map_err(|source| ResolveError::Malformed {
                artifact: artifact.to_string(),
                source,
            })?;

        Ok(response.items)
    }

    fn not_found(&self, artifact: &str, mode: VersionMode) -> ResolveError {
        ResolveError::NotFound {
            artifact: artifact.to_string(),
            mode,
            repository: self.repository.clone(),
        }
    }
}
