//! Enhanced error types with actionable suggestions

use colored::Colorize;
use thiserror::Error;

/// Enhanced error with suggestions and documentation links
#[derive(Error, Debug)]
#[error("{message}")]
pub struct HcpDeployError {
    pub message: String,
    pub suggestions: Vec<String>,
    pub docs_link: Option<String>,
}

impl HcpDeployError {
    /// Create a new error with suggestions
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestions: Vec::new(),
            docs_link: None,
        }
    }

    /// Add a suggestion to the error
    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a documentation link
    pub fn with_docs(mut self, link: impl Into<String>) -> Self {
        self.docs_link = Some(link.into());
        self
    }

    /// Display the error with suggestions
    pub fn display(&self) {
        crate::log_error!("{}", self.message);

        if !self.suggestions.is_empty() {
            println!();
            println!("{}", "Suggestions:".yellow().bold());
            for suggestion in &self.suggestions {
                println!("  {} {}", "→".blue(), suggestion);
            }
        }

        if let Some(docs) = &self.docs_link {
            println!();
            println!("{} {}", "Documentation:".cyan(), docs);
        }
    }

    // Common error patterns

    /// Missing environment credential
    pub fn missing_credentials(variable: &str) -> Self {
        Self::new(format!("{} is not set", variable))
            .suggest(format!("Export {} before running a deployment", variable))
            .suggest("Run 'hcp-deploy check' to see which variables are missing")
    }

    /// oc binary missing or not executable
    pub fn oc_unavailable(message: impl Into<String>) -> Self {
        Self::new(message)
            .suggest("Install the OpenShift CLI or point OC_PATH at it")
            .with_docs("https://docs.openshift.com/container-platform/latest/cli_reference/openshift_cli/getting-started-cli.html")
    }

    /// Cluster login rejected
    pub fn login_failed(message: impl Into<String>) -> Self {
        Self::new(message)
            .suggest("Verify OC_USERNAME and OC_PASSWORD")
            .suggest("Check that the cluster is reachable from this machine")
    }

    /// Version lookup returned nothing usable
    pub fn version_not_found(message: impl Into<String>) -> Self {
        Self::new(message)
            .suggest("Check that the artifact exists in the Nexus repository")
            .suggest("Snapshot-only services cannot be deployed with --release")
            .suggest("Run with -vv to see the raw Nexus search response")
    }

    /// Nexus could not be reached or rejected the request
    pub fn nexus_unreachable(message: impl Into<String>) -> Self {
        Self::new(message)
            .suggest("Check network connectivity to the Nexus host")
            .suggest("Verify NEXUS_USER and NEXUS_PASSWORD")
    }
}

/// Convert anyhow error to HcpDeployError when possible
pub fn enhance_error(err: anyhow::Error) -> HcpDeployError {
    // Alternate formatting includes the source chain
    let err_str = format!("{:#}", err);

    for variable in ["NEXUS_USER", "NEXUS_PASSWORD", "OC_USERNAME", "OC_PASSWORD"] {
        if err_str.contains(variable) && err_str.contains("set") {
            return HcpDeployError::missing_credentials(variable);
        }
    }

    if err_str.contains("Failed to run") {
        return HcpDeployError::oc_unavailable(err_str);
    }

    if err_str.contains("login failed") {
        return HcpDeployError::login_failed(err_str);
    }

    if err_str.contains("no release version") || err_str.contains("no snapshot version") {
        return HcpDeployError::version_not_found(err_str);
    }

    if err_str.contains("Nexus search")
        || err_str.contains("connection refused")
        || err_str.contains("timed out")
    {
        return HcpDeployError::nexus_unreachable(err_str);
    }

    // Default error with generic suggestion
    HcpDeployError::new(err_str).suggest("Run with --verbose for more details")
}
