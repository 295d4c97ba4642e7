//! Progress indicators for long-running operations

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("Failed to create spinner template")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Progress wrapper for Nexus version resolution
pub struct ResolveProgress {
    pb: ProgressBar,
    artifact: String,
}

impl ResolveProgress {
    pub fn new(artifact: &str, mode: &str) -> Self {
        let message = format!("Resolving latest {} of {}", mode, artifact);
        Self {
            pb: create_spinner(&message),
            artifact: artifact.to_string(),
        }
    }

    pub fn finish_success(&self, version: &str) {
        self.pb
            .finish_with_message(format!("✓ {} {}", self.artifact, version));
    }

    pub fn finish_error(&self) {
        self.pb
            .finish_with_message(format!("✗ {} resolution failed", self.artifact));
    }
}
