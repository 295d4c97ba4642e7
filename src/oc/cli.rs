//! Wrapper around the `oc` binary

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::config::credentials::OcLogin;

/// Runs `oc` invocations for one deployment run.
///
/// Every intended command line is echoed before execution. In offline mode
/// the echo still happens but nothing is executed.
pub struct OcCli {
    binary: PathBuf,
    offline: bool,
}

impl OcCli {
    pub fn new(binary: impl Into<PathBuf>, offline: bool) -> Self {
        Self {
            binary: binary.into(),
            offline,
        }
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    /// Log in to the cluster.
    ///
    /// Unlike the import and tag steps, a failed login aborts the run:
    /// every subsequent command would fail against an unauthenticated
    /// session. The password is never echoed.
    pub fn login(&self, login: &OcLogin) -> Result<()> {
        self.echo(&["login", "-u", login.username.as_str()]);

        if self.offline {
            return Ok(());
        }

        let output = Command::new(&self.binary)
            .args(["login", "-u", &login.username, "-p", &login.password])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("Failed to run '{} login'", self.binary.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "oc login failed for user '{}': {}",
                login.username,
                stderr.trim()
            ));
        }

        Ok(())
    }

    /// Import an image stream tag from the registry into `namespace`
    pub fn import_image(&self, image: &str, from: &str, namespace: &str) -> Result<()> {
        self.run(&import_image_args(image, from, namespace))
    }

    /// Re-tag a registry image within `namespace`
    pub fn tag(&self, from: &str, target: &str, namespace: &str) -> Result<()> {
        self.run(&tag_args(from, target, namespace))
    }

    /// Echo and execute one oc invocation. A non-zero exit status is
    /// surfaced as a warning without failing the run, preserving the
    /// established operational behavior of the deployment job.
    fn run(&self, args: &[String]) -> Result<()> {
        self.echo(args);

        if self.offline {
            return Ok(());
        }

        let status = Command::new(&self.binary)
            .args(args)
            .status()
            .with_context(|| format!("Failed to run '{} {}'", self.binary.display(), args[0]))?;

        if !status.success() {
            crate::log_warn!("oc {} exited with {}", args[0], status);
        }

        Ok(())
    }

    fn echo<S: AsRef<str>>(&self, args: &[S]) {
        let line = format!(
            "oc {}",
            args.iter()
                .map(|a| a.as_ref())
                .collect::<Vec<_>>()
                .join(" ")
        );

        if self.offline {
            println!("{} {}", "[offline]".yellow().bold(), line);
        } else {
            println!("{}", line.dimmed());
        }
    }
}

/// Argument vector for the import step
pub fn import_image_args(image: &str, from: &str, namespace: &str) -> Vec<String> {
    vec![
        "import-image".to_string(),
        image.to_string(),
        format!("--from={}", from),
        "--confirm".to_string(),
        "-n".to_string(),
        namespace.to_string(),
    ]
}

/// Argument vector for the re-tag step
pub fn tag_args(from: &str, target: &str, namespace: &str) -> Vec<String> {
    vec![
        "tag".to_string(),
        "--source=docker".to_string(),
        from.to_string(),
        target.to_string(),
        "-n".to_string(),
        namespace.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_image_args() {
        let args = import_image_args(
            "hcp-audit-bs-service:2.0.0",
            "devops.digital.belgium.be:1443/hcp-audit-bs-service:2.0.0",
            "bosa-dt-test-hcp-fedapi",
        );
        assert_eq!(
            args,
            vec![
                "import-image",
                "hcp-audit-bs-service:2.0.0",
                "--from=devops.digital.belgium.be:1443/hcp-audit-bs-service:2.0.0",
                "--confirm",
                "-n",
                "bosa-dt-test-hcp-fedapi",
            ]
        );
    }

    #[test]
    fn test_tag_args() {
        let args = tag_args(
            "devops.digital.belgium.be:1443/hcp-audit-bs-service:2.0.0",
            "hcp-audit-bs-service:latest",
            "bosa-dt-prod-hcp-fedapi",
        );
        assert_eq!(
            args,
            vec![
                "tag",
                "--source=docker",
                "devops.digital.belgium.be:1443/hcp-audit-bs-service:2.0.0",
                "hcp-audit-bs-service:latest",
                "-n",
                "bosa-dt-prod-hcp-fedapi",
            ]
        );
    }

    #[test]
    fn test_offline_mode_executes_nothing() {
        // A binary that cannot exist: execution would error, echo-only succeeds
        let oc = OcCli::new("/nonexistent/oc", true);

        oc.import_image("img:1.0", "registry/img:1.0", "ns").unwrap();
        oc.tag("registry/img:1.0", "img:latest", "ns").unwrap();
        oc.login(&OcLogin {
            username: "deployer".to_string(),
            password: "hunter2".to_string(),
        })
        .unwrap();
    }

    #[test]
    fn test_command_failure_is_not_fatal() {
        let oc = OcCli::new("false", false);
        assert!(oc.import_image("img:1.0", "registry/img:1.0", "ns").is_ok());
    }

    #[test]
    fn test_login_failure_is_fatal() {
        let oc = OcCli::new("false", false);
        let err = oc
            .login(&OcLogin {
                username: "deployer".to_string(),
                password: "hunter2".to_string(),
            })
            .unwrap_err();
        assert!(err.to_string().contains("deployer"));
    }
}
