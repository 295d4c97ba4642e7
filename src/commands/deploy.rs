//! Deploy command implementation

use anyhow::Result;
use colored::Colorize;

use crate::config::catalog::{CATALOG, Namespace, Service};
use crate::config::credentials::Credentials;
use crate::config::settings::Settings;
use crate::nexus::{NexusClient, VersionMode};
use crate::oc::OcCli;
use crate::utils::progress::ResolveProgress;

/// One deployment request
pub struct DeployOptions {
    pub namespace: Namespace,

    /// Deploy latest releases instead of latest snapshots
    pub release: bool,

    /// Echo the oc commands without executing anything
    pub offline: bool,

    /// Service name fragments; empty means the full catalog
    pub deployments: Vec<String>,

    /// Skip the production confirmation prompt
    pub assume_yes: bool,
}

/// Import and tag the latest images for the requested services
pub fn deploy(options: DeployOptions) -> Result<()> {
    let settings = Settings::load();
    let credentials = Credentials::from_env()?;

    let selected = select_services(&options.deployments);
    if selected.is_empty() {
        crate::log_warn!(
            "No catalog service matches {}",
            options.deployments.join(", ")
        );
        return Ok(());
    }

    if options.namespace == Namespace::Production && !options.assume_yes && !options.offline {
        let prompt = format!(
            "Deploy to production namespace '{}'?",
            options.namespace.cluster_name()
        );
        if !crate::utils::confirm(&prompt)? {
            crate::log_info!("Aborted by user");
            return Ok(());
        }
    }

    let oc = OcCli::new(credentials.oc_binary.clone(), options.offline);

    if options.offline {
        // Echo only; credentials are not required for a dry run
        if let Some(login) = &credentials.oc_login {
            oc.login(login)?;
        }
    } else {
        oc.login(credentials.require_oc_login()?)?;
    }

    let nexus = NexusClient::new(&settings.nexus, &credentials);

    let mut deployed = 0usize;
    let mut filtered = 0usize;

    for service in selected {
        if !service.is_deployable(options.namespace, options.release) {
            crate::log_info!(
                "Skipping {}: not deployable in {} ({} mode)",
                service.name,
                options.namespace,
                mode_for(service, options.release)
            );
            filtered += 1;
            continue;
        }

        deploy_service(service, &options, &settings, &nexus, &oc)?;
        deployed += 1;
    }

    println!();
    println!(
        "{} {} deployed, {} filtered out (namespace {}, {} mode{})",
        "Done:".green().bold(),
        deployed,
        filtered,
        options.namespace,
        if options.release { "release" } else { "snapshot" },
        if options.offline { ", offline" } else { "" }
    );

    Ok(())
}

/// Resolve one service's version and run the import and tag steps
fn deploy_service(
    service: &Service,
    options: &DeployOptions,
    settings: &Settings,
    nexus: &NexusClient,
    oc: &OcCli,
) -> Result<()> {
    let artifact = service.artifact();

    let progress = ResolveProgress::new(&artifact, mode_for(service, options.release).as_str());
    let version = match nexus.resolve(service, options.release) {
        Ok(version) => {
            progress.finish_success(&version);
            version
        }
        Err(err) => {
            progress.finish_error();
            return Err(err.into());
        }
    };

    let image = service.image_ref(&version);
    let from = format!("{}/{}", settings.registry.host, image);
    let target = format!("{}:latest", artifact);
    let cluster_namespace = options.namespace.cluster_name();

    oc.import_image(&image, &from, cluster_namespace)?;
    oc.tag(&from, &target, cluster_namespace)?;

    Ok(())
}

fn mode_for(service: &Service, release: bool) -> VersionMode {
    if release || service.release_pinned {
        VersionMode::Release
    } else {
        VersionMode::Snapshot
    }
}

/// Catalog services whose name contains any of the given fragments
/// (substring match); the whole catalog when no fragments are given.
pub fn select_services(fragments: &[String]) -> Vec<&'static Service> {
    CATALOG
        .iter()
        .filter(|service| {
            fragments.is_empty()
                || fragments
                    .iter()
                    .any(|fragment| service.name.contains(fragment.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(selected: &[&'static Service]) -> Vec<&'static str> {
        selected.iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_no_fragments_selects_full_catalog() {
        assert_eq!(select_services(&[]).len(), CATALOG.len());
    }

    #[test]
    fn test_fragment_matches_by_substring() {
        let selected = select_services(&["audit".to_string()]);
        assert_eq!(
            names(&selected),
            vec!["audit-bs-service", "audit-ds-service"]
        );
    }

    #[test]
    fn test_multiple_fragments_select_the_union() {
        let selected = select_services(&["audit".to_string(), "reporting".to_string()]);
        assert_eq!(
            names(&selected),
            vec![
                "audit-bs-service",
                "audit-ds-service",
                "reporting-bs-service",
                "reporting-ds-service",
            ]
        );
    }

    #[test]
    fn test_unknown_fragment_selects_nothing() {
        assert!(select_services(&["gateway".to_string()]).is_empty());
    }

    #[test]
    fn test_fragment_is_not_an_exact_match() {
        // "federated-bs-service-2.2" also matches the enterprise variant
        let selected = select_services(&["federated-bs-service-2.2".to_string()]);
        assert_eq!(
            names(&selected),
            vec![
                "federated-bs-service-2.2",
                "federated-bs-service-2.2-enterprise",
            ]
        );
    }

    #[test]
    fn test_mode_for_release_pinned_service() {
        let sim = CATALOG.iter().find(|s| s.name == "jwk-simulator").unwrap();
        assert_eq!(mode_for(sim, false), VersionMode::Release);

        let audit = CATALOG
            .iter()
            .find(|s| s.name == "audit-bs-service")
            .unwrap();
        assert_eq!(mode_for(audit, false), VersionMode::Snapshot);
        assert_eq!(mode_for(audit, true), VersionMode::Release);
    }
}
