//! Static service catalog and target namespaces

use std::fmt;
use std::str::FromStr;

/// A deployable service and its deployment attributes.
///
/// The catalog is fixed at build time; entries are never created or
/// mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,

    /// Artifact name prefix in the registry (empty for unprefixed images)
    pub prefix: &'static str,

    /// Only deployable into the test namespace
    pub test_only: bool,

    /// Has no release builds; excluded from release deployments
    pub snapshot_only: bool,

    /// Always resolves its latest release, even in snapshot mode
    pub release_pinned: bool,
}

impl Service {
    /// A standard platform service with the `hcp-` artifact prefix
    const fn hcp(name: &'static str) -> Self {
        Self {
            name,
            prefix: "hcp-",
            test_only: false,
            snapshot_only: false,
            release_pinned: false,
        }
    }

    /// Full artifact name as it appears in the registry
    pub fn artifact(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }

    /// Image reference for a given version tag
    pub fn image_ref(&self, version: &str) -> String {
        format!("{}:{}", self.artifact(), version)
    }

    /// Whether this service may be deployed into `namespace` under the
    /// given release mode.
    ///
    /// A service that is both test-only and snapshot-only is excluded from
    /// release deployments even in the test namespace.
    pub fn is_deployable(&self, namespace: Namespace, release: bool) -> bool {
        if namespace != Namespace::Test {
            if self.test_only {
                return false;
            }
        } else if release && self.snapshot_only {
            return false;
        }
        true
    }
}

/// Every service this tool knows how to deploy.
pub const CATALOG: &[Service] = &[
    Service::hcp("audit-bs-service"),
    Service::hcp("audit-ds-service"),
    Service::hcp("content-bs-service"),
    Service::hcp("content-ds-service"),
    Service::hcp("federated-bs-service-1.6"),
    Service::hcp("federated-bs-service-2.1"),
    Service::hcp("federated-bs-service-2.2"),
    Service::hcp("federated-bs-service-2.2-enterprise"),
    Service::hcp("reporting-bs-service"),
    Service::hcp("reporting-ds-service"),
    // The simulator only exists as snapshot builds in the test
    // environment, but its image is published as a release artifact.
    Service {
        name: "jwk-simulator",
        prefix: "",
        test_only: true,
        snapshot_only: true,
        release_pinned: true,
    },
];

/// Target deployment environment, mapped to a fixed cluster namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Test,
    Acceptance,
    Production,
}

impl Namespace {
    /// Cluster namespace identifier, as passed to `oc ... -n`
    pub fn cluster_name(&self) -> &'static str {
        match self {
            Namespace::Test => "bosa-dt-test-hcp-fedapi",
            Namespace::Acceptance => "bosa-dt-acc-hcp-fedapi",
            Namespace::Production => "bosa-dt-prod-hcp-fedapi",
        }
    }

    /// Short environment token used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Test => "ta",
            Namespace::Acceptance => "int",
            Namespace::Production => "prod",
        }
    }
}

impl FromStr for Namespace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ta" => Ok(Namespace::Test),
            "int" => Ok(Namespace::Acceptance),
            "prod" => Ok(Namespace::Production),
            other => Err(format!(
                "unknown namespace '{}' (expected ta, int or prod)",
                other
            )),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_NAMESPACES: [Namespace; 3] = [
        Namespace::Test,
        Namespace::Acceptance,
        Namespace::Production,
    ];

    #[test]
    fn test_catalog_names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_artifact_includes_prefix() {
        let audit = CATALOG
            .iter()
            .find(|s| s.name == "audit-bs-service")
            .unwrap();
        assert_eq!(audit.artifact(), "hcp-audit-bs-service");
        assert_eq!(
            audit.image_ref("2.0.0"),
            "hcp-audit-bs-service:2.0.0"
        );
    }

    #[test]
    fn test_simulator_is_unprefixed() {
        let sim = CATALOG.iter().find(|s| s.name == "jwk-simulator").unwrap();
        assert_eq!(sim.artifact(), "jwk-simulator");
        assert!(sim.test_only);
        assert!(sim.snapshot_only);
        assert!(sim.release_pinned);
    }

    #[test]
    fn test_test_only_services_never_deploy_elsewhere() {
        for service in CATALOG.iter().filter(|s| s.test_only) {
            for release in [false, true] {
                assert!(!service.is_deployable(Namespace::Acceptance, release));
                assert!(!service.is_deployable(Namespace::Production, release));
            }
        }
    }

    #[test]
    fn test_snapshot_only_services_never_release_in_test() {
        for service in CATALOG.iter().filter(|s| s.snapshot_only) {
            assert!(!service.is_deployable(Namespace::Test, true));
        }
    }

    #[test]
    fn test_unflagged_services_always_deploy() {
        for service in CATALOG
            .iter()
            .filter(|s| !s.test_only && !s.snapshot_only)
        {
            for namespace in ALL_NAMESPACES {
                for release in [false, true] {
                    assert!(service.is_deployable(namespace, release));
                }
            }
        }
    }

    #[test]
    fn test_snapshot_only_service_deploys_in_test_snapshot_mode() {
        let sim = CATALOG.iter().find(|s| s.name == "jwk-simulator").unwrap();
        assert!(sim.is_deployable(Namespace::Test, false));
    }

    #[test]
    fn test_namespace_parsing() {
        assert_eq!("ta".parse::<Namespace>().unwrap(), Namespace::Test);
        assert_eq!("int".parse::<Namespace>().unwrap(), Namespace::Acceptance);
        assert_eq!("prod".parse::<Namespace>().unwrap(), Namespace::Production);
        assert!("staging".parse::<Namespace>().is_err());
    }

    #[test]
    fn test_namespace_cluster_names() {
        assert_eq!(Namespace::Test.cluster_name(), "bosa-dt-test-hcp-fedapi");
        assert_eq!(
            Namespace::Acceptance.cluster_name(),
            "bosa-dt-acc-hcp-fedapi"
        );
        assert_eq!(
            Namespace::Production.cluster_name(),
            "bosa-dt-prod-hcp-fedapi"
        );
    }
}
