//! Catalog listing command

use anyhow::Result;
use colored::Colorize;

use crate::config::catalog::CATALOG;

/// Print the service catalog with per-entry deployment flags
pub fn list() -> Result<()> {
    println!("{}", "Service catalog:".bold());
    println!();

    for service in CATALOG {
        let mut flags = Vec::new();
        if service.test_only {
            flags.push("test-only");
        }
        if service.snapshot_only {
            flags.push("snapshot-only");
        }
        if service.release_pinned {
            flags.push("release-pinned");
        }

        if flags.is_empty() {
            println!("  {}", service.artifact());
        } else {
            println!(
                "  {:<42} {}",
                service.artifact(),
                flags.join(", ").dimmed()
            );
        }
    }

    println!();
    println!("{} services", CATALOG.len());

    Ok(())
}
