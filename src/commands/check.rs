//! Prerequisite and credential checks

use anyhow::Result;
use colored::Colorize;
use std::env;

/// Verify the oc binary is reachable and report which environment
/// credentials are present. Secrets are never printed.
pub fn check() -> Result<()> {
    crate::log_info!("Checking prerequisites...");

    let mut ok = true;

    let oc_path = env::var("OC_PATH").unwrap_or_else(|_| "oc".to_string());
    match which::which(&oc_path) {
        Ok(resolved) => println!("  {} oc binary: {}", "✓".green(), resolved.display()),
        Err(_) => {
            println!("  {} oc binary '{}' not found", "✗".red(), oc_path);
            ok = false;
        }
    }

    for variable in ["OC_USERNAME", "OC_PASSWORD", "NEXUS_USER", "NEXUS_PASSWORD"] {
        if env::var(variable).is_ok() {
            println!("  {} {} is set", "✓".green(), variable);
        } else {
            println!("  {} {} is not set", "✗".red(), variable);
            ok = false;
        }
    }

    if !ok {
        crate::log_error!("Some prerequisites are missing");
        std::process::exit(1);
    }

    println!();
    println!("{}", "All prerequisites satisfied".green());
    Ok(())
}
