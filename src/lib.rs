//! hcp-deploy - import and tag HCP service images on OpenShift
//!
//! Resolves the newest release or snapshot version of each catalog service
//! from Nexus, then imports the image into a target cluster namespace and
//! re-tags it as `latest`.

pub mod commands;
pub mod config;
pub mod nexus;
pub mod oc;
pub mod utils;
