//! Shared test utilities and fixtures for the cluster-inventory test suite.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;

use cluster_inventory::derive::AddressRecord;
use cluster_inventory::inventory::Inventory;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING: Once = Once::new();

/// Install a test subscriber once; `RUST_LOG=debug` shows derivation traces.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer())
            .with(env_filter)
            .try_init();
    });
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("cluster")
}

/// The two-partition cluster of `tests/fixtures/cluster/inventory.yml`
pub fn load_cluster_inventory() -> Inventory {
    let content = std::fs::read_to_string(fixtures_dir().join("inventory.yml")).unwrap();
    serde_yaml::from_str(&content).unwrap()
}

/// Every group name used in the inventory, first occurrence order
pub fn all_group_names(inventory: &Inventory) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for (_, host) in inventory.hosts() {
        for group in &host.group_names {
            if !groups.contains(group) {
                groups.push(group.clone());
            }
        }
    }
    groups
}

pub fn record(ip4: &str, hostname: &[&str], aliases: Option<&[&str]>) -> AddressRecord {
    AddressRecord {
        ip4: ip4.to_string(),
        hostname: hostname.iter().map(|s| s.to_string()).collect(),
        aliases: aliases.map(|a| a.iter().map(|s| s.to_string()).collect()),
    }
}
