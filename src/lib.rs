//! # cluster-inventory
//!
//! Derives network-identity facts from the inventory of an HPC cluster:
//! which partition (iceberg) a host belongs to, which interface carries its
//! management traffic, and the full set of DNS address records the inventory
//! implies. Template stages rendering DNS zones, DHCP reservations or hosts
//! files consume these facts.
//!
//! ## Core Concepts
//!
//! - **Inventory**: ordered mapping from hostname to [`HostRecord`]
//! - **Partition**: a group named `<iceberg_naming><n>`; a host belongs to
//!   the first one it is a member of, or to partition `1` when the cluster
//!   is not partitioned
//! - **Primary network**: the smallest network name of the host of the form
//!   `<management_networks_naming><n>-<suffix>`
//! - **Address record**: an IPv4 address with the names and aliases it
//!   answers to
//!
//! ## Data Flow
//!
//! ```text
//! Inventory ──► partition ──► partition network ──► primary network
//!                                                        │
//!                                                        ▼
//!               aliases ─────────────────────────► primary interface
//!                                                        │
//!                                                        ▼
//!                                                 address records
//! ```
//!
//! ## Quick Example
//!
//! ```rust
//! use cluster_inventory::prelude::*;
//!
//! let inventory = Inventory::new().with_host(
//!     "c001",
//!     HostRecord::new()
//!         .with_interface("eth0", InterfaceRecord::new("net1-a", "10.10.0.1")),
//! );
//!
//! let records = extract_host_records(&inventory, "cluster.local").unwrap();
//! assert_eq!(records[0].hostname, vec!["c001", "c001.cluster.local", "c001-net1-a"]);
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export commonly used items in prelude
pub mod prelude {
    //! Convenient re-exports of commonly used types and functions.

    pub use crate::config::DeriverConfig;
    pub use crate::derive::{
        collect_aliases, count_partitions, extract_host_records, list_equipment_groups,
        list_master_groups, list_partition_groups, resolve_host_partition,
        resolve_host_partition_index, resolve_host_partition_network,
        resolve_primary_interface, resolve_primary_network, AddressRecord,
    };
    pub use crate::deriver::InventoryDeriver;
    pub use crate::error::{Error, Result};
    pub use crate::inventory::{
        Aliased, HostRecord, InterfaceRecord, Inventory, ManagementController,
    };
    pub use crate::naming::{ConventionKind, NamingConvention, RegexConvention};
    pub use crate::plugins::filter::FilterRegistry;
}

pub mod config;
pub mod derive;
pub mod deriver;
pub mod error;
pub mod inventory;
pub mod naming;
pub mod plugins;

pub use deriver::InventoryDeriver;
pub use error::{Error, Result};
pub use inventory::{HostRecord, Inventory};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
