//! Host definition for the cluster inventory.
//!
//! This module provides the `HostRecord` structure describing one node as the
//! inventory declares it: group memberships, partition naming settings,
//! network interfaces and an optional baseboard management controller.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A network interface attached to a logical network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRecord {
    /// Logical network name (e.g. `net1-a`), absent for unmanaged links
    #[serde(default)]
    pub network: Option<String>,

    /// IPv4 address, empty when the inventory leaves it out
    #[serde(default)]
    pub ip4: String,
}

impl InterfaceRecord {
    /// Create an interface attached to `network`
    pub fn new(network: impl Into<String>, ip4: impl Into<String>) -> Self {
        Self {
            network: Some(network.into()),
            ip4: ip4.into(),
        }
    }

    /// Create an interface attached to no network
    pub fn unattached(ip4: impl Into<String>) -> Self {
        Self {
            network: None,
            ip4: ip4.into(),
        }
    }

    /// The attached network; an empty name counts as no network.
    pub fn network(&self) -> Option<&str> {
        self.network.as_deref().filter(|n| !n.is_empty())
    }
}

/// Baseboard management controller of a host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementController {
    /// DNS name of the controller
    pub name: String,

    /// IPv4 address
    pub ip4: String,

    /// Aliases valid in every partition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_alias: Option<Vec<String>>,

    /// Aliases local to the partition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,
}

impl ManagementController {
    /// Create a controller without aliases
    pub fn new(name: impl Into<String>, ip4: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip4: ip4.into(),
            global_alias: None,
            alias: None,
        }
    }

    /// Add a partition-local alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias.get_or_insert_with(Vec::new).push(alias.into());
        self
    }

    /// Add a global alias
    pub fn with_global_alias(mut self, alias: impl Into<String>) -> Self {
        self.global_alias
            .get_or_insert_with(Vec::new)
            .push(alias.into());
        self
    }
}

/// Records that may declare DNS aliases.
pub trait Aliased {
    /// Aliases valid in every partition, if declared
    fn global_alias(&self) -> Option<&[String]>;

    /// Partition-local aliases, if declared
    fn alias(&self) -> Option<&[String]>;
}

impl Aliased for ManagementController {
    fn global_alias(&self) -> Option<&[String]> {
        self.global_alias.as_deref()
    }

    fn alias(&self) -> Option<&[String]> {
        self.alias.as_deref()
    }
}

fn default_iceberg_naming() -> String {
    "iceberg".to_string()
}

fn default_management_networks_naming() -> String {
    "net".to_string()
}

/// A host as declared in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    /// Groups this host belongs to, in declaration order
    #[serde(default)]
    pub group_names: Vec<String>,

    /// Whether the cluster is split into several partitions
    #[serde(default)]
    pub icebergs_system: bool,

    /// Prefix of partition group names (`iceberg` for `iceberg1`, `iceberg2`...)
    #[serde(default = "default_iceberg_naming")]
    pub iceberg_naming: String,

    /// Prefix of per-partition management network names
    #[serde(default = "default_management_networks_naming")]
    pub management_networks_naming: String,

    /// Network interfaces by name, in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<IndexMap<String, InterfaceRecord>>,

    /// Management controller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmc: Option<ManagementController>,

    /// Aliases valid in every partition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_alias: Option<Vec<String>>,

    /// Partition-local aliases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,
}

impl Default for HostRecord {
    fn default() -> Self {
        Self {
            group_names: Vec::new(),
            icebergs_system: false,
            iceberg_naming: default_iceberg_naming(),
            management_networks_naming: default_management_networks_naming(),
            network_interfaces: None,
            bmc: None,
            global_alias: None,
            alias: None,
        }
    }
}

impl HostRecord {
    /// Create a host with default naming and no interfaces
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group membership
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group_names.push(group.into());
        self
    }

    /// Enable partitions with the given partition naming prefix
    pub fn with_icebergs(mut self, iceberg_naming: impl Into<String>) -> Self {
        self.icebergs_system = true;
        self.iceberg_naming = iceberg_naming.into();
        self
    }

    /// Set the partition naming prefix without enabling partitions
    pub fn with_partition_naming(mut self, iceberg_naming: impl Into<String>) -> Self {
        self.iceberg_naming = iceberg_naming.into();
        self
    }

    /// Set the management network naming prefix
    pub fn with_management_networks_naming(mut self, naming: impl Into<String>) -> Self {
        self.management_networks_naming = naming.into();
        self
    }

    /// Add an interface; a repeated name replaces the earlier definition in place
    pub fn with_interface(mut self, name: impl Into<String>, interface: InterfaceRecord) -> Self {
        self.network_interfaces
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), interface);
        self
    }

    /// Declare an empty interface mapping
    pub fn with_no_interfaces(mut self) -> Self {
        self.network_interfaces = Some(IndexMap::new());
        self
    }

    /// Attach a management controller
    pub fn with_bmc(mut self, bmc: ManagementController) -> Self {
        self.bmc = Some(bmc);
        self
    }

    /// Add a partition-local alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias.get_or_insert_with(Vec::new).push(alias.into());
        self
    }

    /// Add a global alias
    pub fn with_global_alias(mut self, alias: impl Into<String>) -> Self {
        self.global_alias
            .get_or_insert_with(Vec::new)
            .push(alias.into());
        self
    }

    /// Iterate over declared interfaces, empty when none are declared
    pub fn interfaces(&self) -> impl Iterator<Item = (&String, &InterfaceRecord)> {
        self.network_interfaces.iter().flat_map(|m| m.iter())
    }

    /// Check if host belongs to a specific group
    pub fn in_group(&self, group: &str) -> bool {
        self.group_names.iter().any(|g| g == group)
    }
}

impl Aliased for HostRecord {
    fn global_alias(&self) -> Option<&[String]> {
        self.global_alias.as_deref()
    }

    fn alias(&self) -> Option<&[String]> {
        self.alias.as_deref()
    }
}
