//! Configured entry point over the derivations.
//!
//! [`InventoryDeriver`] carries the cluster-wide naming conventions and DNS
//! domain so callers do not have to thread them through every call. It holds
//! no other state and is cheap to clone.

use crate::config::DeriverConfig;
use crate::derive::{self, AddressRecord};
use crate::error::Result;
use crate::inventory::{HostRecord, Inventory};

/// Derives network-identity facts from a cluster inventory.
#[derive(Debug, Clone, Default)]
pub struct InventoryDeriver {
    config: DeriverConfig,
}

impl InventoryDeriver {
    /// Create a deriver from a configuration
    pub fn new(config: DeriverConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &DeriverConfig {
        &self.config
    }

    /// An empty host record following the cluster naming conventions
    pub fn new_host(&self) -> HostRecord {
        HostRecord::new()
            .with_management_networks_naming(self.config.management_networks_naming.as_str())
            .with_partition_naming(self.config.iceberg_naming.as_str())
    }

    /// Partition groups among `groups`, in input order
    pub fn partition_groups<S: AsRef<str>>(&self, groups: &[S]) -> Result<Vec<String>> {
        derive::list_partition_groups(groups, &self.config.iceberg_naming)
    }

    /// Number of partition groups among `groups`
    pub fn partition_count<S: AsRef<str>>(&self, groups: &[S]) -> Result<usize> {
        derive::count_partitions(groups, &self.config.iceberg_naming)
    }

    /// Equipment groups among `groups`, sorted and unique
    pub fn equipment_groups<S: AsRef<str>>(&self, groups: &[S]) -> Result<Vec<String>> {
        derive::list_equipment_groups(groups, &self.config.equipment_naming)
    }

    /// Master groups among `groups`, sorted and unique
    pub fn master_groups<S: AsRef<str>>(&self, groups: &[S]) -> Result<Vec<String>> {
        derive::list_master_groups(groups, &self.config.master_groups_naming)
    }

    /// Partition group of `host`
    pub fn partition(&self, host: &HostRecord) -> Result<String> {
        derive::resolve_host_partition(host)
    }

    /// Partition number of `host`
    pub fn partition_index(&self, host: &HostRecord) -> Result<String> {
        derive::resolve_host_partition_index(host)
    }

    /// Management network of the partition of `host`
    pub fn partition_network(&self, host: &HostRecord) -> Result<String> {
        derive::resolve_host_partition_network(host)
    }

    /// Primary network of `host`
    pub fn primary_network(&self, host: &HostRecord) -> Result<String> {
        derive::resolve_primary_network(host)
    }

    /// Primary interface of `host`
    pub fn primary_interface(&self, host: &HostRecord) -> Result<String> {
        derive::resolve_primary_interface(host)
    }

    /// Address records of the whole inventory under the configured domain
    pub fn host_records(&self, inventory: &Inventory) -> Result<Vec<AddressRecord>> {
        derive::extract_host_records(inventory, &self.config.domain_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InterfaceRecord;

    fn deriver() -> InventoryDeriver {
        InventoryDeriver::new(DeriverConfig {
            domain_name: "hpc.example".to_string(),
            equipment_naming: "eq".to_string(),
            master_groups_naming: "role".to_string(),
            iceberg_naming: "part".to_string(),
            management_networks_naming: "adm".to_string(),
        })
    }

    #[test]
    fn test_group_listing_uses_config() {
        let d = deriver();
        let groups = ["part1", "part2", "eq_gpu", "role_compute", "all"];
        assert_eq!(d.partition_groups(&groups).unwrap(), vec!["part1", "part2"]);
        assert_eq!(d.partition_count(&groups).unwrap(), 2);
        assert_eq!(d.equipment_groups(&groups).unwrap(), vec!["eq_gpu"]);
        assert_eq!(d.master_groups(&groups).unwrap(), vec!["role_compute"]);
    }

    #[test]
    fn test_new_host_inherits_naming() {
        let d = deriver();
        let host = d
            .new_host()
            .with_interface("eth0", InterfaceRecord::new("adm1-a", "10.0.0.1"));
        assert_eq!(host.iceberg_naming, "part");
        assert!(!host.icebergs_system);
        assert_eq!(d.partition(&host).unwrap(), "part1");
        assert_eq!(d.partition_index(&host).unwrap(), "1");
        assert_eq!(d.partition_network(&host).unwrap(), "adm1");
        assert_eq!(d.primary_network(&host).unwrap(), "adm1-a");
        assert_eq!(d.primary_interface(&host).unwrap(), "eth0");
    }

    #[test]
    fn test_host_records_use_configured_domain() {
        let d = deriver();
        let inventory = Inventory::new().with_host(
            "c001",
            d.new_host()
                .with_interface("eth0", InterfaceRecord::new("adm1-a", "10.0.0.1")),
        );
        let records = d.host_records(&inventory).unwrap();
        assert_eq!(records[0].hostname[1], "c001.hpc.example");
    }
}
