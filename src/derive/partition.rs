//! Partition (iceberg) resolution.
//!
//! Large clusters are split into partitions, each declared as an inventory
//! group named `<iceberg_naming><n>`. A host belongs to the first such group
//! it is a member of; clusters without partitions have a single implicit
//! partition numbered `1`.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::inventory::HostRecord;
use crate::naming::{NamingConvention, RegexConvention};

/// Every partition group in `groups`, in input order.
///
/// An empty result is valid: the cluster simply defines no partition.
pub fn list_partition_groups<S: AsRef<str>>(groups: &[S], naming: &str) -> Result<Vec<String>> {
    let convention = RegexConvention::partition(naming)?;
    Ok(convention.select(groups))
}

/// Number of partition groups in `groups`.
pub fn count_partitions<S: AsRef<str>>(groups: &[S], naming: &str) -> Result<usize> {
    list_partition_groups(groups, naming).map(|g| g.len())
}

/// The partition group of `host`.
pub fn resolve_host_partition(host: &HostRecord) -> Result<String> {
    if !host.icebergs_system {
        return Ok(format!("{}1", host.iceberg_naming));
    }

    let convention = RegexConvention::partition(&host.iceberg_naming)?;
    match host.group_names.iter().find(|g| convention.matches(g)) {
        Some(group) => {
            trace!(partition = %group, "resolved host partition");
            Ok(group.clone())
        }
        None => {
            debug!(
                naming = %host.iceberg_naming,
                groups = ?host.group_names,
                "no partition group for host"
            );
            Err(Error::groups_not_found(
                "Could not find any iceberg definition for host.",
                host.iceberg_naming.as_str(),
                &host.group_names,
            ))
        }
    }
}

/// The partition number of `host`, as a string (`"2"` for `iceberg2`).
pub fn resolve_host_partition_index(host: &HostRecord) -> Result<String> {
    let partition = resolve_host_partition(host)?;
    let convention = RegexConvention::partition(&host.iceberg_naming)?;
    Ok(convention.strip(&partition))
}

/// Name of the management network of the partition of `host`.
pub fn resolve_host_partition_network(host: &HostRecord) -> Result<String> {
    let index = resolve_host_partition_index(host)?;
    Ok(format!("{}{}", host.management_networks_naming, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partitioned_host(groups: &[&str]) -> HostRecord {
        groups
            .iter()
            .fold(HostRecord::new().with_icebergs("iceberg"), |h, g| h.with_group(*g))
    }

    #[test]
    fn test_list_partition_groups() {
        let groups = ["all", "iceberg2", "mg_computes", "iceberg1", "iceberg"];
        assert_eq!(
            list_partition_groups(&groups, "iceberg").unwrap(),
            vec!["iceberg2", "iceberg1"]
        );
        assert_eq!(count_partitions(&groups, "iceberg").unwrap(), 2);
    }

    #[test]
    fn test_list_partition_groups_empty_is_valid() {
        let groups = ["all", "mg_computes"];
        assert!(list_partition_groups(&groups, "iceberg").unwrap().is_empty());
        assert_eq!(count_partitions(&groups, "iceberg").unwrap(), 0);
        let none: [&str; 0] = [];
        assert_eq!(count_partitions(&none, "iceberg").unwrap(), 0);
    }

    #[test]
    fn test_partition_without_icebergs_system() {
        let host = HostRecord::new().with_group("iceberg4");
        assert_eq!(resolve_host_partition(&host).unwrap(), "iceberg1");
        assert_eq!(resolve_host_partition_index(&host).unwrap(), "1");
        assert_eq!(resolve_host_partition_network(&host).unwrap(), "net1");
    }

    #[test]
    fn test_partition_first_match_wins() {
        let host = partitioned_host(&["mg_computes", "iceberg3", "iceberg1"]);
        assert_eq!(resolve_host_partition(&host).unwrap(), "iceberg3");
        assert_eq!(resolve_host_partition_index(&host).unwrap(), "3");
        assert_eq!(resolve_host_partition_network(&host).unwrap(), "net3");
    }

    #[test]
    fn test_partition_not_found() {
        let host = partitioned_host(&["mg_computes", "equipment_typeC"]);
        let err = resolve_host_partition(&host).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Could not find any iceberg definition for host.");
        assert_eq!(err.naming(), Some("iceberg"));
        assert!(resolve_host_partition_network(&host).is_err());
    }

    #[test]
    fn test_partition_index_strips_every_occurrence() {
        let host = HostRecord::new().with_icebergs("ib").with_group("ib12ib");
        assert_eq!(resolve_host_partition(&host).unwrap(), "ib12ib");
        assert_eq!(resolve_host_partition_index(&host).unwrap(), "12");
    }

    #[test]
    fn test_custom_network_naming() {
        let host = partitioned_host(&["iceberg2"]).with_management_networks_naming("adm");
        assert_eq!(resolve_host_partition_network(&host).unwrap(), "adm2");
    }
}
