//! Address record extraction for name-service generation.
//!
//! Each declared interface yields one record. The interface on the primary
//! network carries the host's short name, its fully qualified name and its
//! aliases; the others only carry the network-qualified name
//! `<host>-<network>`. A management controller yields one more record under
//! its own name.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::derive::aliases::collect_aliases;
use crate::derive::interface::resolve_primary_interface;
use crate::error::Result;
use crate::inventory::{InterfaceRecord, Inventory};

/// One IPv4 address with the names it answers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// IPv4 address
    pub ip4: String,

    /// Names, canonical first
    pub hostname: Vec<String>,

    /// Aliases; only primary-interface and controller records carry them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

impl AddressRecord {
    /// Canonical (first) name of the record
    pub fn canonical_name(&self) -> Option<&str> {
        self.hostname.first().map(String::as_str)
    }
}

fn qualified_name(hostname: &str, interface: &InterfaceRecord) -> String {
    // a null network renders the way templates render it; an empty one stays empty
    format!(
        "{}-{}",
        hostname,
        interface.network.as_deref().unwrap_or("None")
    )
}

/// Address records for every host of `inventory`.
///
/// Records come per host in inventory order, interfaces in declaration order
/// then the management controller. Any host failing primary-interface
/// resolution aborts the whole extraction.
pub fn extract_host_records(inventory: &Inventory, domain_name: &str) -> Result<Vec<AddressRecord>> {
    let mut records = Vec::new();

    for (hostname, host) in inventory {
        if let Some(interfaces) = &host.network_interfaces {
            let main_interface = resolve_primary_interface(host)?;
            let aliases = collect_aliases(host);

            for (name, interface) in interfaces {
                if *name == main_interface {
                    records.push(AddressRecord {
                        ip4: interface.ip4.clone(),
                        hostname: vec![
                            hostname.clone(),
                            format!("{}.{}", hostname, domain_name),
                            qualified_name(hostname, interface),
                        ],
                        aliases: Some(aliases.clone()),
                    });
                } else {
                    records.push(AddressRecord {
                        ip4: interface.ip4.clone(),
                        hostname: vec![qualified_name(hostname, interface)],
                        aliases: None,
                    });
                }
            }
        }

        if let Some(bmc) = &host.bmc {
            records.push(AddressRecord {
                ip4: bmc.ip4.clone(),
                hostname: vec![bmc.name.clone()],
                aliases: Some(collect_aliases(bmc)),
            });
        }
    }

    debug!(
        hosts = inventory.len(),
        records = records.len(),
        domain = domain_name,
        "extracted host records"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{HostRecord, ManagementController};

    fn node(network_naming: &str) -> HostRecord {
        HostRecord::new().with_management_networks_naming(network_naming)
    }

    #[test]
    fn test_single_primary_interface() {
        let inventory = Inventory::new().with_host(
            "node1",
            node("mgmt").with_interface("eth0", InterfaceRecord::new("mgmt1-a", "10.0.0.1")),
        );

        let records = extract_host_records(&inventory, "cluster.local").unwrap();
        assert_eq!(
            records,
            vec![AddressRecord {
                ip4: "10.0.0.1".to_string(),
                hostname: vec![
                    "node1".to_string(),
                    "node1.cluster.local".to_string(),
                    "node1-mgmt1-a".to_string(),
                ],
                aliases: Some(vec![]),
            }]
        );
        assert_eq!(records[0].canonical_name(), Some("node1"));
    }

    #[test]
    fn test_secondary_interfaces_have_no_aliases() {
        let inventory = Inventory::new().with_host(
            "c001",
            node("net")
                .with_alias("login")
                .with_interface("ib0", InterfaceRecord::new("interconnect-1", "10.20.0.1"))
                .with_interface("eth0", InterfaceRecord::new("net1-a", "10.10.0.1")),
        );

        let records = extract_host_records(&inventory, "cluster.local").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].hostname, vec!["c001-interconnect-1"]);
        assert_eq!(records[0].aliases, None);
        assert_eq!(records[1].hostname[0], "c001");
        assert_eq!(records[1].aliases, Some(vec!["login".to_string()]));
    }

    #[test]
    fn test_bmc_only_host() {
        let inventory = Inventory::new().with_host(
            "node1",
            HostRecord::new().with_bmc(ManagementController::new("node1-bmc", "10.0.1.1")),
        );

        let records = extract_host_records(&inventory, "cluster.local").unwrap();
        assert_eq!(
            records,
            vec![AddressRecord {
                ip4: "10.0.1.1".to_string(),
                hostname: vec!["node1-bmc".to_string()],
                aliases: Some(vec![]),
            }]
        );
    }

    #[test]
    fn test_unattached_interface_name() {
        let inventory = Inventory::new().with_host(
            "c001",
            node("net")
                .with_interface("eth0", InterfaceRecord::new("net1-a", "10.10.0.1"))
                .with_interface("eth1", InterfaceRecord::unattached("192.168.0.1")),
        );

        let records = extract_host_records(&inventory, "cluster.local").unwrap();
        assert_eq!(records[1].hostname, vec!["c001-None"]);
    }

    #[test]
    fn test_empty_network_name_is_kept_empty() {
        let inventory = Inventory::new().with_host(
            "c001",
            node("net")
                .with_interface("eth0", InterfaceRecord::new("net1-a", "10.10.0.1"))
                .with_interface("eth1", InterfaceRecord::new("", "192.168.0.1")),
        );

        let records = extract_host_records(&inventory, "cluster.local").unwrap();
        assert_eq!(records[0].hostname[0], "c001");
        assert_eq!(records[1].hostname, vec!["c001-"]);
    }

    #[test]
    fn test_failure_aborts_extraction() {
        let inventory = Inventory::new()
            .with_host(
                "c001",
                node("net").with_interface("eth0", InterfaceRecord::new("net1-a", "10.10.0.1")),
            )
            .with_host(
                "c002",
                node("net").with_interface("eth0", InterfaceRecord::new("other", "10.10.0.2")),
            );

        let err = extract_host_records(&inventory, "cluster.local").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_serialized_record_omits_missing_aliases() {
        let record = AddressRecord {
            ip4: "10.0.0.2".to_string(),
            hostname: vec!["c001-net1-b".to_string()],
            aliases: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"ip4": "10.0.0.2", "hostname": ["c001-net1-b"]})
        );
    }
}
