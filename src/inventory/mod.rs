//! Inventory model for cluster-inventory.
//!
//! The inventory is an already-parsed snapshot: an ordered mapping from
//! hostname to [`HostRecord`]. Loading it from Ansible sources is the
//! caller's business; every type here deserializes with serde, so a YAML or
//! JSON document of the shape `{hostname: {group_names: [...], ...}}` can be
//! read directly.

pub mod host;

pub use host::{Aliased, HostRecord, InterfaceRecord, ManagementController};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The hosts of a cluster, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    hosts: IndexMap<String, HostRecord>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a host; a repeated name replaces the earlier record in place
    pub fn with_host(mut self, name: impl Into<String>, host: HostRecord) -> Self {
        self.hosts.insert(name.into(), host);
        self
    }

    /// Get a host by name
    pub fn get_host(&self, name: &str) -> Option<&HostRecord> {
        self.hosts.get(name)
    }

    /// Iterate over hosts in declaration order
    pub fn hosts(&self) -> impl Iterator<Item = (&String, &HostRecord)> {
        self.hosts.iter()
    }

    /// Host names in declaration order
    pub fn host_names(&self) -> impl Iterator<Item = &str> {
        self.hosts.keys().map(String::as_str)
    }

    /// Number of hosts
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// Whether the inventory holds no host
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl From<IndexMap<String, HostRecord>> for Inventory {
    fn from(hosts: IndexMap<String, HostRecord>) -> Self {
        Self { hosts }
    }
}

impl FromIterator<(String, HostRecord)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (String, HostRecord)>>(iter: I) -> Self {
        Self {
            hosts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = (&'a String, &'a HostRecord);
    type IntoIter = indexmap::map::Iter<'a, String, HostRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}
