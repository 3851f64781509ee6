//! Primary (management) network and interface selection.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::derive::partition::resolve_host_partition_network;
use crate::error::{Error, Result};
use crate::inventory::HostRecord;
use crate::naming::{NamingConvention, RegexConvention};

/// The management network of `host`.
///
/// Candidates are the networks of the host's interfaces that belong to its
/// partition network (`net1` accepts `net1-a`, `net1-b`...). The
/// lexicographically smallest distinct candidate wins.
pub fn resolve_primary_network(host: &HostRecord) -> Result<String> {
    let partition_network = resolve_host_partition_network(host)?;
    let convention = RegexConvention::network(partition_network.as_str())?;

    let candidates: BTreeSet<&str> = host
        .interfaces()
        .filter_map(|(_, itf)| itf.network())
        .filter(|network| convention.matches(network))
        .collect();

    match candidates.into_iter().next() {
        Some(network) => {
            trace!(network, "resolved primary network");
            Ok(network.to_string())
        }
        None => {
            debug!(partition_network = %partition_network, "no primary network for host");
            Err(Error::NotFound {
                message: "Could not find the main network for host.".to_string(),
                naming: Some(partition_network),
                groups: Vec::new(),
            })
        }
    }
}

/// Name of the interface attached to the primary network of `host`.
///
/// When several interfaces sit on the primary network, their sorted names are
/// concatenated without separator (`eth1` and `eth3` give `eth1eth3`).
/// Templates compare this value against single interface names, so the
/// joined form is kept as is.
pub fn resolve_primary_interface(host: &HostRecord) -> Result<String> {
    let not_found = || Error::not_found("Could not find the main network interface for host.");

    // the primary network is only looked up once an attached interface exists
    if host.interfaces().all(|(_, itf)| itf.network().is_none()) {
        return Err(not_found());
    }

    let primary_network = resolve_primary_network(host)?;
    let names: BTreeSet<&str> = host
        .interfaces()
        .filter(|(_, itf)| itf.network() == Some(primary_network.as_str()))
        .map(|(name, _)| name.as_str())
        .collect();

    if names.is_empty() {
        return Err(not_found());
    }

    let joined = names.into_iter().collect::<String>().trim().to_string();
    trace!(interface = %joined, network = %primary_network, "resolved primary interface");
    Ok(joined)
}
