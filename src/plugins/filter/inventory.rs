//! Inventory derivation filters for Jinja2 templates.
//!
//! These filters expose the derivations to templates rendering DNS zones,
//! DHCP reservations and similar files. Host and inventory arguments are the
//! template's own values (usually `hostvars[inventory_hostname]` and
//! `hostvars`); they are read through serde.
//!
//! # Available Filters
//!
//! - `icebergs_groups_list`: partition groups among a group list
//! - `number_of_icebergs`: number of partition groups
//! - `current_iceberg`: partition group of a host
//! - `current_iceberg_number`: partition number of a host
//! - `current_iceberg_network`: management network of a host's partition
//! - `equipment_groups_list`: equipment groups, sorted and unique
//! - `master_groups_list`: master groups, sorted and unique
//! - `node_main_network`: primary network of a host
//! - `node_main_network_interface`: primary interface of a host
//! - `get_hosts` / `extract_hosts`: address records of an inventory
//!
//! # Examples
//!
//! ```jinja2
//! {{ groups | icebergs_groups_list(iceberg_naming) }}
//! {{ hostvars[inventory_hostname] | current_iceberg }}
//! {% for record in hostvars | get_hosts(domain_name) %}
//! {{ record.ip4 }} {{ record.hostname | join(' ') }}
//! {% endfor %}
//! ```
//!
//! Derivation failures are template errors; a filter never falls back to a
//! default value.

use minijinja::{Environment, Error, ErrorKind, Value};
use serde::de::DeserializeOwned;

use crate::derive;
use crate::inventory::{HostRecord, Inventory};

/// Register all inventory filters with the given environment.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("icebergs_groups_list", icebergs_groups_list);
    env.add_filter("number_of_icebergs", number_of_icebergs);
    env.add_filter("current_iceberg", current_iceberg);
    env.add_filter("current_iceberg_number", current_iceberg_number);
    env.add_filter("current_iceberg_network", current_iceberg_network);
    env.add_filter("equipment_groups_list", equipment_groups_list);
    env.add_filter("master_groups_list", master_groups_list);
    env.add_filter("node_main_network", node_main_network);
    env.add_filter("node_main_network_interface", node_main_network_interface);
    env.add_filter("get_hosts", get_hosts);
    env.add_filter("extract_hosts", get_hosts);
}

fn derive_error(err: crate::error::Error) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string()).with_source(err)
}

/// Read a template value into one of the inventory types.
fn from_value<T: DeserializeOwned>(value: &Value, what: &str) -> Result<T, Error> {
    serde_json::to_value(value)
        .and_then(serde_json::from_value)
        .map_err(|e| {
            Error::new(
                ErrorKind::InvalidOperation,
                format!("cannot read {} from template value", what),
            )
            .with_source(e)
        })
}

fn host_from_value(host: &Value) -> Result<HostRecord, Error> {
    from_value(host, "host record")
}

/// Partition groups among `groups`, in input order.
fn icebergs_groups_list(groups: Vec<String>, iceberg_naming: String) -> Result<Vec<String>, Error> {
    derive::list_partition_groups(&groups, &iceberg_naming).map_err(derive_error)
}

/// Number of partition groups among `groups`.
fn number_of_icebergs(groups: Vec<String>, iceberg_naming: String) -> Result<usize, Error> {
    derive::count_partitions(&groups, &iceberg_naming).map_err(derive_error)
}

fn current_iceberg(host: Value) -> Result<String, Error> {
    derive::resolve_host_partition(&host_from_value(&host)?).map_err(derive_error)
}

fn current_iceberg_number(host: Value) -> Result<String, Error> {
    derive::resolve_host_partition_index(&host_from_value(&host)?).map_err(derive_error)
}

fn current_iceberg_network(host: Value) -> Result<String, Error> {
    derive::resolve_host_partition_network(&host_from_value(&host)?).map_err(derive_error)
}

fn equipment_groups_list(groups: Vec<String>, equipment_naming: String) -> Result<Vec<String>, Error> {
    derive::list_equipment_groups(&groups, &equipment_naming).map_err(derive_error)
}

fn master_groups_list(groups: Vec<String>, master_groups_naming: String) -> Result<Vec<String>, Error> {
    derive::list_master_groups(&groups, &master_groups_naming).map_err(derive_error)
}

fn node_main_network(host: Value) -> Result<String, Error> {
    derive::resolve_primary_network(&host_from_value(&host)?).map_err(derive_error)
}

fn node_main_network_interface(host: Value) -> Result<String, Error> {
    derive::resolve_primary_interface(&host_from_value(&host)?).map_err(derive_error)
}

/// Address records of every host in `inventory`.
///
/// Records without aliases have no `aliases` attribute, so templates can
/// test `record.aliases is defined`.
fn get_hosts(inventory: Value, domain_name: String) -> Result<Value, Error> {
    let inventory: Inventory = from_value(&inventory, "inventory")?;
    let records = derive::extract_host_records(&inventory, &domain_name).map_err(derive_error)?;
    Ok(Value::from_serialize(&records))
}
