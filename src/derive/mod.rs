//! Derivations over the cluster inventory.
//!
//! Every function here is a pure read of an inventory snapshot:
//!
//! - **partition**: which partition (iceberg) a host belongs to
//! - **groups**: equipment and master group classification
//! - **interface**: primary management network and interface of a host
//! - **aliases**: DNS aliases declared on hosts and controllers
//! - **records**: flat list of address records for name services
//!
//! Later derivations build on earlier ones: the primary network depends on
//! the partition network, records depend on the primary interface.

pub mod aliases;
pub mod groups;
pub mod interface;
pub mod partition;
pub mod records;

pub use aliases::collect_aliases;
pub use groups::{list_equipment_groups, list_master_groups};
pub use interface::{resolve_primary_interface, resolve_primary_network};
pub use partition::{
    count_partitions, list_partition_groups, resolve_host_partition,
    resolve_host_partition_index, resolve_host_partition_network,
};
pub use records::{extract_host_records, AddressRecord};
