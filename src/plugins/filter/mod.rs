//! Jinja2-compatible filter plugins for cluster-inventory.
//!
//! Configuration-generation templates (DNS zones, DHCP reservations, hosts
//! files) call the inventory derivations through these filters. Filter names
//! match the ones Ansible roles already use, so templates port unchanged.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cluster_inventory::plugins::filter::FilterRegistry;
//! use minijinja::Environment;
//!
//! let mut env = Environment::new();
//! FilterRegistry::register_all(&mut env);
//! ```

pub mod inventory;

use minijinja::Environment;

/// Registry for managing and registering filter plugins.
pub struct FilterRegistry;

impl FilterRegistry {
    /// Register all available filters with the given environment.
    pub fn register_all(env: &mut Environment<'static>) {
        inventory::register_filters(env);
    }
}
