//! Plugin System for cluster-inventory
//!
//! Plugins expose the derivations to external engines. The only category is
//! filter plugins: Jinja2-compatible filters registered with a minijinja
//! environment. See the [`filter`] module for available filters.
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use cluster_inventory::plugins::filter::FilterRegistry;
//! use minijinja::Environment;
//!
//! let mut env = Environment::new();
//! FilterRegistry::register_all(&mut env);
//! ```

pub mod filter;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::filter::FilterRegistry;
}
