//! Naming-convention matching for group and network names.
//!
//! Cluster inventories encode meaning in names: `iceberg2` is a partition
//! group, `equipment_typeC` an equipment profile, `net1-a` a management
//! network of partition 1. A [`NamingConvention`] decides whether a candidate
//! string follows such a convention and extracts the variable part.
//!
//! Naming prefixes are pattern fragments, not literals: the prefix is spliced
//! verbatim in front of the convention suffix, so `ice|berg` behaves exactly
//! as an alternation would in the generated expression.

use regex::Regex;

use crate::error::{Error, Result};

/// Kind of convention a name is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConventionKind {
    /// `<prefix>[0-9]+`, e.g. `iceberg1`
    Partition,
    /// `<prefix>_<anything>`, e.g. `equipment_typeC`
    Group,
    /// `<network>-<alnum>`, e.g. `net1-a`
    Network,
}

impl ConventionKind {
    fn suffix(self) -> &'static str {
        match self {
            ConventionKind::Partition => "[0-9]+",
            ConventionKind::Group => "_.*",
            ConventionKind::Network => "-[a-zA-Z0-9]+",
        }
    }
}

impl std::fmt::Display for ConventionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConventionKind::Partition => write!(f, "partition"),
            ConventionKind::Group => write!(f, "group"),
            ConventionKind::Network => write!(f, "network"),
        }
    }
}

/// A matcher for one naming convention.
pub trait NamingConvention {
    /// The naming prefix this convention was built from.
    fn naming(&self) -> &str;

    /// Whether `candidate` follows the convention (anchored at the start).
    fn matches(&self, candidate: &str) -> bool;

    /// Remove every occurrence of the naming prefix from `candidate`.
    fn strip(&self, candidate: &str) -> String;

    /// The variable part of `candidate`, or `None` when it does not match.
    fn extract(&self, candidate: &str) -> Option<String> {
        self.matches(candidate).then(|| self.strip(candidate))
    }

    /// Keep the candidates that match, preserving their order.
    fn select<'a, I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + ?Sized + 'a,
    {
        candidates
            .into_iter()
            .filter_map(|c| {
                let c: &str = c.as_ref();
                self.matches(c).then(|| c.to_string())
            })
            .collect()
    }
}

/// Regex-backed [`NamingConvention`].
#[derive(Debug, Clone)]
pub struct RegexConvention {
    kind: ConventionKind,
    naming: String,
    matcher: Regex,
    prefix: Regex,
}

impl RegexConvention {
    /// Compile the convention `kind` for the given naming prefix.
    pub fn new(kind: ConventionKind, naming: impl Into<String>) -> Result<Self> {
        let naming = naming.into();
        let invalid = |source| Error::InvalidNaming {
            naming: naming.clone(),
            source,
        };

        let matcher = Regex::new(&format!("^{}{}", naming, kind.suffix())).map_err(invalid)?;
        let prefix = Regex::new(&naming).map_err(invalid)?;

        Ok(Self {
            kind,
            naming,
            matcher,
            prefix,
        })
    }

    /// Partition groups: `^<naming>[0-9]+`.
    pub fn partition(naming: impl Into<String>) -> Result<Self> {
        Self::new(ConventionKind::Partition, naming)
    }

    /// Equipment and master groups: `^<naming>_.*`.
    pub fn group(naming: impl Into<String>) -> Result<Self> {
        Self::new(ConventionKind::Group, naming)
    }

    /// Networks attached to a partition network: `^<network>-[a-zA-Z0-9]+`.
    pub fn network(network: impl Into<String>) -> Result<Self> {
        Self::new(ConventionKind::Network, network)
    }

    /// The convention kind.
    pub fn kind(&self) -> ConventionKind {
        self.kind
    }
}

impl NamingConvention for RegexConvention {
    fn naming(&self) -> &str {
        &self.naming
    }

    fn matches(&self, candidate: &str) -> bool {
        self.matcher.is_match(candidate)
    }

    fn strip(&self, candidate: &str) -> String {
        self.prefix.replace_all(candidate, "").into_owned()
    }
}
