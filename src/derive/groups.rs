//! Equipment and master group classification.
//!
//! Unlike partitions, a cluster must declare equipment profiles and master
//! groups: finding none is an error.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::naming::{NamingConvention, RegexConvention};

fn sorted_groups<S: AsRef<str>>(groups: &[S], naming: &str, what: &str) -> Result<Vec<String>> {
    let convention = RegexConvention::group(naming)?;
    let found: BTreeSet<String> = convention.select(groups).into_iter().collect();

    if found.is_empty() {
        let names: Vec<&str> = groups.iter().map(|g| g.as_ref()).collect();
        debug!(naming, ?names, "no {} groups", what);
        return Err(Error::groups_not_found(
            format!(
                "Could not find any groups that match {} naming. (groups={:?})",
                what, names
            ),
            naming,
            groups,
        ));
    }

    Ok(found.into_iter().collect())
}

/// Equipment groups (`<naming>_*`), deduplicated and sorted.
pub fn list_equipment_groups<S: AsRef<str>>(groups: &[S], naming: &str) -> Result<Vec<String>> {
    sorted_groups(groups, naming, "equipment")
}

/// Master groups (`<naming>_*`), deduplicated and sorted.
pub fn list_master_groups<S: AsRef<str>>(groups: &[S], naming: &str) -> Result<Vec<String>> {
    sorted_groups(groups, naming, "master groups")
}
