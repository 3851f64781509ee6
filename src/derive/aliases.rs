//! Alias collection for hosts and management controllers.

use crate::inventory::Aliased;

/// Global aliases followed by local aliases, in declaration order.
pub fn collect_aliases(record: &impl Aliased) -> Vec<String> {
    record
        .global_alias()
        .into_iter()
        .chain(record.alias())
        .flatten()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{HostRecord, ManagementController};

    #[test]
    fn test_no_aliases() {
        assert!(collect_aliases(&HostRecord::new()).is_empty());
        assert!(collect_aliases(&ManagementController::new("c001-bmc", "10.0.1.1")).is_empty());
    }

    #[test]
    fn test_global_before_local() {
        let host = HostRecord::new()
            .with_alias("login")
            .with_global_alias("gateway")
            .with_alias("frontend")
            .with_global_alias("proxy");
        assert_eq!(
            collect_aliases(&host),
            vec!["gateway", "proxy", "login", "frontend"]
        );
    }

    #[test]
    fn test_bmc_aliases() {
        let bmc = ManagementController::new("c001-bmc", "10.0.1.1").with_alias("c001-ipmi");
        assert_eq!(collect_aliases(&bmc), vec!["c001-ipmi"]);
    }
}
