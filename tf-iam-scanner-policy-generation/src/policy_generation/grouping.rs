//! Service-level grouping of `service:Verb` action identifiers

use std::collections::BTreeMap;

use log::warn;

/// Split an action into `(service, verb)` if it contains exactly one ':'
pub(crate) fn split_action(action: &str) -> Option<(&str, &str)> {
    let (service, verb) = action.split_once(':')?;
    if verb.contains(':') {
        None
    } else {
        Some((service, verb))
    }
}

/// Collapse services contributing more than `threshold` actions into `service:*`.
///
/// Every identifier is split exactly once. If any of them is malformed the whole
/// batch is returned untouched. The result is sorted lexicographically.
pub(crate) fn collapse_by_service(actions: Vec<String>, threshold: usize) -> Vec<String> {
    let parsed: Option<Vec<(&str, &str)>> = actions.iter().map(|a| split_action(a)).collect();
    let Some(parsed) = parsed else {
        warn!("Found actions not in service:Verb form, skipping service grouping");
        return actions;
    };

    let mut by_service: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (service, verb) in parsed {
        by_service.entry(service).or_default().push(verb);
    }

    let mut grouped = Vec::with_capacity(actions.len());
    for (service, verbs) in by_service {
        if verbs.len() > threshold {
            grouped.push(format!("{}:*", service));
        } else {
            grouped.extend(verbs.into_iter().map(|verb| format!("{}:{}", service, verb)));
        }
    }

    grouped.sort();
    grouped
}

/// Partition sorted actions by service, keeping each service's actions in order.
///
/// Malformed identifiers belong to no service and are dropped.
pub(crate) fn partition_by_service(actions: &[String]) -> BTreeMap<String, Vec<String>> {
    let mut partitions: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for action in actions {
        match split_action(action) {
            Some((service, _)) => partitions
                .entry(service.to_string())
                .or_default()
                .push(action.clone()),
            None => warn!(
                "Action '{}' is not in service:Verb form and was left out of the policy",
                action
            ),
        }
    }

    partitions
}
