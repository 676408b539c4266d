use tracing::debug;

use super::{AttributeValue, ConditioningEntry, ConditioningMap};
use crate::models::AuxiliaryModelRef;

/// Model references stored under `key` in one channel, in entry order.
/// Lists are flattened; duplicates are kept.
///
/// # Panics
///
/// If an entry stores something other than model references under `key`.
pub fn models_from_cond(
    entries: &[ConditioningEntry],
    key: &str,
) -> Vec<AuxiliaryModelRef> {
    let mut models = Vec::new();
    for entry in entries {
        match entry.get(key) {
            None => {},
            Some(AttributeValue::Model(model)) => models.push(model.clone()),
            Some(AttributeValue::Models(list)) => {
                models.extend(list.iter().cloned())
            },
            Some(other) => panic!(
                "conditioning attribute {:?} must hold model references, found {:?}",
                key, other
            ),
        }
    }
    models
}

/// Model references stored under `key` across every channel, channels in map
/// order and entries in sequence order.
pub fn collect_models(
    conds: &ConditioningMap,
    key: &str,
) -> Vec<AuxiliaryModelRef> {
    let models: Vec<_> = conds
        .values()
        .flat_map(|entries| models_from_cond(entries, key))
        .collect();
    debug!(key, count = models.len(), "collected models from conditioning");
    models
}
