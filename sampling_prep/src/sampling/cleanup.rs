use indexmap::IndexSet;
use tracing::trace;

use crate::{
    conditioning::{ConditioningMap, collect_models, keys},
    models::{AuxiliaryModelRef, ModelHandle},
};

/// Releases per-run state of each model. Residency is left to the memory
/// manager.
pub fn cleanup_additional_models(models: &[ModelHandle]) {
    for model in models {
        trace!(model = %model.label(), "cleaning up model");
        model.cleanup();
    }
}

/// Cleans up the models loaded for a run, then every distinct control adapter
/// currently referenced by `conds`, including ones added after loading.
pub fn cleanup_models(
    conds: &ConditioningMap,
    models: &[ModelHandle],
) {
    cleanup_additional_models(models);

    let control: IndexSet<AuxiliaryModelRef> =
        collect_models(conds, keys::CONTROL).into_iter().collect();
    for adapter in &control {
        trace!(adapter = ?adapter, "cleaning up control adapter");
        adapter.cleanup();
    }
}
