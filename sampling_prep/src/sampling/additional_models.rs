use indexmap::IndexSet;
use tracing::debug;

use super::MemoryPolicy;
use crate::{
    DataType,
    conditioning::{ConditioningMap, keys, models_from_cond},
    hooks::{HookKind, HooksByKind, hooks_from_cond},
    models::{AuxiliaryModelRef, ModelHandle},
};

/// Auxiliary models implied by conditioning and their extra inference memory.
#[derive(Clone, Default)]
pub struct AdditionalModels {
    pub models: Vec<ModelHandle>,
    pub inference_memory: u64,
}

/// Equivalent to [`get_additional_models_with_policy`] with
/// [`MemoryPolicy::ControlAdaptersOnly`].
pub fn get_additional_models(
    conds: &ConditioningMap,
    data_type: DataType,
) -> AdditionalModels {
    get_additional_models_with_policy(
        conds,
        data_type,
        MemoryPolicy::ControlAdaptersOnly,
    )
}

/// Collects every device-resident model referenced by `conds`.
///
/// The list holds, in order: the sub-models of each distinct control adapter,
/// GLIGEN models, additional models and models attached to `AddModels` hooks.
pub fn get_additional_models_with_policy(
    conds: &ConditioningMap,
    data_type: DataType,
    policy: MemoryPolicy,
) -> AdditionalModels {
    let mut control = Vec::new();
    let mut gligen = Vec::new();
    let mut additional = Vec::new();
    let mut hooks = HooksByKind::new();

    for entries in conds.values() {
        control.extend(models_from_cond(entries, keys::CONTROL));
        gligen.extend(models_from_cond(entries, keys::GLIGEN));
        additional.extend(models_from_cond(
            entries,
            keys::ADDITIONAL_MODELS,
        ));
        hooks_from_cond(entries, &mut hooks);
    }

    let control_adapters: IndexSet<AuxiliaryModelRef> =
        control.into_iter().collect();

    let mut inference_memory = 0u64;
    let mut models: Vec<ModelHandle> = Vec::new();
    for adapter in &control_adapters {
        models.extend(adapter.submodels());
        inference_memory = inference_memory
            .saturating_add(adapter.inference_memory_requirements(data_type));
    }

    let other_models: Vec<ModelHandle> = gligen
        .iter()
        .chain(additional.iter())
        .flat_map(AuxiliaryModelRef::submodels)
        .chain(
            hooks
                .get(HookKind::AddModels)
                .filter_map(|hook| hook.model().cloned()),
        )
        .collect();

    if policy == MemoryPolicy::AllAuxiliary {
        let mut counted = IndexSet::new();
        for model in other_models.iter().filter(|model| counted.insert(model.id())) {
            inference_memory = inference_memory
                .saturating_add(model.inference_memory_requirements(data_type));
        }
    }
    models.extend(other_models);

    debug!(
        control_adapters = control_adapters.len(),
        models = models.len(),
        inference_memory,
        ?policy,
        "resolved additional models"
    );

    AdditionalModels {
        models,
        inference_memory,
    }
}
