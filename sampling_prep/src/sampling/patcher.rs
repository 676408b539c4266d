use tracing::debug;

use crate::{
    conditioning::ConditioningMap,
    hooks::{HooksByKind, WeightTarget, collect_hooks},
    models::PrimaryModel,
};

/// Registers hooks found in `conds` that the model does not patch yet,
/// targeting the model body. Returns the hooks submitted for registration.
pub fn prepare_model_patcher<P: PrimaryModel + ?Sized>(
    model: &mut P,
    conds: &ConditioningMap,
) -> HooksByKind {
    let mut hooks = collect_hooks(conds);
    hooks.retain(|hook| !model.has_hook_patches(hook));
    if !hooks.is_empty() {
        debug!(count = hooks.len(), "registering hook patches");
        model.register_all_hook_patches(&hooks, WeightTarget::Model);
    }
    hooks
}
