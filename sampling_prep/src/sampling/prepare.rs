use tracing::{debug, info};

use super::{MemoryBudget, PlannerConfig, get_additional_models_with_policy};
use crate::{
    Error,
    conditioning::ConditioningMap,
    device::Device,
    models::{MemoryManager, ModelHandle, PrimaryModel},
};

/// Everything a sampler needs for one run. Passed explicitly to the sampling
/// loop and handed back to cleanup; the primary model keeps no reference to it.
pub struct SamplingContext<N> {
    pub network: N,
    pub conditioning: ConditioningMap,
    /// Auxiliary models made resident alongside the primary model.
    pub models: Vec<ModelHandle>,
    pub budget: MemoryBudget,
    pub device: Device,
}

/// Makes the primary model and every auxiliary model implied by `conds`
/// resident on the model's load device.
///
/// An [`OutOfMemory`](crate::models::OutOfMemory) from the memory manager is
/// returned as is.
pub fn prepare_sampling<P, M>(
    model: &P,
    memory_manager: &M,
    noise_shape: &[usize],
    conds: ConditioningMap,
    config: &PlannerConfig,
) -> Result<SamplingContext<P::Network>, Error>
where
    P: PrimaryModel + ?Sized,
    M: MemoryManager + ?Sized,
{
    let device = model.load_device();
    let additional = get_additional_models_with_policy(
        &conds,
        model.model_dtype(),
        config.memory_policy,
    );
    let mut models = additional.models;
    models.extend(model.get_all_additional_models());

    let budget = MemoryBudget::for_noise_shape(
        model,
        noise_shape,
        additional.inference_memory,
        config.effective_multiplier(),
    );
    debug!(
        ?noise_shape,
        peak = budget.peak,
        minimum = budget.minimum,
        extra = budget.extra,
        "computed sampling memory budget"
    );

    let mut resident = Vec::with_capacity(models.len() + 1);
    resident.push(model.handle());
    resident.extend(models.iter().cloned());
    info!(%device, models = resident.len(), "loading models for sampling");
    memory_manager.ensure_resident(device, &resident, &budget)?;

    Ok(SamplingContext {
        network: model.network(),
        conditioning: conds,
        models,
        budget,
        device,
    })
}
