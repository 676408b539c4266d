use super::{ModelHandle, ModelId};
use crate::{
    DataType,
    device::Device,
    hooks::{Hook, HooksByKind, WeightTarget},
};

/// The generative model a sampling run is driven against.
pub trait PrimaryModel {
    /// Handle to the underlying computation graph, passed to the sampler.
    type Network: Clone;

    /// The primary model as a residency unit for the memory manager.
    fn handle(&self) -> ModelHandle;

    fn id(&self) -> ModelId {
        self.handle().id()
    }

    fn network(&self) -> Self::Network;

    /// Bytes needed to run one forward pass over a latent of `shape`.
    fn memory_required(
        &self,
        shape: &[usize],
    ) -> u64;

    fn model_dtype(&self) -> DataType;

    fn load_device(&self) -> Device;

    /// Models the patch state tracks on its own, independent of conditioning.
    fn get_all_additional_models(&self) -> Vec<ModelHandle> {
        Vec::new()
    }

    fn has_hook_patches(
        &self,
        _hook: &Hook,
    ) -> bool {
        false
    }

    fn register_all_hook_patches(
        &mut self,
        hooks: &HooksByKind,
        target: WeightTarget,
    );
}
