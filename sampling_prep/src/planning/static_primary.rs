use std::sync::Arc;

use crate::{
    DataType,
    device::Device,
    hooks::{Hook, HooksByKind, WeightTarget},
    models::{ModelHandle, PrimaryModel},
    planning::StaticModel,
};

/// A primary model whose activation memory scales linearly with the number
/// of latent elements.
pub struct StaticPrimaryModel {
    model: Arc<StaticModel>,
    data_type: DataType,
    device: Device,
    memory_usage_factor: f64,
    additional_models: Vec<ModelHandle>,
    registered_hooks: HooksByKind,
}

impl StaticPrimaryModel {
    pub fn new(
        model: Arc<StaticModel>,
        data_type: DataType,
        device: Device,
        memory_usage_factor: f64,
    ) -> Self {
        Self {
            model,
            data_type,
            device,
            memory_usage_factor,
            additional_models: Vec::new(),
            registered_hooks: HooksByKind::new(),
        }
    }

    pub fn with_additional_models(
        mut self,
        models: Vec<ModelHandle>,
    ) -> Self {
        self.additional_models = models;
        self
    }

    pub fn registered_hooks(&self) -> &HooksByKind {
        &self.registered_hooks
    }
}

impl PrimaryModel for StaticPrimaryModel {
    type Network = Arc<StaticModel>;

    fn handle(&self) -> ModelHandle {
        self.model.clone()
    }

    fn network(&self) -> Self::Network {
        self.model.clone()
    }

    fn memory_required(
        &self,
        shape: &[usize],
    ) -> u64 {
        let elements = shape
            .iter()
            .fold(1usize, |total, &dim| total.saturating_mul(dim));
        let bytes = elements as f64 * self.data_type.size_in_bytes() as f64;
        (bytes * self.memory_usage_factor).ceil() as u64
    }

    fn model_dtype(&self) -> DataType {
        self.data_type
    }

    fn load_device(&self) -> Device {
        self.device
    }

    fn get_all_additional_models(&self) -> Vec<ModelHandle> {
        self.additional_models.clone()
    }

    fn has_hook_patches(
        &self,
        hook: &Hook,
    ) -> bool {
        self.registered_hooks.contains(hook)
    }

    fn register_all_hook_patches(
        &mut self,
        hooks: &HooksByKind,
        target: WeightTarget,
    ) {
        for hook in hooks.iter().filter(|hook| hook.target() == target) {
            self.registered_hooks.insert(hook.clone());
        }
    }
}
