use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    DataType,
    models::{ControlAdapter, ModelHandle, ModelId},
};

/// A control adapter with a fixed set of sub-models and a fixed inference
/// memory requirement per element byte.
pub struct StaticControlAdapter {
    id: ModelId,
    label: String,
    models: Vec<ModelHandle>,
    memory_per_byte: u64,
    cleanups: AtomicUsize,
}

impl StaticControlAdapter {
    pub fn new(
        label: impl Into<String>,
        models: Vec<ModelHandle>,
        memory_per_byte: u64,
    ) -> Self {
        Self {
            id: ModelId::next(),
            label: label.into(),
            models,
            memory_per_byte,
            cleanups: AtomicUsize::new(0),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn cleanup_count(&self) -> usize {
        self.cleanups.load(Ordering::Relaxed)
    }
}

impl ControlAdapter for StaticControlAdapter {
    fn id(&self) -> ModelId {
        self.id
    }

    fn get_models(&self) -> Vec<ModelHandle> {
        self.models.clone()
    }

    fn inference_memory_requirements(
        &self,
        data_type: DataType,
    ) -> u64 {
        self.memory_per_byte
            .saturating_mul(data_type.size_in_bytes() as u64)
    }

    fn cleanup(&self) {
        self.cleanups.fetch_add(1, Ordering::Relaxed);
    }
}
