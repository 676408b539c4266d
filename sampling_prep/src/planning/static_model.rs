use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    DataType,
    models::{Model, ModelId},
};

/// A model described only by its declared sizes.
pub struct StaticModel {
    id: ModelId,
    label: String,
    weights: u64,
    inference_memory: u64,
    cleanups: AtomicUsize,
}

impl StaticModel {
    pub fn new(
        label: impl Into<String>,
        weights: u64,
    ) -> Self {
        Self {
            id: ModelId::next(),
            label: label.into(),
            weights,
            inference_memory: 0,
            cleanups: AtomicUsize::new(0),
        }
    }

    pub fn with_inference_memory(
        mut self,
        bytes: u64,
    ) -> Self {
        self.inference_memory = bytes;
        self
    }

    pub fn into_handle(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Number of times [`Model::cleanup`] has been called.
    pub fn cleanup_count(&self) -> usize {
        self.cleanups.load(Ordering::Relaxed)
    }
}

impl Model for StaticModel {
    fn id(&self) -> ModelId {
        self.id
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn size_in_bytes(&self) -> u64 {
        self.weights
    }

    fn inference_memory_requirements(
        &self,
        _data_type: DataType,
    ) -> u64 {
        self.inference_memory
    }

    fn cleanup(&self) {
        self.cleanups.fetch_add(1, Ordering::Relaxed);
    }
}
