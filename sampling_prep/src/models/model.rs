use std::sync::Arc;

use super::ModelId;
use crate::DataType;

/// A device-resident model as seen by the memory manager.
pub trait Model: Send + Sync {
    fn id(&self) -> ModelId;

    fn label(&self) -> String {
        format!("model{}", self.id())
    }

    /// Bytes occupied by the model's weights once resident.
    fn size_in_bytes(&self) -> u64 {
        0
    }

    /// Extra bytes needed while the model takes part in inference.
    fn inference_memory_requirements(
        &self,
        _data_type: DataType,
    ) -> u64 {
        0
    }

    /// Drops per-run state. Never evicts the model from its device and must
    /// tolerate repeated calls.
    fn cleanup(&self) {}
}

pub type ModelHandle = Arc<dyn Model>;
