use std::sync::Arc;

use super::{ModelHandle, ModelId};
use crate::DataType;

/// A control adapter attached to conditioning. One adapter may depend on
/// several device-resident models, e.g. when adapters are chained.
pub trait ControlAdapter: Send + Sync {
    fn id(&self) -> ModelId;

    fn get_models(&self) -> Vec<ModelHandle>;

    fn inference_memory_requirements(
        &self,
        _data_type: DataType,
    ) -> u64 {
        0
    }

    fn cleanup(&self) {}
}

pub type ControlHandle = Arc<dyn ControlAdapter>;
