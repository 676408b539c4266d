mod auxiliary_model;
mod control_adapter;
mod memory_manager;
mod model;
mod model_id;
mod primary_model;

pub use auxiliary_model::AuxiliaryModelRef;
pub use control_adapter::{ControlAdapter, ControlHandle};
pub use memory_manager::{MemoryManager, OutOfMemory};
pub use model::{Model, ModelHandle};
pub use model_id::ModelId;
pub use primary_model::PrimaryModel;
