use std::hash::{Hash, Hasher};

use super::{ControlHandle, ModelHandle, ModelId};
use crate::DataType;

/// A reference to an auxiliary model found in conditioning.
///
/// Equality and hashing use the referenced instance's [`ModelId`], so the same
/// adapter reached through different channels collapses to one entry.
#[derive(Clone)]
pub enum AuxiliaryModelRef {
    Control(ControlHandle),
    Gligen {
        descriptor: String,
        model: ModelHandle,
    },
    Model(ModelHandle),
}

impl AuxiliaryModelRef {
    pub fn gligen(
        descriptor: impl Into<String>,
        model: ModelHandle,
    ) -> Self {
        Self::Gligen {
            descriptor: descriptor.into(),
            model,
        }
    }

    pub fn id(&self) -> ModelId {
        match self {
            AuxiliaryModelRef::Control(adapter) => adapter.id(),
            AuxiliaryModelRef::Gligen {
                model,
                ..
            } => model.id(),
            AuxiliaryModelRef::Model(model) => model.id(),
        }
    }

    /// Device-resident models this reference depends on.
    pub fn submodels(&self) -> Vec<ModelHandle> {
        match self {
            AuxiliaryModelRef::Control(adapter) => adapter.get_models(),
            AuxiliaryModelRef::Gligen {
                model,
                ..
            } => vec![model.clone()],
            AuxiliaryModelRef::Model(model) => vec![model.clone()],
        }
    }

    pub fn inference_memory_requirements(
        &self,
        data_type: DataType,
    ) -> u64 {
        match self {
            AuxiliaryModelRef::Control(adapter) => {
                adapter.inference_memory_requirements(data_type)
            },
            AuxiliaryModelRef::Gligen {
                model,
                ..
            } => model.inference_memory_requirements(data_type),
            AuxiliaryModelRef::Model(model) => {
                model.inference_memory_requirements(data_type)
            },
        }
    }

    pub fn cleanup(&self) {
        match self {
            AuxiliaryModelRef::Control(adapter) => adapter.cleanup(),
            AuxiliaryModelRef::Gligen {
                model,
                ..
            } => model.cleanup(),
            AuxiliaryModelRef::Model(model) => model.cleanup(),
        }
    }
}

impl PartialEq for AuxiliaryModelRef {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.id() == other.id()
    }
}

impl Eq for AuxiliaryModelRef {}

impl Hash for AuxiliaryModelRef {
    fn hash<H: Hasher>(
        &self,
        state: &mut H,
    ) {
        self.id().hash(state);
    }
}

impl std::fmt::Debug for AuxiliaryModelRef {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            AuxiliaryModelRef::Control(adapter) => {
                write!(f, "Control({})", adapter.id())
            },
            AuxiliaryModelRef::Gligen {
                descriptor,
                model,
            } => write!(f, "Gligen({}, {})", descriptor, model.label()),
            AuxiliaryModelRef::Model(model) => {
                write!(f, "Model({})", model.label())
            },
        }
    }
}
