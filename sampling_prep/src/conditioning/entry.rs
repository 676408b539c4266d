use std::sync::Arc;

use indexmap::IndexMap;
use ndarray::ArrayD;

use super::keys;
use crate::{hooks::HookGroup, models::AuxiliaryModelRef};

pub type Embedding = Arc<ArrayD<f32>>;

/// Per-channel sequences of entries, iterated in insertion order.
pub type ConditioningMap = IndexMap<String, Vec<ConditioningEntry>>;

#[derive(Debug, Clone)]
pub enum ModelCond {
    CrossAttn(Embedding),
}

#[derive(Debug, Clone)]
pub enum AttributeValue {
    Model(AuxiliaryModelRef),
    Models(Vec<AuxiliaryModelRef>),
    Hooks(HookGroup),
    Tensor(Embedding),
    ModelConds(IndexMap<String, ModelCond>),
    Opaque(serde_json::Value),
}

/// One conditioning entry: an optional primary embedding plus attributes.
///
/// Entries are shared between sampling steps, so transformations build new
/// entries instead of editing existing ones.
#[derive(Debug, Clone, Default)]
pub struct ConditioningEntry {
    embedding: Option<Embedding>,
    attributes: IndexMap<String, AttributeValue>,
}

impl ConditioningEntry {
    pub fn new(embedding: Option<Embedding>) -> Self {
        Self {
            embedding,
            attributes: IndexMap::new(),
        }
    }

    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: AttributeValue,
    ) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn with_control(
        self,
        adapters: Vec<AuxiliaryModelRef>,
    ) -> Self {
        self.with_attribute(keys::CONTROL, AttributeValue::Models(adapters))
    }

    pub fn with_gligen(
        self,
        gligen: AuxiliaryModelRef,
    ) -> Self {
        self.with_attribute(keys::GLIGEN, AttributeValue::Model(gligen))
    }

    pub fn with_additional_models(
        self,
        models: Vec<AuxiliaryModelRef>,
    ) -> Self {
        self.with_attribute(
            keys::ADDITIONAL_MODELS,
            AttributeValue::Models(models),
        )
    }

    pub fn with_hooks(
        self,
        hooks: HookGroup,
    ) -> Self {
        self.with_attribute(keys::HOOKS, AttributeValue::Hooks(hooks))
    }

    pub fn embedding(&self) -> Option<&Embedding> {
        self.embedding.as_ref()
    }

    pub fn get(
        &self,
        key: &str,
    ) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn contains(
        &self,
        key: &str,
    ) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn attributes(&self) -> &IndexMap<String, AttributeValue> {
        &self.attributes
    }

    pub fn hooks(&self) -> Option<&HookGroup> {
        match self.attributes.get(keys::HOOKS) {
            Some(AttributeValue::Hooks(group)) => Some(group),
            _ => None,
        }
    }
}
