use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use crate::models::ModelHandle;

static HOOK_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HookId(u64);

impl HookId {
    fn next() -> Self {
        Self(HOOK_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    Weight,
    ObjectPatch,
    AddModels,
    TransformerOptions,
    Injections,
}

/// Which weights of the model a hook patches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightTarget {
    /// Weights of the model body.
    Model,
    /// Weights of the text encoder.
    Clip,
}

/// A declarative weight-patch descriptor. Identity is the [`HookId`] assigned
/// at construction; clones of an `Arc<Hook>` are the same hook.
pub struct Hook {
    id: HookId,
    kind: HookKind,
    target: WeightTarget,
    strength: f32,
    model: Option<ModelHandle>,
}

impl Hook {
    pub fn new(
        kind: HookKind,
        target: WeightTarget,
    ) -> Arc<Self> {
        Arc::new(Self {
            id: HookId::next(),
            kind,
            target,
            strength: 1.0,
            model: None,
        })
    }

    pub fn weight(
        target: WeightTarget,
        strength: f32,
    ) -> Arc<Self> {
        Arc::new(Self {
            id: HookId::next(),
            kind: HookKind::Weight,
            target,
            strength,
            model: None,
        })
    }

    /// A hook that requires `model` to be resident while it is active.
    pub fn add_model(model: ModelHandle) -> Arc<Self> {
        Arc::new(Self {
            id: HookId::next(),
            kind: HookKind::AddModels,
            target: WeightTarget::Model,
            strength: 1.0,
            model: Some(model),
        })
    }

    pub fn id(&self) -> HookId {
        self.id
    }

    pub fn kind(&self) -> HookKind {
        self.kind
    }

    pub fn target(&self) -> WeightTarget {
        self.target
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn model(&self) -> Option<&ModelHandle> {
        self.model.as_ref()
    }
}

impl PartialEq for Hook {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.id == other.id
    }
}

impl Eq for Hook {}

impl Hash for Hook {
    fn hash<H: Hasher>(
        &self,
        state: &mut H,
    ) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Hook {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Hook")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("target", &self.target)
            .field("strength", &self.strength)
            .field("model", &self.model.as_ref().map(|model| model.label()))
            .finish()
    }
}
