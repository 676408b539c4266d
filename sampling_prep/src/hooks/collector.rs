use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use super::{Hook, HookKind};
use crate::conditioning::{ConditioningEntry, ConditioningMap};

/// Hooks grouped by kind. Kinds and the hooks within each kind iterate in
/// first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct HooksByKind {
    inner: IndexMap<HookKind, IndexSet<Arc<Hook>>>,
}

impl HooksByKind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `hook` under its kind, returning false if it was already present.
    pub fn insert(
        &mut self,
        hook: Arc<Hook>,
    ) -> bool {
        self.inner.entry(hook.kind()).or_default().insert(hook)
    }

    pub fn get(
        &self,
        kind: HookKind,
    ) -> impl Iterator<Item = &Arc<Hook>> {
        self.inner.get(&kind).into_iter().flatten()
    }

    pub fn kinds(&self) -> impl Iterator<Item = HookKind> + '_ {
        self.inner.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Hook>> {
        self.inner.values().flatten()
    }

    pub fn contains(
        &self,
        hook: &Hook,
    ) -> bool {
        self.inner
            .get(&hook.kind())
            .is_some_and(|hooks| hooks.contains(hook))
    }

    /// Total number of hooks across kinds.
    pub fn len(&self) -> usize {
        self.inner.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keeps only the hooks for which `keep` returns true, dropping kinds
    /// left empty.
    pub fn retain(
        &mut self,
        mut keep: impl FnMut(&Hook) -> bool,
    ) {
        for hooks in self.inner.values_mut() {
            hooks.retain(|hook| keep(hook));
        }
        self.inner.retain(|_, hooks| !hooks.is_empty());
    }
}

/// Adds the hooks of every entry in one channel to `hooks`.
pub fn hooks_from_cond(
    entries: &[ConditioningEntry],
    hooks: &mut HooksByKind,
) {
    for group in entries.iter().filter_map(ConditioningEntry::hooks) {
        for hook in group.hooks() {
            hooks.insert(hook.clone());
        }
    }
}

/// Hooks of every channel, traversed in the same order as model collection.
pub fn collect_hooks(conds: &ConditioningMap) -> HooksByKind {
    let mut hooks = HooksByKind::new();
    for entries in conds.values() {
        hooks_from_cond(entries, &mut hooks);
    }
    debug!(count = hooks.len(), "collected hooks from conditioning");
    hooks
}
