use std::sync::Arc;

use indexmap::IndexSet;

use super::Hook;

/// Ordered, duplicate-free bundle of hooks attached to a conditioning entry.
#[derive(Debug, Clone, Default)]
pub struct HookGroup {
    hooks: IndexSet<Arc<Hook>>,
}

impl HookGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `hook`, returning false if it was already present.
    pub fn add(
        &mut self,
        hook: Arc<Hook>,
    ) -> bool {
        self.hooks.insert(hook)
    }

    pub fn with(
        mut self,
        hook: Arc<Hook>,
    ) -> Self {
        self.add(hook);
        self
    }

    pub fn hooks(&self) -> impl Iterator<Item = &Arc<Hook>> {
        self.hooks.iter()
    }

    pub fn contains(
        &self,
        hook: &Hook,
    ) -> bool {
        self.hooks.contains(hook)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl FromIterator<Arc<Hook>> for HookGroup {
    fn from_iter<I: IntoIterator<Item = Arc<Hook>>>(iter: I) -> Self {
        Self {
            hooks: iter.into_iter().collect(),
        }
    }
}
