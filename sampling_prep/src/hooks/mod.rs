mod collector;
mod hook;
mod hook_group;

pub use collector::{HooksByKind, collect_hooks, hooks_from_cond};
pub use hook::{Hook, HookId, HookKind, WeightTarget};
pub use hook_group::HookGroup;
