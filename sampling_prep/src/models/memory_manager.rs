use super::ModelHandle;
use crate::{device::Device, sampling::MemoryBudget};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Out of memory on {device}: {required} bytes required, {available} bytes available"
)]
pub struct OutOfMemory {
    pub device: Device,
    pub required: u64,
    pub available: u64,
}

/// Decides residency and eviction on a compute device.
pub trait MemoryManager {
    /// Makes every model in `models` resident on `device`.
    ///
    /// The manager should reserve `budget.peak` bytes of headroom and may fall
    /// back to `budget.minimum`, evicting other models if needed. Fails only
    /// when even the minimum cannot be satisfied.
    fn ensure_resident(
        &self,
        device: Device,
        models: &[ModelHandle],
        budget: &MemoryBudget,
    ) -> Result<(), OutOfMemory>;
}
