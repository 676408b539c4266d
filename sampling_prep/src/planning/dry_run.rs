use std::{collections::HashSet, sync::Mutex};

use tracing::{info, warn};

use crate::{
    device::Device,
    models::{MemoryManager, ModelHandle, ModelId, OutOfMemory},
    sampling::MemoryBudget,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Residency {
    /// Weights plus the peak budget fit.
    Full,
    /// Only weights plus the minimum budget fit.
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidencyReport {
    pub device: Device,
    pub models: Vec<ModelId>,
    pub weights: u64,
    pub budget: MemoryBudget,
    pub residency: Residency,
}

/// A memory manager that checks requests against a fixed device capacity
/// without moving any data.
pub struct DryRunMemoryManager {
    capacity: u64,
    last_report: Mutex<Option<ResidencyReport>>,
}

impl DryRunMemoryManager {
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            last_report: Mutex::new(None),
        }
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Report of the most recent successful request.
    pub fn last_report(&self) -> Option<ResidencyReport> {
        self.last_report
            .lock()
            .ok()
            .and_then(|report| report.clone())
    }
}

impl MemoryManager for DryRunMemoryManager {
    fn ensure_resident(
        &self,
        device: Device,
        models: &[ModelHandle],
        budget: &MemoryBudget,
    ) -> Result<(), OutOfMemory> {
        let mut seen = HashSet::new();
        let unique: Vec<&ModelHandle> =
            models.iter().filter(|model| seen.insert(model.id())).collect();
        let weights = unique
            .iter()
            .fold(0u64, |total, model| total.saturating_add(model.size_in_bytes()));

        let residency = if weights.saturating_add(budget.peak) <= self.capacity {
            Residency::Full
        } else if weights.saturating_add(budget.minimum) <= self.capacity {
            warn!(
                %device,
                peak = budget.peak,
                minimum = budget.minimum,
                capacity = self.capacity,
                "peak budget does not fit, falling back to minimum"
            );
            Residency::Degraded
        } else {
            return Err(OutOfMemory {
                device,
                required: weights.saturating_add(budget.minimum),
                available: self.capacity,
            });
        };

        info!(%device, models = unique.len(), weights, ?residency, "models resident");
        let report = ResidencyReport {
            device,
            models: unique.iter().map(|model| model.id()).collect(),
            weights,
            budget: *budget,
            residency,
        };
        if let Ok(mut last_report) = self.last_report.lock() {
            *last_report = Some(report);
        }
        Ok(())
    }
}
