use crate::models::PrimaryModel;

/// Device memory to reserve for one sampling run, on top of resident weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryBudget {
    /// Worst case, with the batch expanded for guidance.
    pub peak: u64,
    /// Floor, with the batch as sampled.
    pub minimum: u64,
    /// Auxiliary inference memory included in both figures.
    pub extra: u64,
}

impl MemoryBudget {
    pub fn new(
        peak: u64,
        minimum: u64,
        extra: u64,
    ) -> Self {
        Self {
            peak: peak.max(minimum),
            minimum,
            extra,
        }
    }

    /// Budget for sampling a latent of `noise_shape`, whose first dimension is
    /// the batch.
    pub fn for_noise_shape<P: PrimaryModel + ?Sized>(
        model: &P,
        noise_shape: &[usize],
        extra: u64,
        guidance_batch_multiplier: usize,
    ) -> Self {
        let Some((&batch, rest)) = noise_shape.split_first() else {
            let required = model.memory_required(noise_shape).saturating_add(extra);
            return Self::new(required, required, extra);
        };

        let with_batch = |batch: usize| {
            let mut shape = Vec::with_capacity(noise_shape.len());
            shape.push(batch);
            shape.extend_from_slice(rest);
            model.memory_required(&shape).saturating_add(extra)
        };

        let multiplier = guidance_batch_multiplier.max(1);
        Self::new(
            with_batch(batch.saturating_mul(multiplier)),
            with_batch(batch),
            extra,
        )
    }
}
