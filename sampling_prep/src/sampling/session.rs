use super::{PlannerConfig, SamplingContext, cleanup_models, prepare_sampling};
use crate::{
    Error,
    conditioning::ConditioningMap,
    models::{MemoryManager, PrimaryModel},
};

/// A prepared sampling run that cleans up after itself.
///
/// Cleanup runs once, on [`finish`](Self::finish) or when the session is
/// dropped, so early returns and unwinding release per-run state as well.
pub struct SamplingSession<N> {
    context: SamplingContext<N>,
    finished: bool,
}

impl<N> SamplingSession<N> {
    pub fn prepare<P, M>(
        model: &P,
        memory_manager: &M,
        noise_shape: &[usize],
        conds: ConditioningMap,
        config: &PlannerConfig,
    ) -> Result<Self, Error>
    where
        P: PrimaryModel<Network = N> + ?Sized,
        M: MemoryManager + ?Sized,
    {
        let context =
            prepare_sampling(model, memory_manager, noise_shape, conds, config)?;
        Ok(Self::new(context))
    }

    pub fn new(context: SamplingContext<N>) -> Self {
        Self {
            context,
            finished: false,
        }
    }

    pub fn context(&self) -> &SamplingContext<N> {
        &self.context
    }

    pub fn network(&self) -> &N {
        &self.context.network
    }

    pub fn conditioning(&self) -> &ConditioningMap {
        &self.context.conditioning
    }

    /// Conditioning may gain control adapters during the run; they are
    /// cleaned up with the rest.
    pub fn conditioning_mut(&mut self) -> &mut ConditioningMap {
        &mut self.context.conditioning
    }

    pub fn finish(mut self) {
        self.cleanup();
    }

    fn cleanup(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        cleanup_models(&self.context.conditioning, &self.context.models);
    }
}

impl<N> Drop for SamplingSession<N> {
    fn drop(&mut self) {
        self.cleanup();
    }
}
