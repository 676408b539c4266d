use serde::Deserialize;
use tracing::warn;

/// Which auxiliary models contribute to the extra inference memory estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryPolicy {
    /// Only deduplicated control adapters report inference memory. Other
    /// auxiliary models are assumed to be covered by their resident size.
    #[default]
    ControlAdaptersOnly,
    /// Every auxiliary model reports inference memory.
    AllAuxiliary,
}

impl MemoryPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "control" | "control_adapters_only" => {
                Some(MemoryPolicy::ControlAdaptersOnly)
            },
            "all" | "all_auxiliary" => Some(MemoryPolicy::AllAuxiliary),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub enum PlannerEnvVar {
    GuidanceMultiplier,
    MemoryPolicy,
}

impl PlannerEnvVar {
    pub fn key(&self) -> &'static str {
        match self {
            PlannerEnvVar::GuidanceMultiplier => {
                "SAMPLING_PREP_GUIDANCE_MULTIPLIER"
            },
            PlannerEnvVar::MemoryPolicy => "SAMPLING_PREP_MEMORY_POLICY",
        }
    }

    pub fn value(&self) -> Option<String> {
        std::env::var(self.key()).ok().filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Batch multiplier applied for the peak budget. Guidance runs the
    /// conditional and unconditional passes in one batch.
    pub guidance_batch_multiplier: usize,
    pub memory_policy: MemoryPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            guidance_batch_multiplier: 2,
            memory_policy: MemoryPolicy::default(),
        }
    }
}

impl PlannerConfig {
    pub fn new(
        guidance_batch_multiplier: usize,
        memory_policy: MemoryPolicy,
    ) -> Self {
        Self {
            guidance_batch_multiplier,
            memory_policy,
        }
    }

    /// Defaults overridden by any valid `SAMPLING_PREP_*` variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            PlannerEnvVar::GuidanceMultiplier.value().as_deref(),
            PlannerEnvVar::MemoryPolicy.value().as_deref(),
        )
    }

    fn with_overrides(
        mut self,
        guidance_multiplier: Option<&str>,
        memory_policy: Option<&str>,
    ) -> Self {
        if let Some(raw) = guidance_multiplier {
            match raw.trim().parse::<usize>() {
                Ok(multiplier) if multiplier >= 1 => {
                    self.guidance_batch_multiplier = multiplier
                },
                _ => warn!(
                    key = PlannerEnvVar::GuidanceMultiplier.key(),
                    value = raw,
                    "ignoring invalid guidance multiplier"
                ),
            }
        }
        if let Some(raw) = memory_policy {
            match MemoryPolicy::parse(raw.trim()) {
                Some(policy) => self.memory_policy = policy,
                None => warn!(
                    key = PlannerEnvVar::MemoryPolicy.key(),
                    value = raw,
                    "ignoring unknown memory policy"
                ),
            }
        }
        self
    }

    /// The multiplier actually applied; never below one.
    pub fn effective_multiplier(&self) -> usize {
        self.guidance_batch_multiplier.max(1)
    }
}
