mod additional_models;
mod budget;
mod cleanup;
mod config;
mod patcher;
mod prepare;
mod session;

pub use additional_models::{
    AdditionalModels, get_additional_models, get_additional_models_with_policy,
};
pub use budget::MemoryBudget;
pub use cleanup::{cleanup_additional_models, cleanup_models};
pub use config::{MemoryPolicy, PlannerConfig, PlannerEnvVar};
pub use patcher::prepare_model_patcher;
pub use prepare::{SamplingContext, prepare_sampling};
pub use session::SamplingSession;
