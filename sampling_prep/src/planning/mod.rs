mod dry_run;
mod plan;
mod static_control;
mod static_model;
mod static_primary;

pub use dry_run::{DryRunMemoryManager, Residency, ResidencyReport};
pub use plan::{
    ControlAdapterSpec, EntrySpec, ModelSpec, Plan, PlanError, PlanOutcome,
    PrimarySpec,
};
pub use static_control::StaticControlAdapter;
pub use static_model::StaticModel;
pub use static_primary::StaticPrimaryModel;
