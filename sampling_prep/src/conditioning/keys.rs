//! Attribute keys interpreted by this crate. Every other key is passed through.

pub const CONTROL: &str = "control";
pub const GLIGEN: &str = "gligen";
pub const ADDITIONAL_MODELS: &str = "additional_models";
pub const HOOKS: &str = "hooks";
pub const CROSS_ATTN: &str = "cross_attn";
pub const MODEL_CONDS: &str = "model_conds";

/// Name of the cross-attention entry inside `model_conds`.
pub const C_CROSSATTN: &str = "c_crossattn";
