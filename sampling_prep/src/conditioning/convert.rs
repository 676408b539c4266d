use super::{AttributeValue, ConditioningEntry, ModelCond, keys};

/// Builds model-ready copies of `entries`.
///
/// A present embedding is exposed as the `cross_attn` attribute and as a
/// cross-attention model condition. Existing model conditions are kept. The
/// source entries are left untouched.
pub fn convert_cond(entries: &[ConditioningEntry]) -> Vec<ConditioningEntry> {
    entries
        .iter()
        .map(|entry| {
            let mut model_conds = match entry.get(keys::MODEL_CONDS) {
                Some(AttributeValue::ModelConds(existing)) => existing.clone(),
                _ => Default::default(),
            };
            let mut converted = entry.clone();
            if let Some(embedding) = entry.embedding() {
                model_conds.insert(
                    keys::C_CROSSATTN.to_string(),
                    ModelCond::CrossAttn(embedding.clone()),
                );
                converted = converted.with_attribute(
                    keys::CROSS_ATTN,
                    AttributeValue::Tensor(embedding.clone()),
                );
            }
            converted.with_attribute(
                keys::MODEL_CONDS,
                AttributeValue::ModelConds(model_conds),
            )
        })
        .collect()
}
