mod convert;
mod entry;
pub mod keys;
mod scanner;

pub use convert::convert_cond;
pub use entry::{
    AttributeValue, ConditioningEntry, ConditioningMap, Embedding, ModelCond,
};
pub use scanner::{collect_models, models_from_cond};
