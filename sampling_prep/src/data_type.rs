use std::fmt::Debug;

use half::{bf16, f16};
use num_traits::{Float, NumCast};
use serde::Deserialize;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    // Floating point
    BF16,
    #[serde(alias = "float16")]
    F16,
    #[serde(alias = "float32")]
    F32,
    F64,
}

impl DataType {
    pub fn size_in_bits(&self) -> usize {
        match self {
            DataType::BF16 => 16,
            DataType::F16 => 16,
            DataType::F32 => 32,
            DataType::F64 => 64,
        }
    }

    pub fn size_in_bytes(&self) -> usize {
        (self.size_in_bits() + 7) / 8
    }
}

/// Float element types a mask can be normalized in. Interpolation runs in
/// the element type itself.
pub trait ArrayElement: Float + NumCast + Send + Sync + Debug + 'static {
    fn data_type() -> DataType;
}

impl ArrayElement for f16 {
    fn data_type() -> DataType {
        DataType::F16
    }
}

impl ArrayElement for bf16 {
    fn data_type() -> DataType {
        DataType::BF16
    }
}

impl ArrayElement for f32 {
    fn data_type() -> DataType {
        DataType::F32
    }
}

impl ArrayElement for f64 {
    fn data_type() -> DataType {
        DataType::F64
    }
}
