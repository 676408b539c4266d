use crate::{DataType, models::OutOfMemory};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: Box<[usize]>,
        reason: &'static str,
    },
    #[error("Value {value} is not representable as {data_type:?}")]
    UnrepresentableValue {
        value: f64,
        data_type: DataType,
    },
    #[error(transparent)]
    OutOfMemory(#[from] OutOfMemory),
}

impl Error {
    pub(crate) fn invalid_shape(
        shape: &[usize],
        reason: &'static str,
    ) -> Self {
        Self::InvalidShape {
            shape: shape.into(),
            reason,
        }
    }
}
