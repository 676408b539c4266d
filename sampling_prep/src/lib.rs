#[cfg(test)]
#[macro_use]
extern crate is_close;

pub mod conditioning;

pub mod data_type;
pub use data_type::{ArrayElement, DataType};

pub mod device;
pub use device::{Device, DeviceArray};

pub mod error;
pub use error::Error;

pub mod hooks;
pub mod mask;
pub mod models;
pub mod planning;
pub mod sampling;
