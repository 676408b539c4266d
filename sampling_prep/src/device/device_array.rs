use ndarray::ArrayD;

use super::Device;
use crate::{ArrayElement, DataType};

/// An n-dimensional array tagged with the device holding its data.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceArray<T: ArrayElement> {
    array: ArrayD<T>,
    device: Device,
}

impl<T: ArrayElement> DeviceArray<T> {
    pub fn new(
        array: ArrayD<T>,
        device: Device,
    ) -> Self {
        Self {
            array,
            device,
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.array.shape()
    }

    pub fn data_type(&self) -> DataType {
        T::data_type()
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn array(&self) -> &ArrayD<T> {
        &self.array
    }

    pub fn into_array(self) -> ArrayD<T> {
        self.array
    }
}
