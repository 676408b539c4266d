mod device;
mod device_array;

pub use device::Device;
pub use device_array::DeviceArray;
