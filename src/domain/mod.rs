pub mod device;
pub mod reading;

pub use device::{DeviceProfile, DeviceType, catalog};
pub use reading::{AdditionalData, Reading};
