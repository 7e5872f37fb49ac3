use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Clone, PartialEq, Debug)]
pub struct DeviceProfile {
    pub id: String,
    pub r#type: DeviceType,
    pub location: String,
}

impl DeviceProfile {
    pub fn new(id: &str, r#type: DeviceType, location: &str) -> Self {
        DeviceProfile {
            id: id.to_string(),
            r#type,
            location: location.to_string(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceType {
    Temperature,
    Humidity,
    Pressure,
    MultiSensor,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Temperature => "temperature",
            DeviceType::Humidity => "humidity",
            DeviceType::Pressure => "pressure",
            DeviceType::MultiSensor => "multi-sensor",
        }
    }
}

impl Display for DeviceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the fixed set of simulated devices.
pub fn catalog() -> Vec<DeviceProfile> {
    vec![
        DeviceProfile::new("sensor-001", DeviceType::Temperature, "building-a-floor-1"),
        DeviceProfile::new("sensor-002", DeviceType::Humidity, "building-a-floor-2"),
        DeviceProfile::new("sensor-003", DeviceType::Pressure, "building-b-floor-1"),
        DeviceProfile::new("sensor-004", DeviceType::MultiSensor, "building-b-floor-2"),
        DeviceProfile::new("sensor-005", DeviceType::Temperature, "building-c-floor-1"),
    ]
}
