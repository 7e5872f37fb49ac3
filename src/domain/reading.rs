use crate::domain::DeviceType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single synthesized telemetry record, shaped as the ingestion API expects it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub device_id: String,
    pub device_type: DeviceType,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub battery_level: f64,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    pub additional_data: AdditionalData,
}

/// Secondary device fields. The keys stay snake_case on the wire.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AdditionalData {
    pub signal_strength: u32,
    pub uptime_hours: u32,
    pub error_count: u32,
    pub firmware_version: String,
}
