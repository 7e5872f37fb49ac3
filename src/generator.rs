use crate::domain::{AdditionalData, DeviceProfile, Reading};
use chrono::{DateTime, Utc};
use rand::prelude::*;
use std::ops::Range;

pub const TEMPERATURE_RANGE: Range<f64> = 15.0..35.0;
pub const HUMIDITY_RANGE: Range<f64> = 30.0..80.0;
pub const PRESSURE_RANGE: Range<f64> = 980.0..1020.0;
pub const BATTERY_LEVEL_RANGE: Range<f64> = 20.0..100.0;
pub const SIGNAL_STRENGTH_RANGE: Range<u32> = 0..100;
// Up to 30 days
pub const UPTIME_HOURS_RANGE: Range<u32> = 0..720;
pub const ERROR_COUNT_RANGE: Range<u32> = 0..10;

/// Picks simulated devices and fabricates readings for them.
///
/// Every field is drawn independently and uniformly from its range on each call.
#[derive(Debug)]
pub struct ReadingGenerator {
    rng: StdRng,
}

impl ReadingGenerator {
    /// Creates a generator, seeded from entropy unless a seed is given.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ReadingGenerator { rng }
    }

    /// Selects a device uniformly at random, or `None` if the catalog is empty.
    pub fn pick<'a>(&mut self, catalog: &'a [DeviceProfile]) -> Option<&'a DeviceProfile> {
        catalog.choose(&mut self.rng)
    }

    pub fn reading(&mut self, profile: &DeviceProfile, timestamp: DateTime<Utc>) -> Reading {
        Reading {
            device_id: profile.id.clone(),
            device_type: profile.r#type,
            temperature: self.rng.gen_range(TEMPERATURE_RANGE),
            humidity: self.rng.gen_range(HUMIDITY_RANGE),
            pressure: self.rng.gen_range(PRESSURE_RANGE),
            battery_level: self.rng.gen_range(BATTERY_LEVEL_RANGE),
            location: profile.location.clone(),
            timestamp,
            additional_data: self.additional_data(),
        }
    }

    fn additional_data(&mut self) -> AdditionalData {
        AdditionalData {
            signal_strength: self.rng.gen_range(SIGNAL_STRENGTH_RANGE),
            uptime_hours: self.rng.gen_range(UPTIME_HOURS_RANGE),
            error_count: self.rng.gen_range(ERROR_COUNT_RANGE),
            firmware_version: format!(
                "v{}.{}.{}",
                self.rng.gen_range(0..3),
                self.rng.gen_range(0..10),
                self.rng.gen_range(0..10)
            ),
        }
    }
}
