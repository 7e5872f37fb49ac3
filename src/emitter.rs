use crate::app_config::AppConfig;
use crate::domain::DeviceProfile;
use crate::extensions::error_chain::ErrorChain;
use crate::generator::ReadingGenerator;
use crate::ingest::{IngestError, IngestResponse, send};
use chrono::Utc;
use reqwest::Client;
use std::future::{Future, pending};
use std::sync::Arc;
use thiserror::Error;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info, instrument, warn};

/// Periodically fabricates a reading for a random device and posts it to the ingestion API.
#[derive(Debug)]
pub struct Emitter {
    client: Client,
    config: Arc<AppConfig>,
    catalog: Vec<DeviceProfile>,
    generator: ReadingGenerator,
}

#[derive(Debug, PartialEq)]
pub struct Delivery {
    pub device_id: String,
    pub receipt: IngestResponse,
}

impl Emitter {
    pub fn new(client: Client, config: Arc<AppConfig>, catalog: Vec<DeviceProfile>) -> Self {
        let generator = ReadingGenerator::new(config.simulation_seed());
        Emitter {
            client,
            config,
            catalog,
            generator,
        }
    }

    /// Emits immediately and then once every interval, forever.
    pub async fn run(&mut self) {
        self.run_until(pending::<()>()).await
    }

    /// Emits immediately and then once every interval until `stop` completes.
    #[instrument(skip_all, fields(url = self.config.api_url(), interval = ?self.config.interval()))]
    pub async fn run_until(&mut self, stop: impl Future<Output = ()>) {
        // The first tick completes immediately
        let mut ticker = interval(self.config.interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(stop);

        loop {
            tokio::select! {
                _ = &mut stop => {
                    info!("🛑 Stopped emitting telemetry");
                    return;
                }
                _ = ticker.tick() => self.tick().await,
            }
        }
    }

    async fn tick(&mut self) {
        match self.emit().await {
            Ok(delivery) => {
                info!(device_id = delivery.device_id, "✅ Successfully sent telemetry data for device '{}'", delivery.device_id);
                if let Some(ingestion_id) = &delivery.receipt.id {
                    #[rustfmt::skip]
                    debug!(device_id = delivery.device_id, "✅ Stored as '{}': {}", ingestion_id, delivery.receipt.message.as_deref().unwrap_or("no message"));
                }
            }
            Err(EmitError::Delivery { device_id, source }) => {
                let message = failure_message(&source);
                match source {
                    IngestError::Serialization(_) => error!(device_id, "❌ {}", message),
                    IngestError::Request(_) => warn!(device_id, "⚠️ {}", message),
                    IngestError::UnexpectedStatus { status, .. } => warn!(device_id, status_code = %status, "⚠️ {}", message),
                }
            }
            Err(e) => error!("❌ {}", e),
        }
    }

    /// Performs a single emission: pick, generate, serialize and deliver.
    pub async fn emit(&mut self) -> Result<Delivery, EmitError> {
        let profile = self.generator.pick(&self.catalog).ok_or(EmitError::EmptyCatalog)?;
        let reading = self.generator.reading(profile, Utc::now());
        debug!(device_id = reading.device_id, ?reading, "📡 Generated reading");

        match send(&self.client, self.config.api_url(), &reading).await {
            Ok(receipt) => Ok(Delivery {
                device_id: reading.device_id,
                receipt,
            }),
            Err(source) => Err(EmitError::Delivery {
                device_id: reading.device_id,
                source,
            }),
        }
    }
}

/// Describes a failed delivery, including the underlying cause of transport errors.
fn failure_message(error: &IngestError) -> String {
    match error {
        IngestError::Serialization(e) => format!("Error serializing telemetry data: {}", e),
        IngestError::Request(e) => format!("Error sending telemetry data: {}", e.display_chain()),
        IngestError::UnexpectedStatus { status, body: Some(body) } => {
            format!("Failed to send telemetry data. Status: {}. Response: {:?}", status.as_u16(), body)
        }
        IngestError::UnexpectedStatus { status, body: None } => {
            format!("Failed to send telemetry data. Status: {}. Response body could not be read", status.as_u16())
        }
    }
}

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("no devices to simulate")]
    EmptyCatalog,
    #[error("delivery for device '{device_id}' failed: {source}")]
    Delivery { device_id: String, source: IngestError },
}
