use crate::extensions::error_chain::ErrorChain;
use crate::ingest::IngestResponse;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

/// Posts `payload` as JSON to `url`. Only a `200 OK` counts as delivered; the body is always read
/// so the connection is released before returning. A body that cannot be read is reported as `None`.
#[instrument(skip(client, payload))]
pub async fn send<T>(client: &Client, url: &str, payload: &T) -> Result<IngestResponse, IngestError>
where
    T: Serialize,
{
    let body = serde_json::to_vec(payload)?;
    debug!(bytes = body.len(), "📨 Posting payload...");

    let response = client.post(url).header(CONTENT_TYPE, "application/json").body(body).send().await?;

    let status = response.status();
    let body = response
        .text()
        .await
        .inspect_err(|e| debug!(status_code = %status, "⚠️ Unable to read the response body: {}", e.display_chain()))
        .ok();

    if status != StatusCode::OK {
        return Err(IngestError::UnexpectedStatus { status, body });
    }

    Ok(body.map(|body| IngestResponse::from_body(&body)).unwrap_or_default())
}

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("unable to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected response status {}", status.as_u16())]
    UnexpectedStatus { status: StatusCode, body: Option<String> },
}
