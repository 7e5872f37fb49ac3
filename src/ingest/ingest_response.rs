use serde::Deserialize;

/// The acknowledgement returned by the ingestion API. Every field is optional since other
/// destinations may answer with any body at all.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct IngestResponse {
    #[serde(default, alias = "Id")]
    pub id: Option<String>,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

impl IngestResponse {
    /// Decodes the body, falling back to an empty acknowledgement if it isn't a JSON object.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}
