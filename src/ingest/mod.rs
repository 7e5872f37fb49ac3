mod client;
mod ingest_response;
mod sender;

pub use client::new_client;
pub use ingest_response::IngestResponse;
pub use sender::{IngestError, send};
