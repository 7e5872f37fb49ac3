use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn new_client() -> Result<Client, IngestClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder().user_agent(USER_AGENT).default_headers(headers).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum IngestClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
