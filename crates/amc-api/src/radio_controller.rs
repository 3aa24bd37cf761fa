// HTTP client for the radio controller, which queues SAS request
// payloads for delivery and tracks their responses.

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::{TransportConfig, decode_response, normalize_base_url};
use crate::types::{RequestDbIds, RequestPayload};

/// Async client for the radio-controller service.
#[derive(Debug, Clone)]
pub struct RadioControllerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RadioControllerClient {
    /// Build a client from a base URL and shared transport settings.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::with_client(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Queue one request payload. Returns the ids the controller assigned.
    pub async fn upload_requests(&self, payload: &RequestPayload) -> Result<RequestDbIds, Error> {
        let url = self.base_url.join("requests")?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(payload).send().await?;
        decode_response(resp).await
    }
}
