// HTTP client for the active-mode service: source of the state
// snapshot and the device registry that removes deleted CBSDs.

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::{TransportConfig, decode_response, normalize_base_url};
use crate::types::{DeleteCbsdRequest, DeleteCbsdResponse, State};

/// Async client for the active-mode service.
#[derive(Debug, Clone)]
pub struct ActiveModeClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ActiveModeClient {
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

    /// Fetch the current snapshot of every managed CBSD.
    pub async fn get_state(&self) -> Result<State, Error> {
        let url = self.base_url.join("state")?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        decode_response(resp).await
    }

    /// Remove a CBSD from the registry by serial number.
    pub async fn delete_cbsd(&self, request: &DeleteCbsdRequest) -> Result<(), Error> {
        let url = self.base_url.join("cbsds/delete")?;
        debug!(serial_number = %request.serial_number, "POST {url}");

        let resp = self.http.post(url).json(request).send().await?;
        let _: DeleteCbsdResponse = decode_response(resp).await?;
        Ok(())
    }
}
