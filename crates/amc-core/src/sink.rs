// ── Collaborator boundaries ──
//
// Traits for everything the engine talks to: the state snapshot source
// and the two sinks actions are delivered to. The HTTP clients from
// amc-api implement them; tests plug in stubs.

use std::future::Future;

use amc_api::types::{DeleteCbsdRequest, RequestDbIds, RequestPayload};
use amc_api::{ActiveModeClient, RadioControllerClient};

use crate::error::CoreError;
use crate::model::State;

/// Accepts serialized SAS request payloads for delivery.
pub trait RequestSink: Send + Sync {
    fn upload(
        &self,
        payload: &RequestPayload,
    ) -> impl Future<Output = Result<RequestDbIds, CoreError>> + Send;
}

/// Removes CBSDs from the device registry.
pub trait RegistrySink: Send + Sync {
    fn remove_cbsd(
        &self,
        request: &DeleteCbsdRequest,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Hands out the two sinks an [`Action`](crate::Action) may be sent to.
pub trait SinkProvider: Send + Sync {
    type Requests: RequestSink;
    type Registry: RegistrySink;

    fn requests_sink(&self) -> &Self::Requests;
    fn registry_sink(&self) -> &Self::Registry;
}

/// Produces the state snapshot for a reconciliation pass.
pub trait StateSource: Send + Sync {
    fn fetch_state(&self) -> impl Future<Output = Result<State, CoreError>> + Send;
}

// ── HTTP-backed implementations ──────────────────────────────────────

impl RequestSink for RadioControllerClient {
    async fn upload(&self, payload: &RequestPayload) -> Result<RequestDbIds, CoreError> {
        Ok(self.upload_requests(payload).await?)
    }
}

impl RegistrySink for ActiveModeClient {
    async fn remove_cbsd(&self, request: &DeleteCbsdRequest) -> Result<(), CoreError> {
        Ok(self.delete_cbsd(request).await?)
    }
}

impl StateSource for ActiveModeClient {
    async fn fetch_state(&self) -> Result<State, CoreError> {
        let raw = self.get_state().await?;
        Ok(State::from(raw))
    }
}

/// Sinks backed by the radio-controller and active-mode services.
#[derive(Debug, Clone)]
pub struct ServiceSinks {
    radio_controller: RadioControllerClient,
    active_mode: ActiveModeClient,
}

impl ServiceSinks {
    pub fn new(radio_controller: RadioControllerClient, active_mode: ActiveModeClient) -> Self {
        Self {
            radio_controller,
            active_mode,
        }
    }
}

impl SinkProvider for ServiceSinks {
    type Requests = RadioControllerClient;
    type Registry = ActiveModeClient;

    fn requests_sink(&self) -> &RadioControllerClient {
        &self.radio_controller
    }

    fn registry_sink(&self) -> &ActiveModeClient {
        &self.active_mode
    }
}
