// ── Actions ──
//
// The generator's output unit. Each action knows which sink it belongs
// to; callers only ever see `send`.

use std::fmt;

use amc_api::types::{DeleteCbsdRequest, RequestDbIds, RequestPayload};
use serde::Serialize;

use crate::error::CoreError;
use crate::sas::Request;
use crate::sink::{RegistrySink, RequestSink, SinkProvider};

/// What to do for one CBSD. Equality is structural.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// A SAS request bound for the radio controller.
    Request(Request),
    /// Local removal of a CBSD the SAS never knew about.
    DeleteCbsd { serial_number: String },
}

/// Result of delivering one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Request queued under the returned ids.
    Queued(RequestDbIds),
    /// CBSD removed from the registry.
    Deleted,
}

impl Action {
    /// The request carried by this action, if any.
    pub fn as_request(&self) -> Option<&Request> {
        match self {
            Self::Request(request) => Some(request),
            Self::DeleteCbsd { .. } => None,
        }
    }

    /// Deliver the action with exactly one call to the matching sink.
    /// No retries; the caller bounds the call with a deadline.
    pub async fn send<P: SinkProvider>(&self, provider: &P) -> Result<SendOutcome, CoreError> {
        match self {
            Self::Request(request) => {
                let payload = RequestPayload {
                    payload: request.payload(),
                };
                let ids = provider.requests_sink().upload(&payload).await?;
                Ok(SendOutcome::Queued(ids))
            }
            Self::DeleteCbsd { serial_number } => {
                let request = DeleteCbsdRequest {
                    serial_number: serial_number.clone(),
                };
                provider.registry_sink().remove_cbsd(&request).await?;
                Ok(SendOutcome::Deleted)
            }
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(request) => write!(f, "{} {}", request.kind, request.body()),
            Self::DeleteCbsd { serial_number } => write!(f, "deleteCbsd {serial_number}"),
        }
    }
}
