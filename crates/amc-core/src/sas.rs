// ── SAS protocol requests ──
//
// Each request is one body of a batching-capable protocol message:
// the wire payload is `{"<requestType>": [<body>]}`. The body alone is
// what the pending-request filter compares against.

use serde::Serialize;
use serde_json::{Map, Value, json};
use strum::{Display, IntoStaticStr};

use crate::model::FrequencyRange;

/// Operation state reported in heartbeats for an active grant.
pub const OPERATION_STATE_GRANTED: &str = "GRANTED";

/// SAS request type; the string form is the payload key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RequestKind {
    RegistrationRequest,
    DeregistrationRequest,
    SpectrumInquiryRequest,
    GrantRequest,
    HeartbeatRequest,
    RelinquishmentRequest,
}

impl RequestKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A single SAS request body tagged with its type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    pub kind: RequestKind,
    pub data: Value,
}

impl Request {
    pub fn new(kind: RequestKind, data: Value) -> Self {
        Self { kind, data }
    }

    pub fn registration(user_id: &str, fcc_id: &str, serial_number: &str) -> Self {
        Self::new(
            RequestKind::RegistrationRequest,
            json!({
                "userId": user_id,
                "fccId": fcc_id,
                "cbsdSerialNumber": serial_number,
            }),
        )
    }

    pub fn deregistration(cbsd_id: &str) -> Self {
        Self::new(
            RequestKind::DeregistrationRequest,
            json!({ "cbsdId": cbsd_id }),
        )
    }

    pub fn spectrum_inquiry(cbsd_id: &str, range: FrequencyRange) -> Self {
        Self::new(
            RequestKind::SpectrumInquiryRequest,
            json!({
                "cbsdId": cbsd_id,
                "inquiredSpectrum": [frequency_range(range)],
            }),
        )
    }

    pub fn grant(cbsd_id: &str, max_eirp: f64, range: FrequencyRange) -> Self {
        Self::new(
            RequestKind::GrantRequest,
            json!({
                "cbsdId": cbsd_id,
                "operationParam": {
                    "maxEirp": eirp_number(max_eirp),
                    "operationFrequencyRange": frequency_range(range),
                },
            }),
        )
    }

    pub fn heartbeat(cbsd_id: &str, grant_id: &str, operation_state: &str) -> Self {
        Self::new(
            RequestKind::HeartbeatRequest,
            json!({
                "cbsdId": cbsd_id,
                "grantId": grant_id,
                "operationState": operation_state,
            }),
        )
    }

    pub fn relinquishment(cbsd_id: &str, grant_id: &str) -> Self {
        Self::new(
            RequestKind::RelinquishmentRequest,
            json!({
                "cbsdId": cbsd_id,
                "grantId": grant_id,
            }),
        )
    }

    /// Serialized request body, the unit of pending-request comparison.
    pub fn body(&self) -> String {
        self.data.to_string()
    }

    /// Full protocol payload: `{"<requestType>": [<body>]}`.
    pub fn payload(&self) -> String {
        let mut message = Map::new();
        message.insert(
            self.kind.as_str().to_owned(),
            Value::Array(vec![self.data.clone()]),
        );
        Value::Object(message).to_string()
    }
}

/// EIRP as a JSON number. Whole values carry no fraction (`15`, not
/// `15.0`) so bodies match what other SAS clients put on the wire, which
/// matters for the exact-text pending filter.
#[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
fn eirp_number(eirp: f64) -> Value {
    const EXACT_INT: f64 = 9_007_199_254_740_992.0;
    if eirp.fract().abs() < f64::EPSILON && eirp.abs() < EXACT_INT {
        json!(eirp as i64)
    } else {
        json!(eirp)
    }
}

/// Whole-Hz frequency object. Fractional Hz are truncated.
#[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
fn frequency_range(range: FrequencyRange) -> Value {
    json!({
        "lowFrequency": range.low as i64,
        "highFrequency": range.high as i64,
    })
}
