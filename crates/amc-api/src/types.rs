// Wire types for the active-mode and radio-controller services.
//
// These mirror the JSON exchanged with the services field-for-field.
// Optional and defaulted fields tolerate partial snapshots; the domain
// model in amc-core decides what missing data means.

use serde::{Deserialize, Serialize};

// ── State snapshot ──────────────────────────────────────────────────

/// Full snapshot of every managed CBSD, as served by `GET /state`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(default)]
    pub active_mode_configs: Vec<ActiveModeConfig>,
}

/// Desired state of one CBSD together with its last-known actual state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveModeConfig {
    #[serde(default)]
    pub desired_state: String,
    #[serde(default)]
    pub cbsd: Option<Cbsd>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cbsd {
    pub id: String,
    pub user_id: String,
    pub fcc_id: String,
    pub serial_number: String,
    pub state: String,
    pub last_seen_timestamp: i64,
    pub is_deleted: bool,
    pub grants: Vec<Grant>,
    pub channels: Vec<Channel>,
    pub pending_requests: Vec<String>,
    pub eirp_capabilities: Option<EirpCapabilities>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Grant {
    pub id: String,
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(default)]
    pub frequency_range: Option<FrequencyRange>,
    #[serde(default)]
    pub max_eirp: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRange {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EirpCapabilities {
    pub min_power: f64,
    pub max_power: f64,
    pub antenna_gain: f64,
    pub number_of_ports: u32,
}

// ── Requests ────────────────────────────────────────────────────────

/// A serialized SAS request payload bound for the radio controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub payload: String,
}

/// Database ids assigned to an uploaded request payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDbIds {
    #[serde(default)]
    pub ids: Vec<i64>,
}

/// Local cleanup instruction for the device registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCbsdRequest {
    pub serial_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCbsdResponse {}
