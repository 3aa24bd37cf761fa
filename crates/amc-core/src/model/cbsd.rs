// ── CBSD domain types ──

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use strum::{Display, EnumString};

use super::channel::{Channel, EirpCapabilities};
use super::grant::Grant;

/// Registration state of a CBSD with the SAS. Used for both the desired
/// and the last-known actual state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CbsdState {
    #[default]
    Unregistered,
    Registered,
}

impl CbsdState {
    /// Parse a wire value. Anything unrecognized falls back to
    /// `Unregistered`, the zero value of the state enum on the wire.
    pub fn from_wire(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

/// One radio unit under management.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cbsd {
    /// SAS-assigned id; empty until registered.
    pub id: String,
    pub user_id: String,
    pub fcc_id: String,
    pub serial_number: String,
    pub state: CbsdState,
    /// Epoch seconds of the last report; 0 means never seen.
    pub last_seen_timestamp: i64,
    pub is_deleted: bool,
    pub channels: Vec<Channel>,
    pub eirp_capabilities: Option<EirpCapabilities>,
    pub grants: Vec<Grant>,
    /// Serialized request bodies still awaiting a SAS response.
    pub pending_requests: Vec<String>,
}

impl Cbsd {
    /// A CBSD is active when it reported within `inactivity_timeout` of `now`.
    pub fn is_active(&self, now: DateTime<Utc>, inactivity_timeout: Duration) -> bool {
        let Some(last_seen) = DateTime::from_timestamp(self.last_seen_timestamp, 0) else {
            return false;
        };
        match TimeDelta::from_std(inactivity_timeout) {
            Ok(limit) => now.signed_duration_since(last_seen) < limit,
            // Timeout beyond chrono's range: nothing is ever stale.
            Err(_) => true,
        }
    }
}

/// Desired state of one CBSD together with its actual state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActiveModeConfig {
    pub desired_state: CbsdState,
    pub cbsd: Cbsd,
}

/// Snapshot of every managed CBSD, in reconciliation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct State {
    pub active_mode_configs: Vec<ActiveModeConfig>,
}
