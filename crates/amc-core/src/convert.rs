// ── API-to-domain type conversions ──
//
// Bridges raw `amc_api::types` snapshots into the `amc_core::model`
// domain types. State strings are parsed into enums, and absent optional
// data gets the defaults the generator expects.

use amc_api::types as wire;

use crate::model::{
    ActiveModeConfig, Cbsd, CbsdState, Channel, EirpCapabilities, FrequencyRange, Grant,
    GrantState, State,
};

impl From<wire::State> for State {
    fn from(raw: wire::State) -> Self {
        Self {
            active_mode_configs: raw
                .active_mode_configs
                .into_iter()
                .map(ActiveModeConfig::from)
                .collect(),
        }
    }
}

impl From<wire::ActiveModeConfig> for ActiveModeConfig {
    fn from(raw: wire::ActiveModeConfig) -> Self {
        Self {
            desired_state: CbsdState::from_wire(&raw.desired_state),
            cbsd: raw.cbsd.map(Cbsd::from).unwrap_or_default(),
        }
    }
}

impl From<wire::Cbsd> for Cbsd {
    fn from(raw: wire::Cbsd) -> Self {
        Self {
            id: raw.id,
            user_id: raw.user_id,
            fcc_id: raw.fcc_id,
            serial_number: raw.serial_number,
            state: CbsdState::from_wire(&raw.state),
            last_seen_timestamp: raw.last_seen_timestamp,
            is_deleted: raw.is_deleted,
            channels: raw.channels.into_iter().map(Channel::from).collect(),
            eirp_capabilities: raw.eirp_capabilities.map(EirpCapabilities::from),
            grants: raw.grants.into_iter().map(Grant::from).collect(),
            pending_requests: raw.pending_requests,
        }
    }
}

impl From<wire::Grant> for Grant {
    fn from(raw: wire::Grant) -> Self {
        Self {
            id: raw.id,
            state: GrantState::from_wire(&raw.state),
        }
    }
}

impl From<wire::Channel> for Channel {
    fn from(raw: wire::Channel) -> Self {
        Self {
            frequency_range: raw
                .frequency_range
                .map(|r| FrequencyRange::new(r.low, r.high)),
            max_eirp: raw.max_eirp,
        }
    }
}

impl From<wire::EirpCapabilities> for EirpCapabilities {
    fn from(raw: wire::EirpCapabilities) -> Self {
        Self {
            min_power: raw.min_power,
            max_power: raw.max_power,
            antenna_gain: raw.antenna_gain,
            number_of_ports: raw.number_of_ports,
        }
    }
}
