// ── Device status view ──
//
// Read-only per-CBSD summary of a snapshot: what the device looks like and
// what the generator would do with it right now.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::action::Action;
use crate::config::GeneratorConfig;
use crate::generator::{generate_for_config, matching_rule};
use crate::model::{ActiveModeConfig, CbsdState, State};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CbsdStatus {
    pub serial_number: String,
    pub cbsd_id: String,
    pub desired_state: CbsdState,
    pub state: CbsdState,
    pub is_active: bool,
    pub is_deleted: bool,
    pub grants: usize,
    pub channels: usize,
    /// Total bandwidth of offered channels in MHz.
    pub offered_mhz: f64,
    pub rule: Option<&'static str>,
    /// Names of the actions the generator would emit.
    pub planned: Vec<String>,
}

impl CbsdStatus {
    pub fn from_config(
        config: &ActiveModeConfig,
        now: DateTime<Utc>,
        generator: &GeneratorConfig,
    ) -> Self {
        let cbsd = &config.cbsd;
        let planned = generate_for_config(config, now, generator)
            .iter()
            .map(action_name)
            .collect();

        Self {
            serial_number: cbsd.serial_number.clone(),
            cbsd_id: cbsd.id.clone(),
            desired_state: config.desired_state,
            state: cbsd.state,
            is_active: cbsd.is_active(now, generator.inactivity_timeout),
            is_deleted: cbsd.is_deleted,
            grants: cbsd.grants.len(),
            channels: cbsd.channels.len(),
            offered_mhz: cbsd
                .channels
                .iter()
                .filter_map(|c| c.frequency_range.map(|r| r.bandwidth_mhz()))
                .sum(),
            rule: matching_rule(config, now, generator),
            planned,
        }
    }
}

fn action_name(action: &Action) -> String {
    match action {
        Action::Request(request) => request.kind.to_string(),
        Action::DeleteCbsd { .. } => "deleteCbsd".to_owned(),
    }
}

/// One status row per CBSD, in snapshot order.
pub fn status_report(
    state: &State,
    now: DateTime<Utc>,
    generator: &GeneratorConfig,
) -> Vec<CbsdStatus> {
    state
        .active_mode_configs
        .iter()
        .map(|config| CbsdStatus::from_config(config, now, generator))
        .collect()
}
