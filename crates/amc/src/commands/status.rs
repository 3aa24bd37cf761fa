//! Per-device status table for a snapshot file.

use tabled::Tabled;

use amc_core::{CbsdStatus, status_report};

use crate::cli::{GlobalOpts, StatusArgs};
use crate::config;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "CBSD ID")]
    cbsd_id: String,
    #[tabled(rename = "Desired")]
    desired: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Active")]
    active: String,
    #[tabled(rename = "Grants")]
    grants: usize,
    #[tabled(rename = "Channels")]
    channels: String,
    #[tabled(rename = "Next")]
    planned: String,
}

impl From<&CbsdStatus> for StatusRow {
    fn from(s: &CbsdStatus) -> Self {
        let state = if s.is_deleted {
            format!("{} (deleted)", s.state)
        } else {
            s.state.to_string()
        };
        Self {
            serial: s.serial_number.clone(),
            cbsd_id: if s.cbsd_id.is_empty() {
                "-".into()
            } else {
                s.cbsd_id.clone()
            },
            desired: s.desired_state.to_string(),
            state,
            active: util::yes_no(s.is_active),
            grants: s.grants,
            channels: if s.channels == 0 {
                "0".into()
            } else {
                format!("{} ({:.0} MHz)", s.channels, s.offered_mhz)
            },
            planned: if s.planned.is_empty() {
                "-".into()
            } else {
                s.planned.join(", ")
            },
        }
    }
}

pub fn handle(args: &StatusArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let generator = config::load(global)?.to_reconciler_config().generator;
    let state = util::read_state(&args.state)?;
    let now = util::resolve_now(args.now)?;

    let rows = status_report(&state, now, &generator);
    let out = output::render_list(&global.output, &rows, |s| StatusRow::from(s), |s| {
        s.serial_number.clone()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
