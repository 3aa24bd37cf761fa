//! Offline action generation from a snapshot file.

use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use amc_core::{Action, filter_actions, generate_for_config};

use crate::cli::{GenerateArgs, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

use super::util;

/// One generated action and the CBSD it belongs to.
#[derive(Debug, Serialize)]
struct PlannedAction {
    serial_number: String,
    cbsd_id: String,
    action: Action,
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PlannedRow {
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "CBSD ID")]
    cbsd_id: String,
    #[tabled(rename = "Action")]
    kind: String,
    #[tabled(rename = "Body")]
    body: String,
}

impl From<&PlannedAction> for PlannedRow {
    fn from(p: &PlannedAction) -> Self {
        let (kind, body) = match &p.action {
            Action::Request(request) => (request.kind.to_string(), request.body()),
            Action::DeleteCbsd { .. } => ("deleteCbsd".into(), "-".into()),
        };
        Self {
            serial: p.serial_number.clone(),
            cbsd_id: if p.cbsd_id.is_empty() {
                "-".into()
            } else {
                p.cbsd_id.clone()
            },
            kind,
            body,
        }
    }
}

/// Plain output: the exact protocol payload for requests.
fn line(p: &PlannedAction) -> String {
    match &p.action {
        Action::Request(request) => request.payload(),
        Action::DeleteCbsd { serial_number } => format!("deleteCbsd {serial_number}"),
    }
}

pub fn handle(args: &GenerateArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let generator = config::load(global)?.to_reconciler_config().generator;
    let state = util::read_state(&args.state)?;
    let now = util::resolve_now(args.now)?;

    let mut planned = Vec::new();
    for entry in &state.active_mode_configs {
        let cbsd = &entry.cbsd;
        let mut actions = generate_for_config(entry, now, &generator);
        if args.pending {
            let before = actions.len();
            actions = filter_actions(&cbsd.pending_requests, actions);
            debug!(
                serial_number = %cbsd.serial_number,
                dropped = before - actions.len(),
                "applied pending filter"
            );
        }
        planned.extend(actions.into_iter().map(|action| PlannedAction {
            serial_number: cbsd.serial_number.clone(),
            cbsd_id: cbsd.id.clone(),
            action,
        }));
    }

    let out = output::render_list(&global.output, &planned, |p| PlannedRow::from(p), line)?;
    output::print_output(&out, global.quiet);
    Ok(())
}
