//! `run` and `once`: reconciliation against the live services.

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use amc_core::PassSummary;

use crate::cli::GlobalOpts;
use crate::config;
use crate::error::CliError;
use crate::output;

fn detail(s: &PassSummary) -> String {
    [
        format!("Devices:   {}", s.devices),
        format!("Generated: {}", s.generated),
        format!("Filtered:  {}", s.filtered),
        format!("Sent:      {}", s.sent),
        format!("Failed:    {}", s.failed),
    ]
    .join("\n")
}

/// Single pass. Undelivered actions turn into a non-zero exit.
pub async fn once(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load(global)?;
    let reconciler = config::build_reconciler(&cfg)?;

    let summary = reconciler.reconcile_once(Utc::now()).await?;

    let out = output::render_single(&global.output, &summary, detail, |s| {
        format!("{} {}", s.sent, s.failed)
    })?;
    output::print_output(&out, global.quiet);

    if summary.failed > 0 {
        return Err(CliError::DispatchIncomplete {
            failed: summary.failed,
            total: summary.sent + summary.failed,
        });
    }
    Ok(())
}

/// Periodic passes until Ctrl-C.
pub async fn run(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load(global)?;
    let reconciler = config::build_reconciler(&cfg)?;

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("shutdown requested"),
            Err(e) => warn!(error = %e, "cannot listen for Ctrl-C, stopping"),
        }
        shutdown.cancel();
    });

    reconciler.run(cancel).await;
    Ok(())
}
