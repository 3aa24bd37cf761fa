// ── Reconciliation driver ──
//
// One pass: fetch the snapshot, generate actions per CBSD, drop requests
// already pending for that CBSD, dispatch the rest. `run` repeats the pass
// on a fixed interval until cancelled.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::ReconcilerConfig;
use crate::dispatch::dispatch_all;
use crate::error::CoreError;
use crate::filter::filter_actions;
use crate::generator::generate_for_config;
use crate::sink::{SinkProvider, StateSource};

/// Counters for one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    /// CBSDs in the snapshot.
    pub devices: usize,
    /// Actions produced by the generator.
    pub generated: usize,
    /// Requests dropped because they were already pending.
    pub filtered: usize,
    pub sent: usize,
    pub failed: usize,
}

pub struct Reconciler<S, P> {
    config: ReconcilerConfig,
    source: S,
    sinks: P,
}

impl<S: StateSource, P: SinkProvider> Reconciler<S, P> {
    pub fn new(config: ReconcilerConfig, source: S, sinks: P) -> Self {
        Self {
            config,
            source,
            sinks,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run a single pass against the snapshot as of `now`.
    ///
    /// Fails only when the snapshot cannot be fetched; individual send
    /// failures are counted in the summary.
    pub async fn reconcile_once(&self, now: DateTime<Utc>) -> Result<PassSummary, CoreError> {
        let state = self.source.fetch_state().await?;

        let mut summary = PassSummary {
            devices: state.active_mode_configs.len(),
            ..PassSummary::default()
        };
        let mut actions = Vec::new();

        for config in &state.active_mode_configs {
            let generated = generate_for_config(config, now, &self.config.generator);
            let produced = generated.len();
            let kept = filter_actions(&config.cbsd.pending_requests, generated);

            summary.generated += produced;
            summary.filtered += produced - kept.len();
            actions.extend(kept);
        }

        debug!(actions = actions.len(), "dispatching pass");
        let report = dispatch_all(&actions, &self.sinks, self.config.send_timeout).await;
        summary.sent = report.sent;
        summary.failed = report.failed();

        info!(
            devices = summary.devices,
            generated = summary.generated,
            filtered = summary.filtered,
            sent = summary.sent,
            failed = summary.failed,
            "reconciliation pass complete"
        );
        Ok(summary)
    }

    /// Reconcile every `polling_interval` until `cancel` fires. The first
    /// pass runs immediately.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(self.config.polling_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        info!(
            interval_secs = self.config.polling_interval.as_secs(),
            "reconciler started"
        );

        loop {
            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                _ = interval.tick() => {
                    if let Err(e) = self.reconcile_once(Utc::now()).await {
                        warn!(error = %e, transient = e.is_transient(), "reconciliation pass failed");
                    }
                }
            }
        }

        info!("reconciler stopped");
    }
}
