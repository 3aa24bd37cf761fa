// ── Batch dispatch ──
//
// Sends a pass worth of actions one at a time, in order. A failed or
// timed-out send is recorded and left for the next pass; it never stops
// the remaining actions.

use std::time::Duration;

use tracing::{debug, warn};

use crate::action::Action;
use crate::error::CoreError;
use crate::sink::SinkProvider;

/// One action that could not be delivered.
#[derive(Debug)]
pub struct DispatchFailure {
    pub action: Action,
    pub error: CoreError,
}

/// Outcome of [`dispatch_all`].
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub sent: usize,
    pub failures: Vec<DispatchFailure>,
}

impl DispatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Deliver every action in order, bounding each call by `send_timeout`.
pub async fn dispatch_all<P: SinkProvider>(
    actions: &[Action],
    provider: &P,
    send_timeout: Duration,
) -> DispatchReport {
    let mut report = DispatchReport::default();

    for action in actions {
        let result = match tokio::time::timeout(send_timeout, action.send(provider)).await {
            Ok(result) => result,
            Err(_) => Err(CoreError::Timeout {
                timeout_secs: send_timeout.as_secs(),
            }),
        };

        match result {
            Ok(outcome) => {
                debug!(%action, ?outcome, "action sent");
                report.sent += 1;
            }
            Err(error) => {
                warn!(%action, error = %error, transient = error.is_transient(), "action send failed");
                report.failures.push(DispatchFailure {
                    action: action.clone(),
                    error,
                });
            }
        }
    }

    report
}
