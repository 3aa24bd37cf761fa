// ── Runtime engine configuration ──
//
// Explicit values threaded into every generator call and reconciliation
// pass. Core never reads config files; amc-config builds these.

use std::time::Duration;

/// Inputs to message generation besides the snapshot and `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// A CBSD not seen for this long is inactive.
    pub inactivity_timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            inactivity_timeout: Duration::from_secs(4 * 60 * 60),
        }
    }
}

/// Configuration for the reconciliation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcilerConfig {
    pub generator: GeneratorConfig,
    /// Delay between reconciliation passes in `run` mode.
    pub polling_interval: Duration,
    /// Upper bound on a single action delivery.
    pub send_timeout: Duration,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            polling_interval: Duration::from_secs(10),
            send_timeout: Duration::from_secs(30),
        }
    }
}
