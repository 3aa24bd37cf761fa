// ── Domain model ──
//
// Read-only inputs to one reconciliation pass.

pub mod cbsd;
pub mod channel;
pub mod grant;

pub use cbsd::{ActiveModeConfig, Cbsd, CbsdState, State};
pub use channel::{Channel, EirpCapabilities, FrequencyRange};
pub use grant::{Grant, GrantState};
