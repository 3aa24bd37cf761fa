// ── Spectrum domain types ──

use serde::Serialize;

/// A frequency window in Hz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FrequencyRange {
    pub low: f64,
    pub high: f64,
}

impl FrequencyRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Width of the window in MHz.
    pub fn bandwidth_mhz(&self) -> f64 {
        (self.high - self.low) / 1e6
    }
}

/// A channel the SAS offered, with its maximum permitted EIRP (dBm/MHz).
/// Either half may be missing from a partial snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Channel {
    pub frequency_range: Option<FrequencyRange>,
    pub max_eirp: Option<f64>,
}

/// Power envelope of a CBSD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EirpCapabilities {
    /// Minimum conducted power per port (dBm).
    pub min_power: f64,
    /// Maximum conducted power per port (dBm).
    pub max_power: f64,
    /// Antenna gain (dBi).
    pub antenna_gain: f64,
    pub number_of_ports: u32,
}
