// ── Frequency / power policy ──
//
// Decides whether a CBSD can operate on an offered channel and at which
// EIRP. All values are dBm (per MHz for channel limits) and Hz.

use crate::model::{Channel, EirpCapabilities, FrequencyRange};

/// The CBRS band searched by spectrum inquiries when nothing better is known.
pub const FULL_BAND: FrequencyRange = FrequencyRange::new(3_550_000_000.0, 3_700_000_000.0);

/// Gain from driving `ports` antenna ports at equal power: 10·log10(ports).
///
/// Zero for a single port. A port count of zero is treated as one.
pub fn port_adjustment(ports: u32) -> f64 {
    10.0 * f64::from(ports.max(1)).log10()
}

impl EirpCapabilities {
    /// Lowest EIRP the device can emit.
    pub fn min_eirp(&self) -> f64 {
        self.min_power + self.antenna_gain + port_adjustment(self.number_of_ports)
    }

    /// Highest EIRP the device can emit.
    pub fn max_eirp(&self) -> f64 {
        self.max_power + self.antenna_gain + port_adjustment(self.number_of_ports)
    }
}

/// A channel is suitable when the device can go at least as low as the
/// channel's EIRP limit. Channels without a limit or a range are never
/// suitable.
pub fn is_suitable(capabilities: &EirpCapabilities, channel: &Channel) -> bool {
    channel.frequency_range.is_some()
        && channel
            .max_eirp
            .is_some_and(|limit| capabilities.min_eirp() <= limit)
}

/// EIRP to request on a suitable channel; `None` when unsuitable.
pub fn operating_eirp(capabilities: &EirpCapabilities, channel: &Channel) -> Option<f64> {
    let limit = channel.max_eirp?;
    is_suitable(capabilities, channel).then(|| limit.min(capabilities.max_eirp()))
}
