// ── Grant domain types ──

use serde::Serialize;
use strum::{Display, EnumString};

/// Grant state as reported by the SAS.
///
/// Only `Granted` is heartbeated; every other state, including ones this
/// engine does not recognize, leads to relinquishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[non_exhaustive]
pub enum GrantState {
    Granted,
    Authorized,
    Unsync,
    Unknown,
}

impl GrantState {
    /// Parse a wire value, mapping anything unrecognized to `Unknown`.
    pub fn from_wire(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::Unknown)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grant {
    pub id: String,
    pub state: GrantState,
}

#[cfg(test)]
mod tests {
    use super::GrantState;

    #[test]
    fn wire_values_parse_case_insensitively() {
        assert_eq!(GrantState::from_wire("granted"), GrantState::Granted);
        assert_eq!(GrantState::from_wire("UNSYNC"), GrantState::Unsync);
        assert_eq!(GrantState::from_wire("terminated"), GrantState::Unknown);
        assert_eq!(GrantState::from_wire(""), GrantState::Unknown);
    }
}
