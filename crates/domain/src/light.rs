//! Light state — the relay pin level as seen by the rest of the system.

use serde::{Deserialize, Serialize};

/// Level of the relay output pin.
///
/// Owned and mutated exclusively by the poller; everything else only reads
/// it (exposed as "current light state" on the web surface).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightState {
    On,
    #[default]
    Off,
}

impl LightState {
    /// The numeric pin level (`1` for on, `0` for off) used by the
    /// `/get_light_state` JSON surface.
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Self::On => 1,
            Self::Off => 0,
        }
    }

    /// Whether the light is on.
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl std::fmt::Display for LightState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_off() {
        assert_eq!(LightState::default(), LightState::Off);
    }

    #[test]
    fn should_map_states_to_pin_levels() {
        assert_eq!(LightState::On.level(), 1);
        assert_eq!(LightState::Off.level(), 0);
    }

    #[test]
    fn should_display_lowercase_variant_name() {
        assert_eq!(LightState::On.to_string(), "on");
        assert_eq!(LightState::Off.to_string(), "off");
    }
}
