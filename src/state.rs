// Pulse Oxi: Shared State Tags

use std::time::Duration;

use crate::config::*;

// ---------------------------------------------------------------------------
// Battery State
// ---------------------------------------------------------------------------
/// Charge status, assigned by the battery monitor on each sampling tick and
/// read by the display to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BatteryState {
    Charging,
    Discharging,
    /// No reading yet, or no battery attached.
    #[default]
    None,
}

impl BatteryState {
    pub const ALL: [Self; 3] = [Self::Charging, Self::Discharging, Self::None];

    /// Human-readable label (kept for debugging/logging purposes).
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Charging    => "charging",
            Self::Discharging => "discharging",
            Self::None        => "none",
        }
    }

    /// How often the battery icon is redrawn in this state.
    pub fn icon_timer(&self) -> Option<Duration> {
        match self {
            Self::Charging    => Some(Duration::from_millis(CHRG_BAT_ICON_TIMER_MS)),
            Self::Discharging => Some(Duration::from_millis(DISCHRG_BAT_ICON_TIMER_MS)),
            Self::None        => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Finger-Check State
// ---------------------------------------------------------------------------
/// Phases of detecting that the finger has left the sensor, used for the
/// [`FINGER_OUT_TIMEOUT_MS`] alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FingerCheckState {
    #[default]
    Checking,
    FingerOutStart,
    FingerOutKeep,
}

impl FingerCheckState {
    pub const ALL: [Self; 3] = [Self::Checking, Self::FingerOutStart, Self::FingerOutKeep];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Checking       => "checking",
            Self::FingerOutStart => "finger out (start)",
            Self::FingerOutKeep  => "finger out (keep)",
        }
    }

    pub fn is_finger_out(&self) -> bool {
        matches!(self, Self::FingerOutStart | Self::FingerOutKeep)
    }
}
