// Pulse Oxi: shared configuration surface
//
// Constants and state tags for the TTGO T-Display + MAX30100 pulse oximeter
// firmware, plus the debug-output sink and small helpers that go with them.

pub mod config;
pub mod debug;
pub mod layout;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_log;

pub use debug::{DebugSink, DefaultSink, LogSink, NoopSink};
pub use state::{BatteryState, FingerCheckState};
