// Pulse Oxi: Hardware & System Configuration
// Target: LilyGO TTGO T-Display (ESP32) + MAX30100 pulse oximeter

use anyhow::ensure;
use embedded_graphics::geometry::Size;

// ---------------------------------------------------------------------------
// Device Info
// ---------------------------------------------------------------------------
pub const DEVICE_NAME: &str = "Pulse Oxi";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOGO_PATH: &str = "/CIRCUSPI_logo.jpg"; // SPIFFS path of the splash image

// ---------------------------------------------------------------------------
// Development Settings
// ---------------------------------------------------------------------------
/// Set by the `debug-mode` cargo feature. Selects [`crate::debug::DefaultSink`].
pub const DEBUG_MODE: bool = cfg!(feature = "debug-mode");

// ---------------------------------------------------------------------------
// TTGO Button GPIO
// ---------------------------------------------------------------------------
pub const BUTTON_LEFT: i32 = 0;   // BOOT button (active LOW)
pub const BUTTON_RIGHT: i32 = 35; // input-only pin, external pull-up

// ---------------------------------------------------------------------------
// Timing (milliseconds)
// ---------------------------------------------------------------------------
pub const SENSOR_GET_TIMER_MS: u64 = 800;
pub const PULSE_GET_TIMER_MS: u64 = 20;
pub const CHART_CLEAR_TIMER_MS: u64 = 2000;
pub const CHRG_BAT_ICON_TIMER_MS: u64 = 500;
pub const DISCHRG_BAT_ICON_TIMER_MS: u64 = 10_000;
pub const SHOW_SENSOR_DATA_TIMER_MS: u64 = 1000;
pub const FINGER_OUT_TIMEOUT_MS: u64 = 7000;

/// Every timer above, by name.
pub const TIMERS: [(&str, u64); 7] = [
    ("SENSOR_GET_TIMER_MS", SENSOR_GET_TIMER_MS),
    ("PULSE_GET_TIMER_MS", PULSE_GET_TIMER_MS),
    ("CHART_CLEAR_TIMER_MS", CHART_CLEAR_TIMER_MS),
    ("CHRG_BAT_ICON_TIMER_MS", CHRG_BAT_ICON_TIMER_MS),
    ("DISCHRG_BAT_ICON_TIMER_MS", DISCHRG_BAT_ICON_TIMER_MS),
    ("SHOW_SENSOR_DATA_TIMER_MS", SHOW_SENSOR_DATA_TIMER_MS),
    ("FINGER_OUT_TIMEOUT_MS", FINGER_OUT_TIMEOUT_MS),
];

// ---------------------------------------------------------------------------
// Buffer Sizes (samples)
// ---------------------------------------------------------------------------
pub const HEART_RATE_BUFF_SIZE: usize = 10;
pub const PULSE_BUFF_SIZE: usize = 50;
pub const CHART_BUFF_SIZE: usize = 240; // one sample per display column

// ---------------------------------------------------------------------------
// Display (ST7789 TFT, landscape)
// ---------------------------------------------------------------------------
pub const DISPLAY_WIDTH: u32 = 240;
pub const DISPLAY_HEIGHT: u32 = 135;
pub const DISPLAY_SIZE: Size = Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);

// ---------------------------------------------------------------------------
// Battery
// ---------------------------------------------------------------------------
pub const ICON_WIDTH: u32 = 70;
pub const ICON_HEIGHT: u32 = 36;
pub const STATUS_HEIGHT_BAR: u32 = ICON_HEIGHT;
pub const MIN_USB_VOL: f32 = 4.7; // volts
pub const ADC_PIN: u32 = 34;      // ADC1_CH6, battery divider
pub const CONV_FACTOR: f32 = 1.8;
pub const READS: usize = 20;      // ADC samples per voltage reading

// ---------------------------------------------------------------------------
// Sensor
// ---------------------------------------------------------------------------
pub const FINGER_ON_VALUE: u32 = 7000; // raw IR level

// Invariants that must hold for any build.
const _: () = assert!(STATUS_HEIGHT_BAR == ICON_HEIGHT);
const _: () = {
    let mut i = 0;
    while i < TIMERS.len() {
        assert!(TIMERS[i].1 > 0, "timer intervals must be non-zero");
        i += 1;
    }
};

/// Check the configuration against the display it will be drawn on.
///
/// The compile-time assertions above cover the display-independent
/// invariants; they are repeated here so a boot log names the offending
/// constant.
pub fn validate(display: Size) -> anyhow::Result<()> {
    for (name, ms) in TIMERS {
        ensure!(ms > 0, "{name} must be greater than zero");
    }

    ensure!(
        STATUS_HEIGHT_BAR == ICON_HEIGHT,
        "STATUS_HEIGHT_BAR ({STATUS_HEIGHT_BAR}) must equal ICON_HEIGHT ({ICON_HEIGHT})"
    );

    for (name, size) in [
        ("HEART_RATE_BUFF_SIZE", HEART_RATE_BUFF_SIZE),
        ("PULSE_BUFF_SIZE", PULSE_BUFF_SIZE),
        ("CHART_BUFF_SIZE", CHART_BUFF_SIZE),
        ("READS", READS),
    ] {
        ensure!(size > 0, "{name} must be greater than zero");
    }

    ensure!(
        ICON_WIDTH <= display.width && ICON_HEIGHT <= display.height,
        "battery icon ({ICON_WIDTH}x{ICON_HEIGHT}) does not fit a {}x{} display",
        display.width,
        display.height
    );
    ensure!(
        CHART_BUFF_SIZE <= display.width as usize,
        "CHART_BUFF_SIZE ({CHART_BUFF_SIZE}) exceeds display width ({})",
        display.width
    );

    Ok(())
}

/// Log the configuration surface at boot.
pub fn log_summary() {
    log::info!("{} v{} (debug mode: {})", DEVICE_NAME, VERSION, DEBUG_MODE);
    log::info!(
        "Buttons: left GPIO{} right GPIO{} | battery ADC GPIO{}",
        BUTTON_LEFT,
        BUTTON_RIGHT,
        ADC_PIN
    );
    for (name, ms) in TIMERS {
        log::info!("  {:<26} {:>6} ms", name, ms);
    }
}
