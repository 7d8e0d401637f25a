// Pulse Oxi: Firmware Entry Point
//
// Boot sequence:
//   1. Initialise ESP-IDF logging.
//   2. Log the configuration surface and validate it against the display.
//   3. Claim the two TTGO buttons and check they match the configured GPIOs.
//   4. Park the main thread. The tasks that consume this configuration live
//      outside this crate.

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use std::thread;
    use std::time::Duration;

    use esp_idf_hal::gpio::PinDriver;
    use esp_idf_hal::prelude::*;
    use pulse_oxi::config::*;
    use pulse_oxi::{debug_println, BatteryState, DefaultSink, FingerCheckState};

    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("{} firmware starting…", DEVICE_NAME);

    log_summary();
    if let Err(e) = validate(DISPLAY_SIZE) {
        log::error!("Configuration check FAILED: {}", e);
        return Err(e);
    }

    let mut dbg = DefaultSink::default();
    debug_println!(dbg, "splash image: {}", LOGO_PATH);

    // ---- Buttons ------------------------------------------------------------
    let peripherals = Peripherals::take()?;
    let left = PinDriver::input(peripherals.pins.gpio0)?;
    let right = PinDriver::input(peripherals.pins.gpio35)?;
    anyhow::ensure!(
        left.pin() == BUTTON_LEFT && right.pin() == BUTTON_RIGHT,
        "button GPIOs ({}, {}) do not match BUTTON_LEFT/BUTTON_RIGHT",
        left.pin(),
        right.pin()
    );
    debug_println!(
        dbg,
        "buttons at boot: left {} right {}",
        if left.is_low() { "pressed" } else { "released" },
        if right.is_low() { "pressed" } else { "released" }
    );

    debug_println!(
        dbg,
        "initial state: battery {}, finger {}",
        BatteryState::default().display_name(),
        FingerCheckState::default().display_name()
    );

    log::info!("Boot complete in {} ms", now_ms());

    // Main thread has nothing left to do; park it forever.
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}

// ---------------------------------------------------------------------------
// Utility: milliseconds since boot (wraps after ~49 days)
// ---------------------------------------------------------------------------
#[cfg(target_os = "espidf")]
fn now_ms() -> u32 {
    unsafe { (esp_idf_sys::esp_timer_get_time() / 1000) as u32 }
}

#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    pulse_oxi::config::validate(pulse_oxi::config::DISPLAY_SIZE)?;
    anyhow::bail!("{} firmware only runs on ESP-IDF targets", pulse_oxi::config::DEVICE_NAME)
}
