//! Capturing `log` backend for unit tests.
//!
//! The logger is process-wide while the test harness runs tests on separate
//! threads, so records are tagged with the thread that emitted them and
//! [`take`] only returns the caller's own.

use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Debug, Clone)]
pub struct Captured {
    pub level: Level,
    pub target: String,
    pub message: String,
}

struct CaptureLogger {
    records: Mutex<Vec<(ThreadId, Captured)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let captured = Captured {
            level: record.level(),
            target: record.target().to_owned(),
            message: record.args().to_string(),
        };
        if let Ok(mut records) = self.records.lock() {
            records.push((thread::current().id(), captured));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

/// Install the capturing logger (idempotent) and drop anything this thread
/// logged before.
pub fn init() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger installed in tests");
        log::set_max_level(LevelFilter::Trace);
    });
    take();
}

/// Records emitted by the current thread since the last call.
pub fn take() -> Vec<Captured> {
    let id = thread::current().id();
    let mut records = LOGGER.records.lock().expect("capture lock poisoned");
    let (mine, others): (Vec<_>, Vec<_>) = records.drain(..).partition(|(t, _)| *t == id);
    *records = others;
    mine.into_iter().map(|(_, c)| c).collect()
}
