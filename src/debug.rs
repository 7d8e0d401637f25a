// Pulse Oxi: Debug Output
//
// Debug prints go through a `DebugSink` owned by the caller. With the
// `debug-mode` feature off, `DefaultSink` is the zero-sized `NoopSink` and
// every `debug_print!` / `debug_println!` through it expands to a dead
// branch: its format arguments are never evaluated.

use core::fmt::{self, Write};

pub trait DebugSink {
    /// Whether the macros evaluate their arguments for this sink at all.
    const ENABLED: bool;

    /// Append to the current line.
    fn print(&mut self, args: fmt::Arguments<'_>);
    /// Append to the current line and terminate it.
    fn println(&mut self, args: fmt::Arguments<'_>);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DebugSink for NoopSink {
    const ENABLED: bool = false;

    #[inline(always)]
    fn print(&mut self, _args: fmt::Arguments<'_>) {}

    #[inline(always)]
    fn println(&mut self, _args: fmt::Arguments<'_>) {}
}

/// Forwards complete lines to the `log` facade under [`LogSink::TARGET`].
///
/// Lines go out at `info`, the ESP-IDF default level, so enabling
/// `debug-mode` is enough to see them on the serial console. `print`
/// fragments are held until the next `println`, since a log record cannot
/// be continued once emitted.
#[derive(Debug, Default)]
pub struct LogSink {
    line: String,
}

impl LogSink {
    pub const TARGET: &'static str = "pulse_oxi::debug";

    pub fn new() -> Self {
        Self::default()
    }

    /// Text printed since the last `println`.
    pub fn pending(&self) -> &str {
        &self.line
    }
}

impl DebugSink for LogSink {
    const ENABLED: bool = true;

    fn print(&mut self, args: fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        let _ = self.line.write_fmt(args);
    }

    fn println(&mut self, args: fmt::Arguments<'_>) {
        if self.line.is_empty() {
            log::info!(target: Self::TARGET, "{}", args);
        } else {
            let _ = self.line.write_fmt(args);
            log::info!(target: Self::TARGET, "{}", self.line);
            self.line.clear();
        }
    }
}

impl<S: DebugSink + ?Sized> DebugSink for &mut S {
    const ENABLED: bool = S::ENABLED;

    fn print(&mut self, args: fmt::Arguments<'_>) {
        (**self).print(args)
    }

    fn println(&mut self, args: fmt::Arguments<'_>) {
        (**self).println(args)
    }
}

#[cfg(feature = "debug-mode")]
pub type DefaultSink = LogSink;
#[cfg(not(feature = "debug-mode"))]
pub type DefaultSink = NoopSink;

/// `S::ENABLED` for the sink behind a reference, usable from the macros
/// without naming the sink's type.
#[inline(always)]
pub const fn enabled<S: DebugSink + ?Sized>(_sink: &S) -> bool {
    S::ENABLED
}

/// Print to a [`DebugSink`] without ending the line.
#[macro_export]
macro_rules! debug_print {
    ($sink:expr, $($arg:tt)*) => {{
        let sink = &mut $sink;
        if $crate::debug::enabled(&*sink) {
            $crate::debug::DebugSink::print(sink, ::core::format_args!($($arg)*));
        }
    }};
}

/// Print a line to a [`DebugSink`].
#[macro_export]
macro_rules! debug_println {
    ($sink:expr) => {
        $crate::debug_println!($sink, "")
    };
    ($sink:expr, $($arg:tt)*) => {{
        let sink = &mut $sink;
        if $crate::debug::enabled(&*sink) {
            $crate::debug::DebugSink::println(sink, ::core::format_args!($($arg)*));
        }
    }};
}
