//! Tracing output routed to the browser console
//!
//! `tracing-subscriber`'s fmt layer formats each event into a writer obtained
//! from [`ConsoleMakeWriter`]; the writer buffers the line and hands it to the
//! `console` method matching the event level when dropped.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// `console` method an event is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
    Log,
}

impl ConsoleMethod {
    #[must_use]
    pub fn for_level(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else if level == Level::INFO {
            Self::Info
        } else if level == Level::DEBUG {
            Self::Debug
        } else {
            Self::Log
        }
    }

    fn emit(self, line: &str) {
        let value = wasm_bindgen::JsValue::from_str(line);
        match self {
            Self::Error => web_sys::console::error_1(&value),
            Self::Warn => web_sys::console::warn_1(&value),
            Self::Info => web_sys::console::info_1(&value),
            Self::Debug => web_sys::console::debug_1(&value),
            Self::Log => web_sys::console::log_1(&value),
        }
    }
}

/// Hands out one [`ConsoleWriter`] per formatted event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

/// Buffers one formatted event and writes it to the console on drop
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    #[must_use]
    pub const fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }

    /// Buffered text without the trailing newline the formatter appends
    #[must_use]
    pub fn pending_line(&self) -> String {
        String::from_utf8_lossy(&self.buffer)
            .trim_end_matches(['\n', '\r'])
            .to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let line = self.pending_line();
        self.buffer.clear();
        if !line.is_empty() {
            self.method.emit(&line);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(*meta.level()))
    }
}

/// Installs the console subscriber as the global default.
///
/// Timestamps are disabled since `wasm32-unknown-unknown` has no system clock.
/// Returns `false` if a global subscriber was already installed.
pub fn init(level: LevelFilter) -> bool {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .without_time()
        .with_target(true)
        .try_init()
        .is_ok()
}
