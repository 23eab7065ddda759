//! `tracing` output routed to the browser console.

use std::{io, sync::Once};

use tracing::{Level, Metadata};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter},
    prelude::*,
    util::SubscriberInitExt,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Filter used when none is configured.
pub const DEFAULT_FILTER: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Buffers one formatted event and hands it to the console method matching
/// its level when dropped.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    fn emit(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buffer);
        let message = JsValue::from_str(text.trim_end());
        match self.level {
            Level::ERROR => console::error_1(&message),
            Level::WARN => console::warn_1(&message),
            Level::INFO => console::info_1(&message),
            Level::DEBUG => console::log_1(&message),
            _ => console::debug_1(&message),
        }
        self.buffer.clear();
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

/// [`MakeWriter`] producing a [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Installs the console subscriber (idempotent).
///
/// `filter` uses `EnvFilter` directives, e.g. `"info,innerscope_core=debug"`.
/// An unparsable filter falls back to [`DEFAULT_FILTER`].
pub fn install_tracing(filter: &str) {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let console = fmt::layer()
            .with_writer(ConsoleMakeWriter)
            .with_ansi(false)
            .without_time()
            .with_level(false)
            .with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            console::warn_1(&JsValue::from_str(
                "innerscope: a tracing subscriber is already installed",
            ));
        }
    });
}

/// Routes panics to `console.error` (idempotent).
pub fn install_panic_hook() {
    console_error_panic_hook::set_once();
}
