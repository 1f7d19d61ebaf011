//! Console Logger
//!
//! `log` backend that writes to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.target(), &record.args().to_string());
        let msg = JsValue::from(line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// `[bookshelf_core::library] removed book 3 from position 1`
fn format_line(target: &str, message: &str) -> String {
    format!("[{}] {}", target, message)
}

/// Install the console logger. A second call only adjusts the level.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        web_sys::console::warn_1(&"[logging] logger already installed".into());
    }
    log::set_max_level(level);
}
