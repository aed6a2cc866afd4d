//! `log` backend for the browser console.
//!
//! On wasm32 records go to `console.error/warn/info/debug` so they land in
//! devtools with the right severity. Native builds hand off to `env_logger`,
//! so `RUST_LOG` overrides the level passed in.

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
use log::{Level, Log, Metadata, Record};

#[cfg(target_arch = "wasm32")]
pub struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
static LOGGER: ConsoleLogger = ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        let value = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Install the process logger. Returns `false` when another logger is
/// already registered (the level filter is left untouched in that case).
#[cfg(target_arch = "wasm32")]
pub fn init_console_logger(level: LevelFilter) -> bool {
    match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(level);
            true
        }
        Err(_) => false,
    }
}

/// Install the process logger. Returns `false` when another logger is
/// already registered (the level filter is left untouched in that case).
#[cfg(not(target_arch = "wasm32"))]
pub fn init_console_logger(level: LevelFilter) -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.to_string()))
        .try_init()
        .is_ok()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_refused_and_logging_still_works() {
        // Whichever call wins, a logger is registered afterwards.
        let _ = init_console_logger(LevelFilter::Debug);
        assert!(!init_console_logger(LevelFilter::Trace));
        assert_ne!(log::max_level(), LevelFilter::Off);

        log::warn!("logger smoke line");
        log::logger().flush();
    }
}
