//! Routes records of the `log` facade through a [`Logger`]
//!
//! ```no_run
//! use styled_logger::Logger;
//! use log::LevelFilter;
//!
//! Logger::new().install(LevelFilter::Debug).unwrap();
//! log::warn!("disk almost full");
//! ```

use super::error::Result;
use super::log_type::Preset;
use super::logger::Logger;
use log::{Level, LevelFilter, Log, Metadata, Record};

impl From<Level> for Preset {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Preset::Error,
            Level::Warn => Preset::Warn,
            Level::Info => Preset::Info,
            Level::Debug | Level::Trace => Preset::Debug,
        }
    }
}

impl Log for Logger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let preset = Preset::from(record.level());
        if let Err(e) = self.write(preset, record.args().to_string()) {
            eprintln!("[LOGGER ERROR] Failed to write {} record: {}", preset, e);
        }
    }

    fn flush(&self) {
        if let Err(e) = Logger::flush(self) {
            eprintln!("[LOGGER ERROR] Flush failed: {}", e);
        }
    }
}

impl Logger {
    /// Install this logger as the global `log` implementation.
    ///
    /// Fails if another logger was already installed.
    pub fn install(self, max_level: LevelFilter) -> Result<()> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}
