//! Logger setup and the shared "ignored action" log line.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use log::LevelFilter;

use crate::state::notes::NotesError;

/// Route `log` records and panics to the browser console.
///
/// Installs at `Trace` so that [`apply_level`] can later narrow the level once
/// configuration has been read.
#[cfg(feature = "csr")]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::warn!("console logger already installed");
    }
}

/// Set the maximum level that reaches the installed logger.
pub fn apply_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Record an editor action that did not apply.
///
/// These are silent no-ops for the user; they only show up at `debug`.
pub fn log_ignored<T>(action: &str, result: Result<T, NotesError>) {
    if let Err(err) = result {
        log::debug!("{action} ignored: {err}");
    }
}
