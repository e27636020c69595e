//! Logging bootstrap for embedding shells.
//!
//! The engine logs through the `log` facade; a host that wants those
//! lines calls [`init`] once at startup. Initialization is idempotent:
//! repeated calls, including from tests running in one process, are
//! no-ops after the first.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Initializes stderr logging with the given level spec (e.g. `"info"`,
/// `"menhir_session=debug"`).
///
/// # Errors
///
/// Returns a human-readable message when the spec cannot be parsed or
/// the logger fails to start. Already-initialized is not an error.
pub fn init(spec: &str) -> Result<(), String> {
    LOGGER
        .get_or_try_init(|| {
            Logger::try_with_str(spec)
                .map_err(|e| e.to_string())?
                .log_to_stderr()
                .start()
                .map_err(|e| e.to_string())
        })
        .map(|_| ())
}

/// Returns true if logging has been initialized in this process.
#[must_use]
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}
