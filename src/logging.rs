//! File-backed tracing setup.
//!
//! The picker owns the terminal while it runs, so diagnostics go to a log
//! file under the data directory instead of stderr. Verbosity is controlled
//! with the `GIFPICK_LOG` environment variable (`EnvFilter` syntax). Any
//! failure to set up logging is swallowed: a picker without logs is still a
//! working picker.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_ENV: &str = "GIFPICK_LOG";
const LOG_FILE: &str = "gifpick.log";

/// Install the global tracing subscriber. Safe to call once at startup.
pub fn initialize() {
	let Ok(dir) = app_dirs::get_data_dir() else {
		return;
	};
	if std::fs::create_dir_all(&dir).is_err() {
		return;
	}

	let Ok(file) = OpenOptions::new().create(true).append(true).open(dir.join(LOG_FILE)) else {
		return;
	};

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init();
}
