mod cli;
mod config;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, render_outcome};
use config::Config;
use gifpick::{HttpProvider, PickerOptions, RecencyStore, app_dirs, logging};

fn main() -> Result<()> {
	logging::initialize();

	let cli = parse_cli();
	let config = Config::from_cli(&cli)?;
	run_picker(cli.output, config)
}

/// Run one picker session and print the outcome in the chosen format.
fn run_picker(format: OutputFormat, config: Config) -> Result<()> {
	let recents = match app_dirs::get_data_dir() {
		Ok(dir) => RecencyStore::open(dir, config.recent_cap),
		Err(err) => {
			tracing::warn!(error = %err, "no data directory, recents will not persist");
			RecencyStore::in_memory(config.recent_cap)
		}
	};

	let provider = HttpProvider::new(config.base_url, config.api_key)?;
	let options = PickerOptions {
		tab: config.tab,
		initial_query: config.initial_query,
		page_size: config.page_size,
		debounce: config.debounce,
		identity: config.identity,
		recents,
	};

	let outcome = gifpick::run(Box::new(provider), options)?;

	// A cancelled session prints nothing; the exit code carries the signal.
	match render_outcome(format, &outcome)? {
		Some(text) => {
			println!("{text}");
			Ok(())
		}
		None => std::process::exit(1),
	}
}
