use std::time::Duration;

use anyhow::{Context, Result, ensure};
use gifpick::{DEFAULT_RECENT_CAP, Tab};

use crate::cli::CliArgs;

const DEFAULT_BASE_URL: &str = "https://api.giphy.com";
const DEFAULT_PAGE_SIZE: usize = 20;
const DEFAULT_DEBOUNCE_MS: u64 = 500;
const MAX_PAGE_SIZE: usize = 50;

/// Application configuration derived from CLI arguments and defaults.
#[derive(Debug)]
pub struct Config {
	pub tab: Tab,
	pub initial_query: String,
	pub page_size: usize,
	pub debounce: Duration,
	pub recent_cap: usize,
	pub identity: String,
	pub base_url: String,
	pub api_key: String,
}

impl Config {
	/// Build configuration from CLI arguments with sensible defaults.
	pub fn from_cli(cli: &CliArgs) -> Result<Self> {
		let page_size = cli.limit.unwrap_or(DEFAULT_PAGE_SIZE);
		ensure!(
			(1..=MAX_PAGE_SIZE).contains(&page_size),
			"limit must be between 1 and {MAX_PAGE_SIZE}"
		);

		let recent_cap = cli.recent_cap.unwrap_or(DEFAULT_RECENT_CAP);
		ensure!(recent_cap > 0, "recent-cap must be greater than zero");

		let api_key = cli
			.api_key
			.clone()
			.filter(|key| !key.trim().is_empty())
			.context("an API key is required (pass --api-key or set GIFPICK_API_KEY)")?;

		Ok(Self {
			tab: cli.tab,
			initial_query: cli.query.clone().unwrap_or_default(),
			page_size,
			debounce: Duration::from_millis(cli.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS)),
			recent_cap,
			identity: cli
				.identity
				.clone()
				.filter(|id| !id.trim().is_empty())
				.unwrap_or_else(|| "guest".to_string()),
			base_url: cli
				.base_url
				.clone()
				.filter(|url| !url.trim().is_empty())
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			api_key,
		})
	}
}

#[cfg(test)]
mod tests {
	use clap::{CommandFactory, FromArgMatches};

	use super::*;
	use crate::cli::CliArgs;

	fn parse(args: &[&str]) -> CliArgs {
		let command = CliArgs::command();
		let mut matches = command.get_matches_from(args);
		CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
	}

	#[test]
	fn defaults_fill_everything_but_the_api_key() {
		let cli = parse(&["gifpick", "--api-key", "k"]);
		let config = Config::from_cli(&cli).expect("valid");
		assert_eq!(config.tab, Tab::Gif);
		assert_eq!(config.page_size, 20);
		assert_eq!(config.debounce, Duration::from_millis(500));
		assert_eq!(config.recent_cap, DEFAULT_RECENT_CAP);
		assert_eq!(config.identity, "guest");
		assert_eq!(config.base_url, DEFAULT_BASE_URL);
	}

	#[test]
	fn missing_api_key_is_rejected() {
		let cli = parse(&["gifpick"]);
		let err = Config::from_cli(&cli).unwrap_err();
		assert!(err.to_string().contains("API key"));
	}

	#[test]
	fn out_of_range_limit_is_rejected() {
		let cli = parse(&["gifpick", "--api-key", "k", "--limit", "0"]);
		assert!(Config::from_cli(&cli).is_err());

		let cli = parse(&["gifpick", "--api-key", "k", "--limit", "51"]);
		assert!(Config::from_cli(&cli).is_err());
	}
}
