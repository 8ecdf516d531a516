use std::fmt::Write;

use anyhow::Result;
use clap::{
	ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use gifpick::types::QualityTier;
use gifpick::{PickOutcome, Tab, app_dirs};
use serde_json::json;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("gifpick {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "gifpick",
	version,
	long_version = long_version(),
	about = "Interactive GIF and sticker picker",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `gifpick` binary.
pub(crate) struct CliArgs {
	#[arg(
		short = 't',
		long,
		value_enum,
		default_value = "gif",
		help = "Content tab to open on (default: gif)"
	)]
	pub(crate) tab: Tab,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty, shows trending)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'l',
		long = "limit",
		value_name = "NUM",
		help = "Items requested per page, 1-50 (default: 20)"
	)]
	pub(crate) limit: Option<usize>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before a typed query is issued (default: 500)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "recent-cap",
		value_name = "NUM",
		help = "Maximum locally remembered selections per tab (default: 24)"
	)]
	pub(crate) recent_cap: Option<usize>,
	#[arg(
		long = "api-key",
		value_name = "KEY",
		env = "GIFPICK_API_KEY",
		hide_env_values = true,
		help = "Provider API key"
	)]
	pub(crate) api_key: Option<String>,
	#[arg(
		long = "base-url",
		value_name = "URL",
		env = "GIFPICK_BASE_URL",
		help = "Provider API base URL (default: https://api.giphy.com)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long = "identity",
		value_name = "ID",
		env = "GIFPICK_IDENTITY",
		help = "Identity sent to the provider's recent endpoint (default: guest)"
	)]
	pub(crate) identity: Option<String>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the binary.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Plain-text line for an accepted selection.
fn format_plain(outcome: &PickOutcome) -> String {
	match &outcome.item {
		Some(item) => {
			let url = item.url(QualityTier::Full).unwrap_or_default();
			format!("{}\t{url}", item.title)
		}
		None => "No selection".to_string(),
	}
}

/// Printable payload for the picker outcome. A cancelled session yields
/// `None`: cancellation is signalled through the exit code alone and must
/// not pollute the stream an embedder captures.
pub(crate) fn render_outcome(format: OutputFormat, outcome: &PickOutcome) -> Result<Option<String>> {
	if !outcome.accepted {
		return Ok(None);
	}

	let text = match format {
		OutputFormat::Plain => format_plain(outcome),
		OutputFormat::Json => format_outcome_json(outcome)?,
	};
	Ok(Some(text))
}

/// Format the picker outcome as a JSON string.
fn format_outcome_json(outcome: &PickOutcome) -> Result<String> {
	let item = match &outcome.item {
		Some(item) => json!({
			"id": item.id,
			"title": item.title,
			"tab": item.tab.slug(),
			"preview_url": item.url(QualityTier::Preview),
			"full_url": item.url(QualityTier::Full),
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"item": item,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}
