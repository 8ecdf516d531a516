use std::collections::HashMap;
use std::time::{Duration, Instant};

use throbber_widgets_tui::ThrobberState;

use crate::provider::MediaProvider;
use crate::recency::{DEFAULT_RECENT_CAP, RecencyStore};
use crate::suggestions;
use crate::systems::fetch;
use crate::types::{FeedState, MediaItem, QueryKey, Tab, ViewMode};

use super::debounce::QueryDebouncer;
use super::grid::GridState;
use super::input::QueryInput;
use super::scroll::ScrollSentinel;

mod fetch_runtime;

use fetch_runtime::FetchRuntime;

/// How long a previously accumulated feed may be re-rendered without a
/// refetch when the user returns to its key.
pub(crate) const FEED_TTL: Duration = Duration::from_secs(60);

pub(crate) const DEFAULT_PAGE_SIZE: usize = 20;
pub(crate) const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Startup configuration for a picker session.
pub struct PickerOptions {
	pub tab: Tab,
	pub initial_query: String,
	pub page_size: usize,
	pub debounce: Duration,
	/// Identity forwarded to the provider's recent endpoint only.
	pub identity: String,
	pub recents: RecencyStore,
}

impl Default for PickerOptions {
	fn default() -> Self {
		Self {
			tab: Tab::Gif,
			initial_query: String::new(),
			page_size: DEFAULT_PAGE_SIZE,
			debounce: DEFAULT_DEBOUNCE,
			identity: "guest".into(),
			recents: RecencyStore::in_memory(DEFAULT_RECENT_CAP),
		}
	}
}

impl Drop for App {
	fn drop(&mut self) {
		self.fetch.shutdown();
	}
}

pub struct App {
	pub(crate) tab: Tab,
	pub(crate) view_mode: ViewMode,
	pub(crate) input: QueryInput,
	pub(crate) debouncer: QueryDebouncer,
	pub(crate) effective_query: String,
	pub(crate) feeds: HashMap<QueryKey, FeedState>,
	pub(crate) grid: GridState,
	pub(crate) sentinel: ScrollSentinel,
	pub(crate) recents: RecencyStore,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) page_size: usize,
	pub(crate) suggestion_cursor: usize,
	pub(crate) fetch: FetchRuntime,
}

impl App {
	pub fn new(provider: Box<dyn MediaProvider>, options: PickerOptions) -> Self {
		let PickerOptions {
			tab,
			initial_query,
			page_size,
			debounce,
			identity,
			recents,
		} = options;

		let (fetch_tx, fetch_rx, latest_request_id) = fetch::spawn(provider, identity);
		let fetch = FetchRuntime::new(fetch_tx, fetch_rx, latest_request_id);

		let view_mode = if initial_query.is_empty() {
			ViewMode::Trending
		} else {
			ViewMode::Search
		};

		Self {
			tab,
			view_mode,
			input: QueryInput::new(initial_query.clone()),
			debouncer: QueryDebouncer::new(debounce),
			effective_query: initial_query,
			feeds: HashMap::new(),
			grid: GridState::default(),
			sentinel: ScrollSentinel::default(),
			recents,
			throbber_state: ThrobberState::default(),
			page_size: page_size.max(1),
			suggestion_cursor: 0,
			fetch,
		}
	}

	/// The key addressing the feed currently rendered. Only search keys
	/// carry a query.
	pub(crate) fn active_key(&self) -> QueryKey {
		match self.view_mode {
			ViewMode::Trending => QueryKey::trending(self.tab),
			ViewMode::Recent => QueryKey::recent(self.tab),
			ViewMode::Search => QueryKey::search(self.tab, self.effective_query.clone()),
		}
	}

	pub(crate) fn visible_feed(&self) -> Option<&FeedState> {
		self.feeds.get(&self.active_key())
	}

	/// Switch content category. Resets the query, reverts to trending, and
	/// clears the rendered list, regardless of prior state.
	pub(crate) fn set_tab(&mut self, tab: Tab) {
		if self.tab == tab {
			return;
		}
		self.tab = tab;
		self.input.clear();
		self.debouncer.cancel();
		self.effective_query.clear();
		self.view_mode = ViewMode::Trending;
		self.suggestion_cursor = 0;
		self.grid.reset();
		self.activate_key();
	}

	/// Explicit trending/recent toggle. Mutually exclusive with search: any
	/// active query is cleared as part of the transition.
	pub(crate) fn set_view_mode(&mut self, mode: ViewMode) {
		debug_assert_ne!(mode, ViewMode::Search, "search is entered via the query");
		if self.view_mode == mode {
			return;
		}
		self.input.clear();
		self.debouncer.cancel();
		self.effective_query.clear();
		self.view_mode = mode;
		self.grid.reset();
		self.activate_key();
	}

	/// Called on every edit of the raw input. Empty input bypasses the
	/// debounce entirely: it is the signal that reverts to trending.
	pub(crate) fn on_input_changed(&mut self) {
		let raw = self.input.text().to_string();
		if raw.is_empty() {
			self.debouncer.cancel();
			self.apply_effective_query(String::new());
		} else {
			self.debouncer.schedule(&raw, Instant::now());
		}
	}

	/// Emit a pending debounced query, if its quiet period elapsed.
	pub(crate) fn poll_debouncer(&mut self, now: Instant) {
		if let Some(query) = self.debouncer.poll(now) {
			self.apply_effective_query(query);
		}
	}

	/// Commit an effective query and derive the view mode from it.
	pub(crate) fn apply_effective_query(&mut self, query: String) {
		let mode = if query.is_empty() {
			match self.view_mode {
				ViewMode::Search => ViewMode::Trending,
				other => other,
			}
		} else {
			ViewMode::Search
		};

		if query == self.effective_query && mode == self.view_mode {
			return;
		}

		self.effective_query = query;
		self.view_mode = mode;
		self.grid.reset();
		self.activate_key();
	}

	/// Fill the input with the next seed query for the active tab.
	pub(crate) fn cycle_suggestion(&mut self) {
		let seeds = suggestions::for_tab(self.tab);
		if seeds.is_empty() {
			return;
		}
		let seed = seeds[self.suggestion_cursor % seeds.len()];
		self.suggestion_cursor += 1;
		self.input.set_text(seed);
		self.on_input_changed();
	}

	pub(crate) fn suggestions_visible(&self) -> bool {
		self.view_mode == ViewMode::Trending && self.input.is_empty()
	}

	pub(crate) fn current_item(&self) -> Option<MediaItem> {
		let feed = self.visible_feed()?;
		feed.items.get(self.grid.selected).cloned()
	}

	/// Write a selection into the local recency ledger.
	pub(crate) fn record_selection(&mut self, item: MediaItem) {
		self.recents.record_selection(self.tab, item);
	}

	/// Forget the locally remembered selections for the active tab.
	pub(crate) fn clear_recents(&mut self) {
		self.recents.clear(self.tab);
	}
}
