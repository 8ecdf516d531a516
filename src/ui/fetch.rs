use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use super::state::{App, FEED_TTL};
use crate::systems::fetch::{FetchResponse, LoadOp};
use crate::types::ViewMode;

impl App {
	/// Make the active key's feed current: re-render a fresh accumulation
	/// as-is, otherwise start a page-1 load.
	pub(crate) fn activate_key(&mut self) {
		let key = self.active_key();
		let feed = self.feeds.entry(key).or_default();
		if feed.is_fresh(FEED_TTL) && !feed.items.is_empty() {
			feed.loading = false;
			let len = feed.items.len();
			self.grid.clamp(len);
			return;
		}
		self.request_replace();
	}

	/// Start a fresh load for the active key. A replace while the same key
	/// is already in flight coalesces into the existing flight; no second
	/// request goes out.
	pub(crate) fn request_replace(&mut self) {
		let key = self.active_key();
		if self.fetch.is_in_flight() && self.fetch.current_key() == Some(&key) {
			return;
		}

		let feed = self.feeds.entry(key.clone()).or_default();
		feed.loading = true;
		self.fetch.issue_load(key, 1, self.page_size, LoadOp::Replace);
	}

	/// Start a load-more for the active key. Rejected outright while a load
	/// for that key is in flight, when the feed is exhausted, or for feeds
	/// that do not paginate.
	pub(crate) fn request_append(&mut self) {
		let key = self.active_key();
		if key.mode != ViewMode::Search {
			return;
		}
		if self.fetch.is_in_flight() && self.fetch.current_key() == Some(&key) {
			return;
		}

		let Some(feed) = self.feeds.get_mut(&key) else {
			return;
		};
		if !feed.has_more || feed.items.is_empty() {
			return;
		}

		let next_page = feed.page.saturating_add(1);
		feed.loading = true;
		self.fetch
			.issue_load(key, next_page, self.page_size, LoadOp::Append);
	}

	/// Fire an append when the grid has scrolled past the sentinel
	/// threshold and nothing is already in flight for the active key.
	pub(crate) fn after_grid_scroll(&mut self) {
		let key = self.active_key();
		let Some(feed) = self.feeds.get(&key) else {
			return;
		};
		if feed.items.is_empty() || !feed.has_more || self.fetch.is_append_in_flight() {
			return;
		}

		let (scroll_top, scroll_height, client_height) = self.grid.scroll_metrics(feed.items.len());
		if self
			.sentinel
			.should_trigger(scroll_top, scroll_height, client_height)
		{
			self.request_append();
		}
	}

	/// Drain any fetch responses waiting on the receiver channel.
	pub(crate) fn pump_fetch_results(&mut self) {
		loop {
			match self.fetch.try_recv() {
				Ok(response) => self.handle_fetch_response(response),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply a response if it still addresses the active feed; anything
	/// stale is dropped without touching state.
	fn handle_fetch_response(&mut self, response: FetchResponse) {
		if !self.fetch.matches_latest(response.id) {
			return;
		}

		// The latest load has settled. Clear the flight flags before the key
		// comparison: a result for a key the user already left is dropped,
		// but the flight is over either way.
		self.fetch.settle();

		if response.key != self.active_key() {
			return;
		}

		let paginates = response.key.mode == ViewMode::Search;
		let page_size = self.page_size;
		let feed = self.feeds.entry(response.key.clone()).or_default();
		feed.loading = false;

		match response.outcome {
			Ok(items) => {
				match response.op {
					LoadOp::Replace => feed.replace(items, page_size, paginates),
					LoadOp::Append => {
						feed.append(items, page_size, paginates);
					}
				}
				feed.fetched_at = Some(Instant::now());
				let len = feed.items.len();
				self.grid.clamp(len);
			}
			Err(error) => {
				// Degrade in place: the accumulated list stays usable and a
				// retry on the same key is possible.
				tracing::warn!(
					tab = response.key.tab.slug(),
					mode = response.key.mode.label(),
					%error,
					"media load failed"
				);
			}
		}
	}
}
