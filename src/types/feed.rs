use std::collections::HashSet;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::MediaItem;

/// Content category shown as a tab in the picker header.
#[derive(
	Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
	Gif,
	Sticker,
	Text,
}

impl Tab {
	pub const ALL: [Tab; 3] = [Tab::Gif, Tab::Sticker, Tab::Text];

	/// Path segment used by the provider API.
	pub fn slug(self) -> &'static str {
		match self {
			Tab::Gif => "gifs",
			Tab::Sticker => "stickers",
			Tab::Text => "text",
		}
	}

	/// Label shown in the tab bar.
	pub fn label(self) -> &'static str {
		match self {
			Tab::Gif => "GIFs",
			Tab::Sticker => "Stickers",
			Tab::Text => "Text",
		}
	}

	pub fn next(self) -> Tab {
		let index = Tab::ALL.iter().position(|tab| *tab == self).unwrap_or(0);
		Tab::ALL[(index + 1) % Tab::ALL.len()]
	}

	pub fn previous(self) -> Tab {
		let index = Tab::ALL.iter().position(|tab| *tab == self).unwrap_or(0);
		Tab::ALL[(index + Tab::ALL.len() - 1) % Tab::ALL.len()]
	}
}

/// Which feed the picker is showing. Search is mutually exclusive with the
/// other two: a non-empty effective query forces it, and toggling back to
/// trending or recent clears the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewMode {
	Trending,
	Recent,
	Search,
}

impl ViewMode {
	pub fn label(self) -> &'static str {
		match self {
			ViewMode::Trending => "Trending",
			ViewMode::Recent => "Recent",
			ViewMode::Search => "Search",
		}
	}
}

/// Identity of one logical feed. Two loads address the same feed iff their
/// keys are structurally equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
	pub tab: Tab,
	pub mode: ViewMode,
	pub query: String,
}

impl QueryKey {
	pub fn trending(tab: Tab) -> Self {
		Self {
			tab,
			mode: ViewMode::Trending,
			query: String::new(),
		}
	}

	pub fn recent(tab: Tab) -> Self {
		Self {
			tab,
			mode: ViewMode::Recent,
			query: String::new(),
		}
	}

	pub fn search(tab: Tab, query: impl Into<String>) -> Self {
		Self {
			tab,
			mode: ViewMode::Search,
			query: query.into(),
		}
	}
}

/// Accumulated page state for one [`QueryKey`].
///
/// Items are append-only and deduplicated by provider id; the page cursor
/// starts at 1 and only moves forward.
#[derive(Debug)]
pub struct FeedState {
	pub page: u32,
	pub items: Vec<MediaItem>,
	ids: HashSet<String>,
	pub has_more: bool,
	pub loading: bool,
	pub fetched_at: Option<Instant>,
}

impl Default for FeedState {
	fn default() -> Self {
		Self {
			page: 1,
			items: Vec::new(),
			ids: HashSet::new(),
			has_more: true,
			loading: false,
			fetched_at: None,
		}
	}
}

impl FeedState {
	/// Reset the feed to a fresh page-1 response.
	pub fn replace(&mut self, items: Vec<MediaItem>, page_size: usize, paginates: bool) {
		self.items.clear();
		self.ids.clear();
		self.page = 1;
		for item in items {
			if self.ids.insert(item.id.clone()) {
				self.items.push(item);
			}
		}
		self.recompute_has_more(page_size, paginates);
	}

	/// Merge a load-more response into the accumulated list, skipping ids
	/// already present, and advance the page cursor. Returns how many items
	/// were actually added.
	pub fn append(&mut self, items: Vec<MediaItem>, page_size: usize, paginates: bool) -> usize {
		let before = self.items.len();
		for item in items {
			if self.ids.insert(item.id.clone()) {
				self.items.push(item);
			}
		}
		self.page = self.page.saturating_add(1);
		self.recompute_has_more(page_size, paginates);
		self.items.len() - before
	}

	/// Heuristic: assume more pages exist while the accumulated count keeps
	/// up with `page_size * page`. Non-paginating feeds never have more.
	fn recompute_has_more(&mut self, page_size: usize, paginates: bool) {
		self.has_more = paginates && self.items.len() >= page_size.saturating_mul(self.page as usize);
	}

	/// Whether the last successful load is recent enough to re-render
	/// without a refetch.
	pub fn is_fresh(&self, ttl: Duration) -> bool {
		self.fetched_at
			.map(|at| at.elapsed() <= ttl)
			.unwrap_or(false)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn items(tab: Tab, ids: &[&str]) -> Vec<MediaItem> {
		ids.iter()
			.map(|id| MediaItem::new(*id, format!("title {id}"), tab))
			.collect()
	}

	#[test]
	fn replace_resets_to_page_one_and_dedupes_within_response() {
		let mut feed = FeedState::default();
		feed.replace(items(Tab::Gif, &["a", "b", "a"]), 2, true);
		assert_eq!(feed.page, 1);
		assert_eq!(feed.items.len(), 2);
		assert!(feed.has_more, "full page implies more");

		feed.replace(items(Tab::Gif, &["c"]), 2, true);
		assert_eq!(feed.items.len(), 1);
		assert!(!feed.has_more, "short page implies exhausted");
	}

	#[test]
	fn append_skips_duplicate_ids_and_advances_page() {
		let mut feed = FeedState::default();
		feed.replace(items(Tab::Gif, &["a", "b"]), 2, true);
		let added = feed.append(items(Tab::Gif, &["b", "c", "d"]), 2, true);
		assert_eq!(added, 2);
		assert_eq!(feed.page, 2);
		let ids: Vec<&str> = feed.items.iter().map(|item| item.id.as_str()).collect();
		assert_eq!(ids, vec!["a", "b", "c", "d"]);
	}

	#[test]
	fn has_more_heuristic_tracks_page_size_times_page() {
		let mut feed = FeedState::default();
		feed.replace(items(Tab::Gif, &["a", "b"]), 2, true);
		assert!(feed.has_more);

		// Second page comes back short of the 2 * 2 threshold.
		feed.append(items(Tab::Gif, &["c"]), 2, true);
		assert_eq!(feed.items.len(), 3);
		assert!(!feed.has_more);
	}

	#[test]
	fn non_paginating_feeds_never_report_more() {
		let mut feed = FeedState::default();
		feed.replace(items(Tab::Gif, &["a", "b", "c", "d"]), 2, false);
		assert!(!feed.has_more);
	}

	#[test]
	fn freshness_requires_a_recorded_fetch() {
		let mut feed = FeedState::default();
		assert!(!feed.is_fresh(Duration::from_secs(60)));
		feed.fetched_at = Some(Instant::now());
		assert!(feed.is_fresh(Duration::from_secs(60)));
		assert!(!feed.is_fresh(Duration::ZERO));
	}

	#[test]
	fn query_keys_compare_structurally() {
		assert_eq!(
			QueryKey::search(Tab::Gif, "tractor"),
			QueryKey::search(Tab::Gif, "tractor")
		);
		assert_ne!(
			QueryKey::search(Tab::Gif, "tractor"),
			QueryKey::search(Tab::Sticker, "tractor")
		);
		assert_ne!(QueryKey::trending(Tab::Gif), QueryKey::recent(Tab::Gif));
	}

	#[test]
	fn tab_cycle_wraps() {
		assert_eq!(Tab::Text.next(), Tab::Gif);
		assert_eq!(Tab::Gif.previous(), Tab::Text);
	}
}
