//! Boundary to the external media provider.
//!
//! The picker core only depends on the [`MediaProvider`] trait; the concrete
//! [`HttpProvider`] speaks a Giphy-compatible HTTP API. All calls are
//! blocking and are only ever made from the fetch worker thread.

mod http;

pub use http::HttpProvider;

use thiserror::Error;

use crate::types::{MediaItem, Tab};

#[derive(Debug, Error)]
pub enum ProviderError {
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),
	#[error("provider returned status {0}")]
	Status(u16),
	#[error("malformed provider response: {0}")]
	Decode(#[from] serde_json::Error),
}

/// External media provider operations.
///
/// Only `search` is paged; trending and recent return a single
/// provider-ordered batch.
pub trait MediaProvider: Send {
	/// Provider-curated popular items for a tab, non-personalized.
	fn trending(&self, tab: Tab, limit: usize) -> Result<Vec<MediaItem>, ProviderError>;

	/// Paged search results. `page` starts at 1.
	fn search(
		&self,
		query: &str,
		tab: Tab,
		page: u32,
		limit: usize,
	) -> Result<Vec<MediaItem>, ProviderError>;

	/// Provider-side selection history for an identity, distinct from the
	/// locally persisted recency store.
	fn recent(&self, identity: &str, tab: Tab) -> Result<Vec<MediaItem>, ProviderError>;
}

#[cfg(test)]
pub(crate) mod stub {
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::time::Duration;

	use super::*;

	/// Scriptable in-memory provider used across worker and UI tests.
	#[derive(Clone, Default)]
	pub(crate) struct StubProvider {
		pub page_size: usize,
		pub delay: Option<Duration>,
		pub fail: bool,
		pub trending_calls: Arc<AtomicUsize>,
		pub search_calls: Arc<AtomicUsize>,
		pub recent_calls: Arc<AtomicUsize>,
	}

	impl StubProvider {
		pub fn new(page_size: usize) -> Self {
			Self {
				page_size,
				..Self::default()
			}
		}

		pub fn with_delay(mut self, delay: Duration) -> Self {
			self.delay = Some(delay);
			self
		}

		pub fn failing(mut self) -> Self {
			self.fail = true;
			self
		}

		fn respond(&self, prefix: String, tab: Tab, count: usize) -> Result<Vec<MediaItem>, ProviderError> {
			if let Some(delay) = self.delay {
				std::thread::sleep(delay);
			}
			if self.fail {
				return Err(ProviderError::Status(503));
			}
			Ok((0..count)
				.map(|index| {
					let id = format!("{prefix}-{index}");
					MediaItem::new(&id, format!("title {id}"), tab)
						.with_preview_url(format!("https://stub/{id}-preview.gif"))
						.with_full_url(format!("https://stub/{id}.gif"))
				})
				.collect())
		}
	}

	impl MediaProvider for StubProvider {
		fn trending(&self, tab: Tab, limit: usize) -> Result<Vec<MediaItem>, ProviderError> {
			self.trending_calls.fetch_add(1, Ordering::SeqCst);
			self.respond(format!("{}-trending", tab.slug()), tab, limit.min(self.page_size))
		}

		fn search(
			&self,
			query: &str,
			tab: Tab,
			page: u32,
			limit: usize,
		) -> Result<Vec<MediaItem>, ProviderError> {
			self.search_calls.fetch_add(1, Ordering::SeqCst);
			self.respond(
				format!("{}-{query}-p{page}", tab.slug()),
				tab,
				limit.min(self.page_size),
			)
		}

		fn recent(&self, identity: &str, tab: Tab) -> Result<Vec<MediaItem>, ProviderError> {
			self.recent_calls.fetch_add(1, Ordering::SeqCst);
			self.respond(format!("{}-recent-{identity}", tab.slug()), tab, self.page_size)
		}
	}
}
