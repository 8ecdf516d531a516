use serde::{Deserialize, Serialize};

use super::Tab;

/// Rendition quality requested when resolving a concrete URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityTier {
	/// Small variant suitable for grid cells and previews.
	Preview,
	/// Full-size variant handed to the embedding application.
	Full,
}

/// One provider-assigned media asset. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
	pub id: String,
	pub title: String,
	pub tab: Tab,
	preview_url: Option<String>,
	full_url: Option<String>,
}

impl MediaItem {
	pub fn new(id: impl Into<String>, title: impl Into<String>, tab: Tab) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			tab,
			preview_url: None,
			full_url: None,
		}
	}

	pub fn with_preview_url(mut self, url: impl Into<String>) -> Self {
		self.preview_url = Some(url.into());
		self
	}

	pub fn with_full_url(mut self, url: impl Into<String>) -> Self {
		self.full_url = Some(url.into());
		self
	}

	/// Resolve a retrievable URL for the requested tier, falling back to the
	/// other tier when the provider did not ship the exact rendition.
	pub fn url(&self, tier: QualityTier) -> Option<&str> {
		let (first, second) = match tier {
			QualityTier::Preview => (&self.preview_url, &self.full_url),
			QualityTier::Full => (&self.full_url, &self.preview_url),
		};
		first.as_deref().or(second.as_deref())
	}

	/// Whether at least one rendition URL is available.
	pub fn has_rendition(&self) -> bool {
		self.preview_url.is_some() || self.full_url.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn url_prefers_requested_tier() {
		let item = MediaItem::new("a", "A", Tab::Gif)
			.with_preview_url("https://cdn/p.gif")
			.with_full_url("https://cdn/f.gif");
		assert_eq!(item.url(QualityTier::Preview), Some("https://cdn/p.gif"));
		assert_eq!(item.url(QualityTier::Full), Some("https://cdn/f.gif"));
	}

	#[test]
	fn url_falls_back_across_tiers() {
		let item = MediaItem::new("a", "A", Tab::Gif).with_full_url("https://cdn/f.gif");
		assert_eq!(item.url(QualityTier::Preview), Some("https://cdn/f.gif"));

		let bare = MediaItem::new("b", "B", Tab::Gif);
		assert_eq!(bare.url(QualityTier::Full), None);
		assert!(!bare.has_rendition());
	}
}
