use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use super::{MediaProvider, ProviderError};
use crate::types::{MediaItem, Tab};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for a Giphy-compatible media API.
///
/// Lives on the fetch worker thread; the UI never calls it directly.
pub struct HttpProvider {
	client: Client,
	base_url: String,
	api_key: String,
}

impl HttpProvider {
	pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ProviderError> {
		let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
		Ok(Self {
			client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
			api_key: api_key.into(),
		})
	}

	fn fetch(&self, url: &str, params: &[(&str, &str)]) -> Result<Vec<RawItem>, ProviderError> {
		let mut query: Vec<(&str, &str)> = vec![("api_key", self.api_key.as_str())];
		query.extend_from_slice(params);

		let response = self.client.get(url).query(&query).send()?;
		let status = response.status();
		if !status.is_success() {
			return Err(ProviderError::Status(status.as_u16()));
		}

		let body = response.text()?;
		let envelope: Envelope = serde_json::from_str(&body)?;
		Ok(envelope.data)
	}
}

impl MediaProvider for HttpProvider {
	fn trending(&self, tab: Tab, limit: usize) -> Result<Vec<MediaItem>, ProviderError> {
		let url = format!("{}/v1/{}/trending", self.base_url, tab.slug());
		let limit = limit.to_string();
		let raw = self.fetch(&url, &[("limit", limit.as_str())])?;
		Ok(into_items(raw, tab))
	}

	fn search(
		&self,
		query: &str,
		tab: Tab,
		page: u32,
		limit: usize,
	) -> Result<Vec<MediaItem>, ProviderError> {
		let url = format!("{}/v1/{}/search", self.base_url, tab.slug());
		let offset = (page.saturating_sub(1) as usize).saturating_mul(limit).to_string();
		let limit = limit.to_string();
		let raw = self.fetch(
			&url,
			&[("q", query), ("limit", limit.as_str()), ("offset", offset.as_str())],
		)?;
		Ok(into_items(raw, tab))
	}

	fn recent(&self, identity: &str, tab: Tab) -> Result<Vec<MediaItem>, ProviderError> {
		let url = format!("{}/v1/{}/recent", self.base_url, tab.slug());
		let raw = self.fetch(&url, &[("user_id", identity)])?;
		Ok(into_items(raw, tab))
	}
}

/// Convert raw payload entries into items, dropping any entry that lacks an
/// id or every rendition URL. A partially malformed response degrades to
/// fewer items rather than a failed fetch.
fn into_items(raw: Vec<RawItem>, tab: Tab) -> Vec<MediaItem> {
	raw.into_iter()
		.filter_map(|entry| entry.into_item(tab))
		.collect()
}

#[derive(Deserialize)]
struct Envelope {
	#[serde(default)]
	data: Vec<RawItem>,
}

#[derive(Deserialize)]
struct RawItem {
	id: Option<String>,
	title: Option<String>,
	images: Option<RawImages>,
}

#[derive(Deserialize)]
struct RawImages {
	#[serde(default)]
	preview_gif: Option<RawRendition>,
	#[serde(default)]
	fixed_width: Option<RawRendition>,
	#[serde(default)]
	original: Option<RawRendition>,
}

#[derive(Deserialize)]
struct RawRendition {
	url: Option<String>,
}

impl RawItem {
	fn into_item(self, tab: Tab) -> Option<MediaItem> {
		let id = self.id.filter(|id| !id.is_empty())?;
		let title = self.title.unwrap_or_default();

		let (preview, full) = match self.images {
			Some(images) => {
				let preview = images
					.preview_gif
					.and_then(|rendition| rendition.url)
					.or_else(|| images.fixed_width.as_ref().and_then(|r| r.url.clone()));
				let full = images.original.and_then(|rendition| rendition.url);
				(preview, full)
			}
			None => (None, None),
		};

		let mut item = MediaItem::new(id, title, tab);
		if let Some(url) = preview {
			item = item.with_preview_url(url);
		}
		if let Some(url) = full {
			item = item.with_full_url(url);
		}

		item.has_rendition().then_some(item)
	}
}
