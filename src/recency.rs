//! Bounded, tab-scoped, locally persisted ledger of selected items.
//!
//! This is a client-side convenience cache, distinct from the provider's own
//! recent endpoint. Selections go to the front of their tab's list; an id
//! already present is moved instead of duplicated; the list is truncated to
//! the cap from the tail. The whole store is serialized as one versioned
//! JSON payload and written atomically, so a crash mid-write leaves the
//! previous ledger intact.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{MediaItem, Tab};

pub const DEFAULT_RECENT_CAP: usize = 24;

const STORE_VERSION: u32 = 1;
const STORE_FILE: &str = "recents.json";

/// One remembered selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEntry {
	pub item: MediaItem,
	/// Seconds since the Unix epoch at insertion time.
	pub inserted_at: u64,
}

pub struct RecencyStore {
	path: Option<PathBuf>,
	cap: usize,
	entries: HashMap<Tab, Vec<RecentEntry>>,
}

impl RecencyStore {
	/// An unpersisted store, used by tests and embedders that manage their
	/// own history.
	pub fn in_memory(cap: usize) -> Self {
		Self {
			path: None,
			cap: cap.max(1),
			entries: HashMap::new(),
		}
	}

	/// Open the store backed by `dir/recents.json`, loading any previously
	/// persisted ledger. A missing, unreadable, or incompatible payload is a
	/// cold start, never an error.
	pub fn open(dir: PathBuf, cap: usize) -> Self {
		let path = dir.join(STORE_FILE);
		let entries = load_payload(&path).unwrap_or_default();
		Self {
			path: Some(path),
			cap: cap.max(1),
			entries,
		}
	}

	/// Move `item` to the front of its tab's list, dropping any prior
	/// occurrence of the same id, then evict from the tail past the cap.
	/// Persistence failures are logged and ignored so selection always
	/// completes.
	pub fn record_selection(&mut self, tab: Tab, item: MediaItem) {
		let list = self.entries.entry(tab).or_default();
		list.retain(|entry| entry.item.id != item.id);
		list.insert(
			0,
			RecentEntry {
				item,
				inserted_at: unix_seconds(),
			},
		);
		list.truncate(self.cap);

		if let Err(err) = self.persist() {
			tracing::warn!(error = %err, "failed to persist recency store");
		}
	}

	/// Current entries for a tab, newest first.
	pub fn get(&self, tab: Tab) -> &[RecentEntry] {
		self.entries.get(&tab).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Drop all entries for a tab and persist the change.
	pub fn clear(&mut self, tab: Tab) {
		self.entries.remove(&tab);
		if let Err(err) = self.persist() {
			tracing::warn!(error = %err, "failed to persist recency store");
		}
	}

	fn persist(&self) -> Result<()> {
		let Some(path) = &self.path else {
			return Ok(());
		};

		if let Some(dir) = path.parent() {
			fs::create_dir_all(dir)
				.with_context(|| format!("failed to create data directory: {}", dir.display()))?;
		}

		let payload = StorePayload {
			version: STORE_VERSION,
			tabs: self
				.entries
				.iter()
				.map(|(tab, entries)| TabEntries {
					tab: *tab,
					entries: entries.clone(),
				})
				.collect(),
		};

		let data = serde_json::to_vec(&payload).context("failed to serialize recency store")?;
		let tmp_path = path.with_extension("tmp");
		{
			let mut file = fs::File::create(&tmp_path)
				.with_context(|| format!("failed to create store file: {}", tmp_path.display()))?;
			file.write_all(&data)
				.with_context(|| format!("failed to write store file: {}", tmp_path.display()))?;
			file.sync_all().ok();
		}

		fs::rename(&tmp_path, path).with_context(|| {
			format!(
				"failed to move store file from {} to {}",
				tmp_path.display(),
				path.display()
			)
		})?;

		Ok(())
	}
}

fn load_payload(path: &PathBuf) -> Option<HashMap<Tab, Vec<RecentEntry>>> {
	let bytes = fs::read(path).ok()?;
	let payload: StorePayload = serde_json::from_slice(&bytes).ok()?;
	if payload.version != STORE_VERSION {
		return None;
	}

	Some(
		payload
			.tabs
			.into_iter()
			.map(|tab_entries| (tab_entries.tab, tab_entries.entries))
			.collect(),
	)
}

fn unix_seconds() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.unwrap_or_default()
		.as_secs()
}

#[derive(Serialize, Deserialize)]
struct StorePayload {
	version: u32,
	tabs: Vec<TabEntries>,
}

#[derive(Serialize, Deserialize)]
struct TabEntries {
	tab: Tab,
	entries: Vec<RecentEntry>,
}
