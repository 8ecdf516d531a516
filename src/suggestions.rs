//! Static per-tab seed queries shown before the user starts typing.
//!
//! Purely a discovery bootstrap: never mutated at runtime, never persisted.

use crate::types::Tab;

const GIF_SEEDS: [&str; 6] = ["reaction", "thumbs up", "celebrate", "thanks", "wow", "deal"];
const STICKER_SEEDS: [&str; 6] = ["hello", "ok", "love", "laugh", "sad", "party"];
const TEXT_SEEDS: [&str; 6] = ["yes", "no", "maybe", "soon", "done", "on it"];

/// Seed queries for a tab, in display order.
pub fn for_tab(tab: Tab) -> &'static [&'static str] {
	match tab {
		Tab::Gif => &GIF_SEEDS,
		Tab::Sticker => &STICKER_SEEDS,
		Tab::Text => &TEXT_SEEDS,
	}
}
