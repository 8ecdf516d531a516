use super::MediaItem;

/// Result of a picker session, handed back to the embedding application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickOutcome {
	/// Whether the user accepted a selection (as opposed to cancelling).
	pub accepted: bool,
	/// The chosen item, when accepted and the grid was non-empty.
	pub item: Option<MediaItem>,
	/// The raw query text at the time the picker closed.
	pub query: String,
}
