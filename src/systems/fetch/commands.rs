use crate::provider::ProviderError;
use crate::types::{MediaItem, QueryKey};

/// Whether a load starts a feed over or extends it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LoadOp {
	/// Reset the feed to the response (page 1).
	Replace,
	/// Merge the response into the accumulated list (next page).
	Append,
}

/// One load addressed at a feed, carrying the generation id captured when
/// the UI dispatched it.
#[derive(Clone, Debug)]
pub(crate) struct LoadRequest {
	/// Identifier that lets the UI correlate the response with the request
	/// generation that issued it.
	pub id: u64,
	/// Which feed this load addresses.
	pub key: QueryKey,
	/// Page cursor, 1-based. Only meaningful for search loads.
	pub page: u32,
	/// Page size requested from the provider.
	pub limit: usize,
	pub op: LoadOp,
}

/// Commands understood by the background fetch worker.
#[derive(Debug)]
pub(crate) enum FetchCommand {
	Load(LoadRequest),
	/// Stop the background worker thread.
	Shutdown,
}

/// Response sent back from the worker. A provider failure travels as `Err`
/// so the UI can degrade without the accumulated feed being touched.
#[derive(Debug)]
pub(crate) struct FetchResponse {
	pub id: u64,
	pub key: QueryKey,
	pub op: LoadOp,
	pub outcome: Result<Vec<MediaItem>, ProviderError>,
}
