use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::systems::fetch::{FetchCommand, FetchResponse, LoadOp, LoadRequest};
use crate::types::QueryKey;

/// UI-side bookkeeping for the fetch worker.
///
/// Every dispatched load captures a fresh generation id; a response is only
/// applied when its id still matches the most recently issued one, which is
/// the sole cancellation mechanism. The in-flight flags are set before the
/// command is sent and cleared when the matching response settles, on both
/// the success and failure paths.
pub(crate) struct FetchRuntime {
	tx: Sender<FetchCommand>,
	rx: Receiver<FetchResponse>,
	latest_request_id: Arc<AtomicU64>,
	next_request_id: u64,
	current: Option<(u64, QueryKey)>,
	in_flight: bool,
	append_in_flight: bool,
}

impl FetchRuntime {
	pub(crate) fn new(
		tx: Sender<FetchCommand>,
		rx: Receiver<FetchResponse>,
		latest_request_id: Arc<AtomicU64>,
	) -> Self {
		Self {
			tx,
			rx,
			latest_request_id,
			next_request_id: 0,
			current: None,
			in_flight: false,
			append_in_flight: false,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(FetchCommand::Shutdown);
	}

	/// Capture a new generation, mark the flight, and send the load.
	pub(crate) fn issue_load(&mut self, key: QueryKey, page: u32, limit: usize, op: LoadOp) -> u64 {
		self.next_request_id = self.next_request_id.saturating_add(1);
		let id = self.next_request_id;
		self.current = Some((id, key.clone()));
		self.in_flight = true;
		self.append_in_flight = op == LoadOp::Append;
		self.latest_request_id
			.store(id, AtomicOrdering::Release);
		let _ = self.tx.send(FetchCommand::Load(LoadRequest {
			id,
			key,
			page,
			limit,
			op,
		}));
		id
	}

	/// Whether a response belongs to the most recently issued load.
	pub(crate) fn matches_latest(&self, response_id: u64) -> bool {
		matches!(&self.current, Some((id, _)) if *id == response_id)
	}

	/// Key of the most recently issued load, while one is in flight.
	pub(crate) fn current_key(&self) -> Option<&QueryKey> {
		self.current.as_ref().map(|(_, key)| key)
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn is_append_in_flight(&self) -> bool {
		self.append_in_flight
	}

	/// Clear the flight flags once the current load's response is handled.
	pub(crate) fn settle(&mut self) {
		self.in_flight = false;
		self.append_in_flight = false;
	}

	pub(crate) fn try_recv(&mut self) -> Result<FetchResponse, TryRecvError> {
		self.rx.try_recv()
	}
}
