use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::commands::{FetchCommand, FetchResponse, LoadOp, LoadRequest};
use crate::provider::MediaProvider;
use crate::types::ViewMode;

/// Launches the background fetch worker thread and returns communication
/// channels plus the shared latest-generation counter.
///
/// The worker owns the provider client outright; all network I/O happens on
/// this thread while the UI thread stays responsive.
pub(crate) fn spawn(
	provider: Box<dyn MediaProvider>,
	identity: String,
) -> (Sender<FetchCommand>, Receiver<FetchResponse>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_request_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_request_id);

	thread::spawn(move || worker_loop(provider.as_ref(), &identity, command_rx, result_tx, thread_latest));

	(command_tx, result_rx, latest_request_id)
}

fn worker_loop(
	provider: &dyn MediaProvider,
	identity: &str,
	command_rx: Receiver<FetchCommand>,
	result_tx: Sender<FetchResponse>,
	latest_request_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		match command {
			FetchCommand::Load(request) => {
				let (request, saw_shutdown) = drain_to_latest(&command_rx, request);

				// Skip superseded work before spending a network round trip.
				// The UI applies the authoritative check on response anyway.
				if latest_request_id.load(Ordering::Acquire) <= request.id {
					let outcome = dispatch(provider, identity, &request);
					let response = FetchResponse {
						id: request.id,
						key: request.key,
						op: request.op,
						outcome,
					};
					if result_tx.send(response).is_err() {
						break;
					}
				}

				if saw_shutdown {
					break;
				}
			}
			FetchCommand::Shutdown => break,
		}
	}
}

/// Drain the command channel and keep only the most recent load.
///
/// Earlier queued loads carry older generation ids and would be rejected on
/// arrival, so there is no point performing them. Returns whether a shutdown
/// was observed while draining.
fn drain_to_latest(rx: &Receiver<FetchCommand>, mut request: LoadRequest) -> (LoadRequest, bool) {
	loop {
		match rx.try_recv() {
			Ok(FetchCommand::Load(newer)) => request = newer,
			Ok(FetchCommand::Shutdown) => return (request, true),
			Err(_) => return (request, false),
		}
	}
}

fn dispatch(
	provider: &dyn MediaProvider,
	identity: &str,
	request: &LoadRequest,
) -> Result<Vec<crate::types::MediaItem>, crate::provider::ProviderError> {
	match request.key.mode {
		ViewMode::Trending => provider.trending(request.key.tab, request.limit),
		ViewMode::Recent => provider.recent(identity, request.key.tab),
		ViewMode::Search => {
			provider.search(&request.key.query, request.key.tab, request.page, request.limit)
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::Ordering;
	use std::time::Duration;

	use super::*;
	use crate::provider::stub::StubProvider;
	use crate::types::{QueryKey, Tab};

	fn load(id: u64, key: QueryKey, page: u32, op: LoadOp) -> FetchCommand {
		FetchCommand::Load(LoadRequest {
			id,
			key,
			page,
			limit: 4,
			op,
		})
	}

	#[test]
	fn shutdown_command_stops_worker() {
		let (tx, _rx, latest) = spawn(Box::new(StubProvider::new(4)), "guest".into());
		assert_eq!(latest.load(Ordering::Relaxed), 0);
		tx.send(FetchCommand::Shutdown).unwrap();
	}

	#[test]
	fn trending_load_is_forwarded_with_items() {
		let provider = StubProvider::new(4);
		let trending_calls = Arc::clone(&provider.trending_calls);
		let (tx, rx, latest) = spawn(Box::new(provider), "guest".into());

		latest.store(1, Ordering::Release);
		tx.send(load(1, QueryKey::trending(Tab::Gif), 1, LoadOp::Replace))
			.unwrap();

		let response = rx.recv_timeout(Duration::from_secs(1)).unwrap();
		assert_eq!(response.id, 1);
		assert_eq!(response.key, QueryKey::trending(Tab::Gif));
		assert_eq!(response.op, LoadOp::Replace);
		assert_eq!(response.outcome.unwrap().len(), 4);
		assert_eq!(trending_calls.load(Ordering::SeqCst), 1);

		tx.send(FetchCommand::Shutdown).unwrap();
	}

	#[test]
	fn search_load_reaches_the_search_endpoint() {
		let provider = StubProvider::new(4);
		let search_calls = Arc::clone(&provider.search_calls);
		let (tx, rx, latest) = spawn(Box::new(provider), "guest".into());

		latest.store(1, Ordering::Release);
		tx.send(load(1, QueryKey::search(Tab::Gif, "tractor"), 2, LoadOp::Append))
			.unwrap();

		let response = rx.recv_timeout(Duration::from_secs(1)).unwrap();
		let items = response.outcome.unwrap();
		assert!(items[0].id.contains("tractor"));
		assert!(items[0].id.contains("p2"));
		assert_eq!(search_calls.load(Ordering::SeqCst), 1);

		tx.send(FetchCommand::Shutdown).unwrap();
	}

	#[test]
	fn provider_failure_travels_as_err_outcome() {
		let (tx, rx, latest) = spawn(Box::new(StubProvider::new(4).failing()), "guest".into());

		latest.store(1, Ordering::Release);
		tx.send(load(1, QueryKey::trending(Tab::Sticker), 1, LoadOp::Replace))
			.unwrap();

		let response = rx.recv_timeout(Duration::from_secs(1)).unwrap();
		assert!(response.outcome.is_err());

		tx.send(FetchCommand::Shutdown).unwrap();
	}

	#[test]
	fn superseded_load_is_dropped_before_dispatch() {
		let provider = StubProvider::new(4);
		let trending_calls = Arc::clone(&provider.trending_calls);
		let (tx, rx, latest) = spawn(Box::new(provider), "guest".into());

		// The UI has already moved on to generation 5.
		latest.store(5, Ordering::Release);
		tx.send(load(1, QueryKey::trending(Tab::Gif), 1, LoadOp::Replace))
			.unwrap();

		assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
		assert_eq!(trending_calls.load(Ordering::SeqCst), 0);

		tx.send(FetchCommand::Shutdown).unwrap();
	}

	#[test]
	fn queued_loads_collapse_to_the_newest() {
		let provider = StubProvider::new(4).with_delay(Duration::from_millis(50));
		let search_calls = Arc::clone(&provider.search_calls);
		let (tx, rx, latest) = spawn(Box::new(provider), "guest".into());

		// Queue three rapid generations; the worker should only run the last
		// one it can see once it picks up work.
		latest.store(1, Ordering::Release);
		tx.send(load(1, QueryKey::search(Tab::Gif, "a"), 1, LoadOp::Replace))
			.unwrap();
		latest.store(2, Ordering::Release);
		tx.send(load(2, QueryKey::search(Tab::Gif, "ab"), 1, LoadOp::Replace))
			.unwrap();
		latest.store(3, Ordering::Release);
		tx.send(load(3, QueryKey::search(Tab::Gif, "abc"), 1, LoadOp::Replace))
			.unwrap();

		let mut responses = Vec::new();
		while let Ok(response) = rx.recv_timeout(Duration::from_millis(500)) {
			responses.push(response);
		}

		// However the races resolve, the final response must be the newest
		// generation and stale generations must not all have been fetched.
		let last = responses.last().expect("at least one response");
		assert_eq!(last.id, 3);
		assert!(search_calls.load(Ordering::SeqCst) < 3);

		tx.send(FetchCommand::Shutdown).unwrap();
	}
}
