use std::time::{Duration, Instant};

/// Collapses a burst of keystrokes into a single effective-query emission.
///
/// Every schedule call restarts the quiet-period clock with the latest text;
/// the pending value is emitted by [`poll`](Self::poll) once the deadline
/// passes uninterrupted. Clearing the input is handled by the caller, which
/// cancels the timer and applies the empty query immediately.
pub(crate) struct QueryDebouncer {
	quiet: Duration,
	pending: Option<(Instant, String)>,
}

impl QueryDebouncer {
	pub fn new(quiet: Duration) -> Self {
		Self {
			quiet,
			pending: None,
		}
	}

	/// Restart the quiet-period timer with the current raw input.
	pub fn schedule(&mut self, raw: &str, now: Instant) {
		self.pending = Some((now + self.quiet, raw.to_string()));
	}

	/// Drop any pending emission.
	pub fn cancel(&mut self) {
		self.pending = None;
	}

	/// Emit the pending query if its quiet period has elapsed.
	pub fn poll(&mut self, now: Instant) -> Option<String> {
		match &self.pending {
			Some((deadline, _)) if *deadline <= now => {
				self.pending.take().map(|(_, query)| query)
			}
			_ => None,
		}
	}

	#[cfg(test)]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const QUIET: Duration = Duration::from_millis(500);

	#[test]
	fn burst_collapses_to_one_emission_with_final_value() {
		let mut debouncer = QueryDebouncer::new(QUIET);
		let start = Instant::now();

		// Seven keystrokes, 40ms apart, all inside the quiet period.
		for (index, prefix) in ["t", "tr", "tra", "trac", "tract", "tracto", "tractor"]
			.iter()
			.enumerate()
		{
			let at = start + Duration::from_millis(40 * index as u64);
			debouncer.schedule(prefix, at);
			assert_eq!(debouncer.poll(at), None, "no emission mid-burst");
		}

		let last = start + Duration::from_millis(240);
		assert_eq!(debouncer.poll(last + QUIET), Some("tractor".to_string()));
		assert_eq!(debouncer.poll(last + QUIET), None, "emitted exactly once");
	}

	#[test]
	fn each_keystroke_restarts_the_clock() {
		let mut debouncer = QueryDebouncer::new(QUIET);
		let start = Instant::now();

		debouncer.schedule("a", start);
		let almost = start + QUIET - Duration::from_millis(1);
		debouncer.schedule("ab", almost);

		// The first deadline has passed, but it was reset.
		assert_eq!(debouncer.poll(start + QUIET), None);
		assert_eq!(debouncer.poll(almost + QUIET), Some("ab".to_string()));
	}

	#[test]
	fn cancel_drops_the_pending_value() {
		let mut debouncer = QueryDebouncer::new(QUIET);
		let start = Instant::now();
		debouncer.schedule("abc", start);
		debouncer.cancel();
		assert!(!debouncer.is_pending());
		assert_eq!(debouncer.poll(start + QUIET * 2), None);
	}
}
