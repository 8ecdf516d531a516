/// Watches the results viewport and decides when a load-more should fire.
///
/// The trigger is positional only; the single-flight guarantee comes from
/// the caller checking the append-in-flight flag (set synchronously before
/// dispatch, cleared when the load settles either way).
pub(crate) struct ScrollSentinel {
	threshold: f64,
}

const APPEND_THRESHOLD: f64 = 0.8;

impl Default for ScrollSentinel {
	fn default() -> Self {
		Self {
			threshold: APPEND_THRESHOLD,
		}
	}
}

impl ScrollSentinel {
	/// Whether the viewport has scrolled past the threshold fraction of the
	/// content. Row units behave identically to pixel units here.
	pub fn should_trigger(&self, scroll_top: usize, scroll_height: usize, client_height: usize) -> bool {
		scrolled_fraction(scroll_top, scroll_height, client_height) > self.threshold
	}
}

fn scrolled_fraction(scroll_top: usize, scroll_height: usize, client_height: usize) -> f64 {
	if scroll_height == 0 {
		return 0.0;
	}
	// Content shorter than the viewport scrolls as if it filled it, so the
	// fraction never exceeds 1.0.
	let scroll_height = scroll_height.max(client_height);
	(scroll_top + client_height) as f64 / scroll_height as f64
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn triggers_past_eighty_percent() {
		let sentinel = ScrollSentinel::default();
		// 20 rows total, 5 visible: offset 12 shows rows 12..17 (85%).
		assert!(sentinel.should_trigger(12, 20, 5));
		// Offset 10 shows rows 10..15 (75%).
		assert!(!sentinel.should_trigger(10, 20, 5));
	}

	#[test]
	fn exact_threshold_does_not_trigger() {
		let sentinel = ScrollSentinel::default();
		assert!(!sentinel.should_trigger(11, 20, 5));
	}

	#[test]
	fn empty_content_never_triggers() {
		let sentinel = ScrollSentinel::default();
		assert!(!sentinel.should_trigger(0, 0, 5));
	}

	#[test]
	fn fully_visible_content_triggers() {
		// Everything fits in the viewport; the user is at the bottom by
		// definition and more can be requested.
		let sentinel = ScrollSentinel::default();
		assert!(sentinel.should_trigger(0, 3, 5));
	}

	#[test]
	fn fraction_is_capped_for_short_content() {
		assert_eq!(scrolled_fraction(0, 3, 5), 1.0);
		assert_eq!(scrolled_fraction(0, 5, 5), 1.0);
	}
}
