/// Cursor and viewport state for the results grid.
///
/// Items flow left-to-right, top-to-bottom; `columns` and `viewport_rows`
/// are refreshed from the layout on every draw, so movement between draws
/// uses the most recent geometry.
pub(crate) struct GridState {
	pub selected: usize,
	pub offset_rows: usize,
	pub columns: usize,
	pub viewport_rows: usize,
}

impl Default for GridState {
	fn default() -> Self {
		Self {
			selected: 0,
			offset_rows: 0,
			columns: 2,
			viewport_rows: 0,
		}
	}
}

impl GridState {
	pub fn reset(&mut self) {
		self.selected = 0;
		self.offset_rows = 0;
	}

	/// Keep the cursor inside the item list after it shrank or grew.
	pub fn clamp(&mut self, len: usize) {
		if len == 0 {
			self.reset();
			return;
		}
		if self.selected >= len {
			self.selected = len - 1;
		}
		self.ensure_visible(len);
	}

	pub fn total_rows(&self, len: usize) -> usize {
		len.div_ceil(self.columns.max(1))
	}

	pub fn move_left(&mut self, len: usize) {
		if self.selected > 0 {
			self.selected -= 1;
		}
		self.ensure_visible(len);
	}

	pub fn move_right(&mut self, len: usize) {
		if self.selected + 1 < len {
			self.selected += 1;
		}
		self.ensure_visible(len);
	}

	pub fn move_up(&mut self, len: usize) {
		let columns = self.columns.max(1);
		if self.selected >= columns {
			self.selected -= columns;
		}
		self.ensure_visible(len);
	}

	pub fn move_down(&mut self, len: usize) {
		let columns = self.columns.max(1);
		if len == 0 {
			return;
		}
		if self.selected + columns < len {
			self.selected += columns;
		} else if self.selected + 1 < len {
			// Partial last row: land on the final item.
			self.selected = len - 1;
		}
		self.ensure_visible(len);
	}

	pub fn page_down(&mut self, len: usize) {
		let step = self.columns.max(1) * self.viewport_rows.max(1);
		self.selected = (self.selected + step).min(len.saturating_sub(1));
		self.ensure_visible(len);
	}

	pub fn page_up(&mut self, len: usize) {
		let step = self.columns.max(1) * self.viewport_rows.max(1);
		self.selected = self.selected.saturating_sub(step);
		self.ensure_visible(len);
	}

	/// Scroll the viewport so the selected row is visible.
	pub fn ensure_visible(&mut self, len: usize) {
		if len == 0 || self.viewport_rows == 0 {
			self.offset_rows = 0;
			return;
		}
		let row = self.selected / self.columns.max(1);
		if row < self.offset_rows {
			self.offset_rows = row;
		} else if row >= self.offset_rows + self.viewport_rows {
			self.offset_rows = row + 1 - self.viewport_rows;
		}
	}

	/// `(scroll_top, scroll_height, client_height)` in row units for the
	/// scroll sentinel.
	pub fn scroll_metrics(&self, len: usize) -> (usize, usize, usize) {
		(self.offset_rows, self.total_rows(len), self.viewport_rows)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn grid(columns: usize, viewport_rows: usize) -> GridState {
		GridState {
			columns,
			viewport_rows,
			..GridState::default()
		}
	}

	#[test]
	fn vertical_movement_steps_by_columns() {
		let mut grid = grid(3, 4);
		grid.move_down(10);
		assert_eq!(grid.selected, 3);
		grid.move_down(10);
		assert_eq!(grid.selected, 6);
		grid.move_up(10);
		assert_eq!(grid.selected, 3);
	}

	#[test]
	fn move_down_into_partial_last_row_lands_on_last_item() {
		let mut grid = grid(3, 4);
		grid.selected = 7;
		grid.move_down(8);
		assert_eq!(grid.selected, 7, "already last item");

		grid.selected = 5;
		grid.move_down(8);
		assert_eq!(grid.selected, 7);
	}

	#[test]
	fn viewport_follows_the_cursor() {
		let mut grid = grid(2, 3);
		for _ in 0..6 {
			grid.move_down(20);
		}
		// Row 6 with 3 visible rows: offset must be at least 4.
		assert_eq!(grid.selected, 12);
		assert_eq!(grid.offset_rows, 4);

		grid.selected = 0;
		grid.ensure_visible(20);
		assert_eq!(grid.offset_rows, 0);
	}

	#[test]
	fn clamp_handles_shrinking_lists() {
		let mut grid = grid(2, 3);
		grid.selected = 15;
		grid.clamp(4);
		assert_eq!(grid.selected, 3);
		grid.clamp(0);
		assert_eq!(grid.selected, 0);
		assert_eq!(grid.offset_rows, 0);
	}

	#[test]
	fn scroll_metrics_are_in_row_units() {
		let mut grid = grid(2, 5);
		grid.selected = 19;
		grid.ensure_visible(20);
		let (top, height, client) = grid.scroll_metrics(20);
		assert_eq!(height, 10);
		assert_eq!(client, 5);
		assert_eq!(top, 5);
	}
}
