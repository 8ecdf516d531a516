use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use unicode_width::UnicodeWidthChar;

use crate::types::{FeedState, QualityTier};
use crate::ui::grid::GridState;
use crate::ui::style;

const MIN_CELL_WIDTH: u16 = 24;
const MAX_COLUMNS: usize = 4;

/// Render the accumulated item list as a multi-column grid of titles.
///
/// Also refreshes the grid geometry (columns, viewport rows) from the
/// current layout so that cursor movement between draws stays consistent.
pub(crate) fn render_grid(
	frame: &mut Frame,
	area: Rect,
	feed: Option<&FeedState>,
	grid: &mut GridState,
) {
	grid.columns = ((area.width / MIN_CELL_WIDTH) as usize).clamp(1, MAX_COLUMNS);
	grid.viewport_rows = area.height as usize;

	let items = feed.map(|feed| feed.items.as_slice()).unwrap_or(&[]);
	if items.is_empty() {
		let loading = feed.map(|feed| feed.loading).unwrap_or(false);
		let message = if loading { "Loading…" } else { "No results" };
		let empty = Paragraph::new(message)
			.alignment(Alignment::Center)
			.style(style::empty_style());
		frame.render_widget(empty, area);
		return;
	}

	grid.ensure_visible(items.len());

	let columns = grid.columns;
	let cell_width = (area.width / columns as u16).saturating_sub(1).max(1) as usize;
	let total_rows = grid.total_rows(items.len());
	let last_row = (grid.offset_rows + grid.viewport_rows).min(total_rows);

	let rows: Vec<Row> = (grid.offset_rows..last_row)
		.map(|row_index| {
			let cells = (0..columns).map(|column_index| {
				let item_index = row_index * columns + column_index;
				match items.get(item_index) {
					Some(item) => {
						let label = cell_label(&item.title, item.url(QualityTier::Preview), cell_width);
						let cell = Cell::from(label);
						if item_index == grid.selected {
							cell.style(style::selected_cell_style())
						} else {
							cell
						}
					}
					None => Cell::from(""),
				}
			});
			Row::new(cells)
		})
		.collect();

	let widths = vec![Constraint::Ratio(1, columns as u32); columns];
	let table = Table::new(rows, widths).column_spacing(1);
	frame.render_widget(table, area);
}

/// Title for a grid cell, falling back to the preview URL tail for untitled
/// items, truncated to the cell width.
fn cell_label(title: &str, preview_url: Option<&str>, width: usize) -> String {
	let text = if title.trim().is_empty() {
		preview_url
			.and_then(|url| url.rsplit('/').next())
			.unwrap_or("(untitled)")
	} else {
		title
	};
	truncate_to_width(text, width)
}

fn truncate_to_width(text: &str, width: usize) -> String {
	let mut used = 0;
	let mut out = String::new();
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width > width.saturating_sub(1) {
			out.push('…');
			return out;
		}
		used += ch_width;
		out.push(ch);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truncation_respects_display_width() {
		assert_eq!(truncate_to_width("short", 20), "short");
		let truncated = truncate_to_width("a very long media title", 10);
		assert!(truncated.ends_with('…'));
		assert!(truncated.chars().count() <= 10);
	}

	#[test]
	fn untitled_items_fall_back_to_url_tail() {
		assert_eq!(
			cell_label("  ", Some("https://cdn/media/funny.gif"), 20),
			"funny.gif"
		);
		assert_eq!(cell_label("", None, 20), "(untitled)");
	}
}
