use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::types::{PickOutcome, ViewMode};

impl App {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<PickOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

		match key.code {
			KeyCode::Esc => {
				return Ok(Some(PickOutcome {
					accepted: false,
					item: None,
					query: self.input.text().to_string(),
				}));
			}
			KeyCode::Enter => {
				let item = self.current_item();
				if let Some(item) = &item {
					self.record_selection(item.clone());
				}
				return Ok(Some(PickOutcome {
					accepted: true,
					item,
					query: self.input.text().to_string(),
				}));
			}
			KeyCode::Tab => self.set_tab(self.tab.next()),
			KeyCode::BackTab => self.set_tab(self.tab.previous()),
			KeyCode::Char('t') if ctrl => self.set_view_mode(ViewMode::Trending),
			KeyCode::Char('r') if ctrl => self.set_view_mode(ViewMode::Recent),
			KeyCode::Char('n') if ctrl => self.cycle_suggestion(),
			KeyCode::Char('x') if ctrl => self.clear_recents(),
			KeyCode::Up => self.move_grid(|grid, len| grid.move_up(len)),
			KeyCode::Down => self.move_grid(|grid, len| grid.move_down(len)),
			KeyCode::Left => self.move_grid(|grid, len| grid.move_left(len)),
			KeyCode::Right => self.move_grid(|grid, len| grid.move_right(len)),
			KeyCode::PageUp => self.move_grid(|grid, len| grid.page_up(len)),
			KeyCode::PageDown => self.move_grid(|grid, len| grid.page_down(len)),
			KeyCode::Backspace => {
				if self.input.backspace() {
					self.on_input_changed();
				}
			}
			KeyCode::Char(ch) if !ctrl => {
				self.input.insert(ch);
				self.on_input_changed();
			}
			_ => {}
		}
		Ok(None)
	}

	fn move_grid(&mut self, movement: impl FnOnce(&mut super::grid::GridState, usize)) {
		let len = self.visible_feed().map(|feed| feed.items.len()).unwrap_or(0);
		if len == 0 {
			return;
		}
		movement(&mut self.grid, len);
		self.after_grid_scroll();
	}
}
