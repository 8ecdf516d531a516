use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use super::components::{HeaderContext, render_grid, render_header};
use super::style;
use crate::suggestions;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let show_suggestions = self.suggestions_visible();
		let constraints = if show_suggestions {
			vec![
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
			]
		} else {
			vec![Constraint::Length(1), Constraint::Min(1)]
		};

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints(constraints)
			.split(area);

		let loading = self.fetch.is_in_flight();
		render_header(
			frame,
			HeaderContext {
				query: self.input.text(),
				mode: self.view_mode,
				tab: self.tab,
				loading,
				throbber_state: &mut self.throbber_state,
				area: layout[0],
			},
		);

		if show_suggestions {
			self.render_suggestions(frame, layout[1]);
		}

		let results_area = layout[layout.len() - 1];
		let key = self.active_key();
		let feed = self.feeds.get(&key);
		render_grid(frame, results_area, feed, &mut self.grid);
	}

	fn render_suggestions(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
		let seeds = suggestions::for_tab(self.tab);
		let mut spans = vec![Span::styled("try: ", style::suggestion_style())];
		for (index, seed) in seeds.iter().enumerate() {
			if index > 0 {
				spans.push(Span::styled(" · ", style::suggestion_style()));
			}
			spans.push(Span::styled(*seed, style::suggestion_style()));
		}
		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}
}
