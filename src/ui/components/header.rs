use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Tabs};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::types::{Tab, ViewMode};
use crate::ui::style;

/// Argument bundle for rendering the header row.
pub(crate) struct HeaderContext<'a> {
	pub query: &'a str,
	pub mode: ViewMode,
	pub tab: Tab,
	pub loading: bool,
	pub throbber_state: &'a mut ThrobberState,
	pub area: Rect,
}

/// Render the prompt, query input, loading indicator, and tab bar on one row.
pub(crate) fn render_header(frame: &mut Frame, context: HeaderContext<'_>) {
	let HeaderContext {
		query,
		mode,
		tab,
		loading,
		throbber_state,
		area,
	} = context;

	let prompt = format!("{} > ", mode.label());
	let prompt_width = prompt.width() as u16;
	let tabs_width = tabs_width();

	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt_width),
			Constraint::Min(1),
			Constraint::Length(2),
			Constraint::Length(tabs_width),
		])
		.split(area);

	frame.render_widget(Paragraph::new(prompt).style(style::prompt_style()), horizontal[0]);

	let input_area = horizontal[1];
	frame.render_widget(Paragraph::new(query), input_area);
	let cursor_x = input_area.x + (query.width() as u16).min(input_area.width.saturating_sub(1));
	frame.set_cursor_position((cursor_x, input_area.y));

	if loading {
		let throbber = Throbber::default();
		frame.render_stateful_widget(throbber, horizontal[2], throbber_state);
	}

	let selected = Tab::ALL.iter().position(|candidate| *candidate == tab).unwrap_or(0);
	let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.label())).collect();
	let tabs = Tabs::new(titles)
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(style::tab_highlight_style());
	frame.render_widget(tabs, horizontal[3]);
}

fn tabs_width() -> u16 {
	let labels: u16 = Tab::ALL.iter().map(|tab| tab.label().width() as u16 + 1).sum();
	labels
}
