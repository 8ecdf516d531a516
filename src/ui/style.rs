//! Shared styles for the picker widgets.

use ratatui::style::{Color, Modifier, Style};

pub(crate) fn prompt_style() -> Style {
	Style::default().fg(Color::Cyan)
}

pub(crate) fn tab_highlight_style() -> Style {
	Style::default()
		.fg(Color::Black)
		.bg(Color::Cyan)
		.add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_cell_style() -> Style {
	Style::default()
		.fg(Color::Black)
		.bg(Color::White)
		.add_modifier(Modifier::BOLD)
}

pub(crate) fn suggestion_style() -> Style {
	Style::default().fg(Color::DarkGray)
}

pub(crate) fn empty_style() -> Style {
	Style::default()
		.fg(Color::DarkGray)
		.add_modifier(Modifier::ITALIC)
}
