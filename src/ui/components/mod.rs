//! Reusable widgets for the picker: the header row (prompt, input, loading
//! throbber, tab bar) and the results grid.

mod grid;
mod header;

pub(crate) use grid::render_grid;
pub(crate) use header::{HeaderContext, render_header};
