//! Interactive terminal UI orchestration for `gifpick`.
//!
//! [`state`] owns all mutable picker state on the UI thread; [`fetch`] talks
//! to the background fetch worker; [`runtime`] drives the terminal event
//! loop. The remaining submodules are the small widgets and state machines
//! (debounce, scroll sentinel, grid, query input) the picker is made of.

mod actions;
pub mod components;
mod debounce;
mod fetch;
mod grid;
mod input;
mod render;
mod runtime;
mod scroll;
mod state;
mod style;

pub use runtime::run;
pub use state::{App, PickerOptions};
