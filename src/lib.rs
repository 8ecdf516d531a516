//! Core crate exports for building and running the `gifpick` terminal picker.
//!
//! The root module re-exports the provider boundary, the recency store, and
//! the picker entry point so that embedders can run a session without digging
//! through the module hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod provider;
pub mod recency;
mod suggestions;
mod systems;
pub mod types;
pub mod ui;

pub use provider::{HttpProvider, MediaProvider, ProviderError};
pub use recency::{DEFAULT_RECENT_CAP, RecencyStore};
pub use types::{MediaItem, PickOutcome, QualityTier, Tab};
pub use ui::{App, PickerOptions, run};
