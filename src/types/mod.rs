//! Types shared across the user interface and fetch pipeline.

mod feed;
mod media;
mod outcome;

pub use feed::{FeedState, QueryKey, Tab, ViewMode};
pub use media::{MediaItem, QualityTier};
pub use outcome::PickOutcome;
