//! Dataset Provider
//!
//! Loads the game sales CSV once at startup. The resulting [`Dataset`] is
//! immutable and is passed by reference into every aggregation.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{load_dataset, DatasetLoader};
pub use types::{Dataset, DatasetSummary, GameRecord, Metric, UNRATED};
