//! Dataset store for the launch table.
//!
//! The table is read once at startup and never written again:
//!
//! ```text
//! ┌──────────────────────────┐
//! │  spacex_launch_dash.csv  │
//! └────────────┬─────────────┘
//!              │  loader::load (validated once)
//! ┌────────────▼─────────────┐
//! │  Dataset (Arc, read-only)│──► services::success_pie
//! │  Vec<LaunchRecord>       │──► services::payload_scatter
//! └──────────────────────────┘
//! ```
//!
//! There is no global instance; callers hold an `Arc<Dataset>` and pass it to
//! whatever needs it.

pub mod dataset;
pub mod error;
pub mod loader;

pub use dataset::Dataset;
pub use error::{DataLoadError, DataLoadResult};
pub use loader::{load, load_from_reader};
