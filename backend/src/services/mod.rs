//! Service layer for the chart computations.
//!
//! Services are pure functions over a borrowed [`Dataset`](crate::db::Dataset):
//! they never cache, never mutate, and return the same figure for the same
//! inputs.

pub mod payload_scatter;
pub mod success_pie;

#[cfg(test)]
#[path = "payload_scatter_tests.rs"]
mod payload_scatter_tests;

pub use payload_scatter::{build_scatter_figure, filter_payload};
pub use success_pie::{aggregate_success, build_pie_figure};
