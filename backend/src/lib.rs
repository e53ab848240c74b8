//! # SpaceX Launch Dashboard Backend
//!
//! Interactive dashboard over a fixed table of SpaceX launch records.
//!
//! A user picks a launch site and a payload-mass range; the backend answers
//! with two chart descriptions, a success pie chart and a payload vs. outcome
//! scatter chart, which the browser renders. The backend exposes a REST API
//! via Axum together with a static dashboard page.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Launch records and dashboard input values
//! - [`db`]: Dataset store: CSV loading and the read-only [`db::Dataset`]
//! - [`services`]: Pie aggregation and scatter filtering
//! - [`bindings`]: Input-change events dispatched to the chart computations
//! - [`routes`]: Chart and layout data types
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod bindings;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
