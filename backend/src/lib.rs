//! # Ferry Stats Backend
//!
//! Aggregation engine behind the ferry network dashboard.
//!
//! Given the per-route timelines of a ferry network and a slider position
//! (`progress`, `0..=100` across a ten-day window), the crate computes the
//! figures the stats tab renders: mean profit and passengers, the
//! profit-per-passenger gauge, and the trailing ten-tick trend window.
//!
//! ## Architecture
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Travels, timeline entries and progress ticks
//! - [`services`]: Pure computations (stats, timelines, thresholds, prediction adapter)
//! - [`db`]: In-memory dataset store behind a repository trait
//! - [`io`]: JSON fixture loading
//! - [`config`]: Server configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types

pub mod api;
pub mod config;
pub mod db;
pub mod io;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
