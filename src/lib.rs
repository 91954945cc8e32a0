//! Keycache - an in-memory key-value cache server
//!
//! Stores opaque JSON values under string keys with a fixed TTL, fills
//! read misses with generated values, and evicts the oldest record when
//! the capacity bound is reached.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
