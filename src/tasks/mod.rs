//! Tasks Module
//!
//! Background tasks supporting the cache store.

pub mod sweep;

pub use sweep::spawn_sweep_task;
