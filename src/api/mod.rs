//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `POST /cache` - Create or update the data for a key
//! - `GET /cache` - List all live keys
//! - `DELETE /cache` - Remove all keys
//! - `GET /cache/:key` - Read a key, filling a miss with a generated value
//! - `DELETE /cache/:key` - Remove one key
//! - `GET /stats` - Store statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
