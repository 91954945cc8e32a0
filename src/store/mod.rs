//! Store Module
//!
//! In-memory key-value storage with TTL expiry, oldest-first capacity
//! eviction, and miss-fill reads.

mod fill;
mod order;
mod record;
mod stats;
mod store;


// Re-export public types
pub use fill::{random_string, DEFAULT_FILL_LEN};
pub use order::InsertOrder;
pub use record::Record;
pub use stats::StoreStats;
pub use store::Store;

// == Public Constants ==
/// Maximum allowed key length in characters, after trimming
pub const MAX_KEY_LENGTH: usize = 100;
