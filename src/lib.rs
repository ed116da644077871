//! Mini LRU - A fixed-capacity in-memory key/value cache
//!
//! Provides O(1) `get` and `put` with least-recently-used eviction.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheStats, LruCache};
pub use config::Config;
pub use error::{CacheError, Result};
