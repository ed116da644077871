//! Cache Module
//!
//! Provides a fixed-capacity in-memory cache with LRU eviction.

mod entry;
mod index;
mod list;
mod stats;
mod store;


// Re-export public types
pub use entry::{Entry, Handle};
pub use index::KeyIndex;
pub use list::{Iter, RecencyList};
pub use stats::CacheStats;
pub use store::LruCache;
