//! # mem-cache
//!
//! Fixed-capacity in-memory LRU cache with O(1) lookup, insertion and
//! eviction, built from a hash index and a sentinel-bounded intrusive
//! recency list kept in lock-step.
//!
//! ## Modules
//!
//! - [`cache`]: the public cache controller coordinating index and recency list
//! - [`config`]: serializable cache configuration
//! - [`error`]: typed cache errors
//! - [`stats`]: lifetime hit/miss/eviction statistics
//!
//! ## Design
//!
//! Entries live in a slot arena owned by the recency list; both the sibling
//! links and the hash index refer to entries by slot index. Integer handles
//! plus a single owning arena replace shared mutable references, so every
//! operation stays O(1) without interior mutability or unsafe code.
//!
//! The cache is single-threaded by design: wrap it in a mutex for sharing.
//!
//! ## Example
//!
//! ```rust
//! use mem_cache::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3); // evicts "a"
//!
//! assert_eq!(cache.get("a"), None);
//! assert_eq!(cache.get("c"), Some(&3));
//! # Ok::<(), mem_cache::CacheError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod stats;

mod entry;
mod recency_list;

// Re-exports for convenience
pub use cache::LruCache;
pub use config::{CacheConfig, DEFAULT_CAPACITY};
pub use error::CacheError;
pub use stats::CacheStats;
