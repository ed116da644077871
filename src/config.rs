//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::hash::Hash;

use crate::cache::LruCache;
use crate::error::{CacheError, Result};

/// Environment variable holding the maximum number of entries.
pub const CAPACITY_ENV: &str = "CACHE_CAPACITY";

/// Capacity used when `CACHE_CAPACITY` is not set.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    ///
    /// Missing variables fall back to defaults. A value that is set but is not
    /// a non-negative integer is reported as [`CacheError::InvalidConfig`].
    pub fn from_env() -> Result<Self> {
        Self::from_env_or(DEFAULT_CAPACITY)
    }

    /// Like [`Config::from_env`], with `capacity` used when the variable is unset.
    pub fn from_env_or(capacity: usize) -> Result<Self> {
        let capacity = match env::var(CAPACITY_ENV) {
            Ok(raw) => parse_capacity(&raw)?,
            Err(_) => capacity,
        };

        Ok(Self { capacity })
    }

    /// Builds an empty cache sized by this configuration.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn build<K, V>(&self) -> Result<LruCache<K, V>>
    where
        K: Hash + Eq + Clone,
    {
        LruCache::new(self.capacity)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

fn parse_capacity(raw: &str) -> Result<usize> {
    raw.trim()
        .parse()
        .map_err(|_| CacheError::InvalidConfig(format!("{}={}", CAPACITY_ENV, raw)))
}
