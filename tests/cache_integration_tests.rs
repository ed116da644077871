//! Integration Tests for the public cache API
//!
//! Exercises construction, get/put sequencing, and stats reporting through
//! the crate root exports.

use mini_lru::{CacheError, Config, LruCache};
use serde_json::Value;

// == Construction ==

#[test]
fn test_zero_capacity_is_a_configuration_error() {
    let result = LruCache::<u32, u32>::new(0);
    assert_eq!(result.err(), Some(CacheError::InvalidCapacity(0)));
}

#[test]
fn test_config_build() {
    let cache: LruCache<String, String> = Config { capacity: 4 }.build().unwrap();
    assert_eq!(cache.capacity(), 4);
    assert!(cache.is_empty());
}

// == Scenarios ==

#[test]
fn test_read_refresh_decides_victim() {
    let mut cache = LruCache::new(2).unwrap();

    cache.put(1, 2);
    cache.put(2, 3);
    assert_eq!(cache.get(&2), Some(&3));
    cache.put(3, 4);

    assert_eq!(cache.get(&1), None);
}

#[test]
fn test_overwrite_refresh_decides_victim() {
    let mut cache = LruCache::new(2).unwrap();

    cache.put(1, 1);
    cache.put(2, 2);
    cache.put(1, 10);
    cache.put(3, 3);

    assert_eq!(cache.get(&2), None);
    assert_eq!(cache.get(&1), Some(&10));
}

#[test]
fn test_get_on_empty_cache() {
    let mut cache: LruCache<u32, u32> = LruCache::new(2).unwrap();

    assert_eq!(cache.get(&99), None);
    assert_eq!(cache.len(), 0);
}

#[test]
fn test_string_keys_and_values() {
    let mut cache = LruCache::new(3).unwrap();

    cache.put("user:1".to_string(), "alice".to_string());
    cache.put("user:2".to_string(), "bob".to_string());
    cache.put("user:3".to_string(), "carol".to_string());
    cache.get("user:1");
    cache.put("user:4".to_string(), "dave".to_string());

    assert!(!cache.contains("user:2"));
    let keys: Vec<&str> = cache.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["user:4", "user:1", "user:3"]);
}

#[test]
fn test_long_sequence_respects_capacity() {
    let mut cache = LruCache::new(10).unwrap();

    for i in 0..1000u32 {
        cache.put(i % 37, i);
        if i % 3 == 0 {
            cache.get(&(i % 11));
        }
        assert!(cache.len() <= 10);
    }
    assert_eq!(cache.len(), 10);
}

// == Stats ==

#[test]
fn test_stats_serialize_to_json() {
    let mut cache = LruCache::new(1).unwrap();

    cache.put("a", 1);
    cache.get("a");
    cache.get("b");
    cache.put("b", 2);

    let json: Value = serde_json::to_value(cache.stats()).unwrap();
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["evictions"], 1);
    assert_eq!(json["total_entries"], 1);
    assert_eq!(json["capacity"], 1);
    assert_eq!(cache.stats().hit_rate(), 0.5);
}
