//! Mini LRU - demonstration harness
//!
//! Replays a short get/put sequence against a small cache and logs the
//! resulting statistics.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_lru::{Config, LruCache};

/// Capacity used when `CACHE_CAPACITY` is unset; small enough to show an eviction.
const DEMO_CAPACITY: usize = 2;

fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_lru=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env_or(DEMO_CAPACITY).context("failed to load configuration")?;
    info!("Configuration loaded: capacity={}", config.capacity);

    let mut cache: LruCache<i64, i64> = config.build()?;
    cache.put(1, 2);
    cache.put(2, 3);
    println!("{}", lookup(&mut cache, 2));

    cache.put(3, 4);
    println!("{}", lookup(&mut cache, 1));

    let stats = serde_json::to_string(&cache.stats()).context("failed to serialize stats")?;
    info!("Cache stats: {}", stats);

    Ok(())
}

/// Missing keys print as -1.
fn lookup(cache: &mut LruCache<i64, i64>, key: i64) -> i64 {
    cache.get(&key).copied().unwrap_or(-1)
}
