//! Integration tests for `RedisTokenCache` using testcontainers.
//!
//! Docker must be running. Run with
//! `cargo test -p hotel-auth --test redis_token_cache -- --ignored`.

#![allow(clippy::expect_used)]

use hotel_auth::providers::TokenCache;
use hotel_auth::stores::RedisTokenCache;
use std::time::Duration;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::redis::Redis;

async fn setup_cache() -> (ContainerAsync<Redis>, RedisTokenCache) {
    let container = Redis::default()
        .start()
        .await
        .expect("Failed to start redis container");
    let port = container
        .get_host_port_ipv4(6379)
        .await
        .expect("Failed to get redis port");
    let url = format!("redis://127.0.0.1:{port}");

    let mut retries = 0;
    let max_retries = 30;
    loop {
        if let Ok(cache) = RedisTokenCache::new(&url).await {
            if cache.ping().await.is_ok() {
                return (container, cache);
            }
        }

        assert!(retries < max_retries, "Failed to connect after {max_retries} retries");
        retries += 1;
        tokio::time::sleep(Duration::from_millis(500)).await;
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_token_lifecycle() {
    let (_container, cache) = setup_cache().await;

    cache
        .put("desk", "token-1", Duration::from_secs(60))
        .await
        .expect("put");
    assert_eq!(
        cache.get("desk").await.expect("get").as_deref(),
        Some("token-1")
    );

    cache
        .put("desk", "token-2", Duration::from_secs(60))
        .await
        .expect("put");
    assert_eq!(
        cache.get("desk").await.expect("get").as_deref(),
        Some("token-2")
    );

    cache.delete("desk").await.expect("delete");
    assert_eq!(cache.get("desk").await.expect("get"), None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_token_expires_with_ttl() {
    let (_container, cache) = setup_cache().await;

    cache
        .put("night", "token", Duration::from_secs(1))
        .await
        .expect("put");
    tokio::time::sleep(Duration::from_millis(2100)).await;

    assert_eq!(cache.get("night").await.expect("get"), None);
}
