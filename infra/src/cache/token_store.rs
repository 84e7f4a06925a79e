//! Redis-backed session token store
//!
//! Implements the [`TokenStore`] port from `sigil_core` on top of
//! [`RedisClient`]. A live token is a Redis key of the form
//! `session:token:{token}` holding a fixed marker value with an expiry.
//! Key present means the session is live; key absent means the token was
//! never activated, was revoked, or has lapsed. Redis does the expiring,
//! so no sweeper is needed here.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use sigil_core::errors::StoreError;
use sigil_core::repositories::TokenStore;

use crate::cache::RedisClient;
use crate::InfrastructureError;

/// Value stored under a live token's key; only key presence carries meaning
const TOKEN_LIVE_MARKER: &str = "1";

/// Session token store backed by Redis
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// use sigil_core::repositories::TokenStore;
/// use sigil_infra::cache::{RedisClient, RedisTokenStore};
/// use sigil_infra::config::CacheConfig;
///
/// async fn activate(token: &str) -> Result<(), Box<dyn std::error::Error>> {
///     let client = RedisClient::new(CacheConfig::from_env()).await?;
///     let store = RedisTokenStore::new(client);
///     store.put(token, Duration::from_secs(3600)).await?;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct RedisTokenStore {
    /// Redis client for cache operations
    redis_client: RedisClient,
}

impl RedisTokenStore {
    /// Create a new Redis-backed token store
    ///
    /// # Arguments
    /// * `redis_client` - Redis client for cache operations
    pub fn new(redis_client: RedisClient) -> Self {
        Self { redis_client }
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn put(&self, token: &str, ttl: Duration) -> Result<(), StoreError> {
        let key = format_token_key(token);

        debug!("Activating session token: {}", mask_token(token));

        // Redis rejects a zero expiry; a sub-second TTL still pins the key
        // for one second.
        let expiry_seconds = ttl.as_secs().max(1);
        self.redis_client
            .set_with_expiry(&key, TOKEN_LIVE_MARKER, expiry_seconds)
            .await
            .map_err(unavailable)?;

        info!(
            "Session token activated for {}s: {}",
            expiry_seconds,
            mask_token(token)
        );

        Ok(())
    }

    async fn delete(&self, token: &str) -> Result<(), StoreError> {
        let key = format_token_key(token);

        debug!("Revoking session token: {}", mask_token(token));

        let removed = self.redis_client.delete(&key).await.map_err(unavailable)?;
        if removed {
            info!("Session token revoked: {}", mask_token(token));
        } else {
            debug!("Session token was already absent: {}", mask_token(token));
        }

        Ok(())
    }

    async fn exists(&self, token: &str) -> Result<bool, StoreError> {
        let key = format_token_key(token);

        let live = self.redis_client.exists(&key).await.map_err(unavailable)?;
        debug!("Session token {} live: {}", mask_token(token), live);

        Ok(live)
    }
}

/// Map an infrastructure failure onto the store port's error
fn unavailable(e: InfrastructureError) -> StoreError {
    StoreError::Unavailable {
        message: e.to_string(),
    }
}

/// Format the Redis key for a session token
pub(crate) fn format_token_key(token: &str) -> String {
    format!("session:token:{}", token)
}

/// Mask a session token for logging (show only a short prefix)
pub(crate) fn mask_token(token: &str) -> String {
    match token.get(..12) {
        Some(prefix) if token.len() > 12 => format!("{}****", prefix),
        _ => "****".to_string(),
    }
}
