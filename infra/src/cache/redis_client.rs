//! Redis cache client implementation
//!
//! This module provides a thin async Redis client used by the session token
//! store. Every command runs over a shared multiplexed connection and is
//! bounded by the configured response timeout. Operations are never retried
//! here; a failure is reported to the caller on the first attempt.

use std::future::Future;
use std::time::Duration;

use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisResult};
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use crate::config::CacheConfig;
use crate::InfrastructureError;

/// Async Redis client with a bounded response time
///
/// Cloning is cheap; all clones share the same multiplexed connection.
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Upper bound on the time a single command may take
    response_timeout: Duration,
}

impl RedisClient {
    /// Create a new Redis client
    ///
    /// Dials the server once, bounded by `config.connection_timeout`.
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Redis client or error
    ///
    /// # Example
    /// ```no_run
    /// use sigil_infra::cache::RedisClient;
    /// use sigil_infra::config::CacheConfig;
    ///
    /// async fn create_client() -> Result<RedisClient, Box<dyn std::error::Error>> {
    ///     let config = CacheConfig::new("redis://localhost:6379");
    ///     let client = RedisClient::new(config).await?;
    ///     Ok(client)
    /// }
    /// ```
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        info!("Creating Redis client with URL: {}", mask_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connect_timeout = Duration::from_secs(config.connection_timeout);
        let connection = match timeout(connect_timeout, client.get_multiplexed_async_connection())
            .await
        {
            Ok(Ok(connection)) => connection,
            Ok(Err(e)) => {
                error!("Failed to connect to Redis: {}", e);
                return Err(InfrastructureError::Cache(e));
            }
            Err(_) => {
                error!(
                    "Connecting to Redis took longer than {}s",
                    connect_timeout.as_secs()
                );
                return Err(InfrastructureError::Timeout {
                    waited_secs: connect_timeout.as_secs(),
                });
            }
        };

        info!("Redis client created successfully");

        Ok(Self {
            connection,
            response_timeout: Duration::from_secs(config.response_timeout),
        })
    }

    /// Run a single Redis command, bounded by the response timeout
    ///
    /// No retry: whatever the command returns on the first attempt is the
    /// answer, and exceeding the timeout is an error in its own right.
    async fn bounded<T>(
        &self,
        command: impl Future<Output = RedisResult<T>>,
    ) -> Result<T, InfrastructureError> {
        match timeout(self.response_timeout, command).await {
            Ok(result) => result.map_err(InfrastructureError::Cache),
            Err(_) => Err(InfrastructureError::Timeout {
                waited_secs: self.response_timeout.as_secs(),
            }),
        }
    }

    /// Set a value with expiration time
    ///
    /// # Arguments
    /// * `key` - Cache key
    /// * `value` - Value to store
    /// * `expiry_seconds` - Time to live in seconds
    ///
    /// # Returns
    /// * `Result<(), InfrastructureError>` - Success or error
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}' with expiry {}s", key, expiry_seconds);

        let mut conn = self.connection.clone();
        let result = self
            .bounded(async move { conn.set_ex::<_, _, ()>(key, value, expiry_seconds).await })
            .await;

        match result {
            Ok(()) => {
                debug!("Successfully set key '{}'", key);
                Ok(())
            }
            Err(e) => {
                error!("Failed to set key '{}': {}", key, e);
                Err(e)
            }
        }
    }

    /// Get a value from cache
    ///
    /// # Arguments
    /// * `key` - Cache key
    ///
    /// # Returns
    /// * `Result<Option<String>, InfrastructureError>` - Value, or None if missing
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("Getting key '{}'", key);

        let mut conn = self.connection.clone();
        let result = self
            .bounded(async move { conn.get::<_, Option<String>>(key).await })
            .await;

        match result {
            Ok(value) => {
                if value.is_some() {
                    debug!("Successfully retrieved key '{}'", key);
                } else {
                    debug!("Key '{}' not found", key);
                }
                Ok(value)
            }
            Err(e) => {
                error!("Failed to get key '{}': {}", key, e);
                Err(e)
            }
        }
    }

    /// Delete a key from cache
    ///
    /// # Arguments
    /// * `key` - Cache key to delete
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if the key existed
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("Deleting key '{}'", key);

        let mut conn = self.connection.clone();
        let result = self
            .bounded(async move { conn.del::<_, u32>(key).await })
            .await;

        match result {
            Ok(deleted_count) => {
                let deleted = deleted_count > 0;
                if deleted {
                    debug!("Successfully deleted key '{}'", key);
                } else {
                    debug!("Key '{}' was not found", key);
                }
                Ok(deleted)
            }
            Err(e) => {
                error!("Failed to delete key '{}': {}", key, e);
                Err(e)
            }
        }
    }

    /// Check if a key exists in cache
    ///
    /// # Arguments
    /// * `key` - Cache key
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if key exists
    pub async fn exists(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("Checking if key '{}' exists", key);

        let mut conn = self.connection.clone();
        let result = self
            .bounded(async move { conn.exists::<_, bool>(key).await })
            .await;

        match result {
            Ok(exists) => {
                debug!("Key '{}' exists: {}", key, exists);
                Ok(exists)
            }
            Err(e) => {
                error!("Failed to check key '{}' existence: {}", key, e);
                Err(e)
            }
        }
    }

    /// Get time-to-live for a key
    ///
    /// # Arguments
    /// * `key` - Cache key
    ///
    /// # Returns
    /// * `Result<Option<i64>, InfrastructureError>` - TTL in seconds, None if the
    ///   key doesn't exist or has no expiry
    pub async fn ttl(&self, key: &str) -> Result<Option<i64>, InfrastructureError> {
        debug!("Getting TTL for key '{}'", key);

        let mut conn = self.connection.clone();
        let result = self
            .bounded(async move { conn.ttl::<_, i64>(key).await })
            .await;

        match result {
            // Redis answers -1 for "no expiry" and -2 for "no such key"
            Ok(ttl) if ttl >= 0 => {
                debug!("Key '{}' has TTL: {}s", key, ttl);
                Ok(Some(ttl))
            }
            Ok(_) => {
                debug!("Key '{}' has no TTL", key);
                Ok(None)
            }
            Err(e) => {
                error!("Failed to get TTL for key '{}': {}", key, e);
                Err(e)
            }
        }
    }

    /// Check if the Redis connection is healthy
    ///
    /// Performs a PING command to verify connectivity.
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if healthy, error otherwise
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        debug!("Performing Redis health check");

        let mut conn = self.connection.clone();
        let result = self
            .bounded(async move { redis::cmd("PING").query_async::<_, String>(&mut conn).await })
            .await;

        match result {
            Ok(response) if response == "PONG" => {
                debug!("Redis health check passed");
                Ok(true)
            }
            Ok(response) => {
                warn!("Redis health check returned unexpected response: {}", response);
                Ok(false)
            }
            Err(e) => {
                error!("Redis health check failed: {}", e);
                Err(e)
            }
        }
    }
}

/// Mask sensitive parts of a Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
