//! Token store trait defining the interface for session-token liveness.

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::StoreError;

/// Store trait for tracking which session tokens are currently live
///
/// The store is a narrow port over a Redis-compatible key-value store with
/// per-key TTL. A token is live exactly while its key is present; TTL expiry
/// and explicit deletion are indistinguishable to callers.
///
/// # Contract
/// - Operations must not retry internally; callers own retry policy
/// - Every call completes within a bounded time; a timeout surfaces as
///   `StoreError::Unavailable` like any other transport failure
/// - Key absence is a normal answer, never an error
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Mark a token as live for the given duration
    ///
    /// Idempotent: putting a token that is already live succeeds and
    /// refreshes its TTL to the full duration.
    ///
    /// # Arguments
    /// * `token` - The raw token string used as the key
    /// * `ttl` - Time until the key lapses on its own
    ///
    /// # Returns
    /// * `Ok(())` - Token is live with a fresh TTL
    /// * `Err(StoreError)` - Store could not be reached or did not answer
    ///
    /// # Example
    /// ```no_run
    /// # use std::time::Duration;
    /// # use sigil_core::repositories::TokenStore;
    /// # async fn example(store: &impl TokenStore, token: &str) -> Result<(), Box<dyn std::error::Error>> {
    /// store.put(token, Duration::from_secs(3600)).await?;
    /// assert!(store.exists(token).await?);
    /// # Ok(())
    /// # }
    /// ```
    async fn put(&self, token: &str, ttl: Duration) -> Result<(), StoreError>;

    /// Remove a token, ending its liveness immediately
    ///
    /// Idempotent: deleting a token that is not present succeeds.
    ///
    /// # Arguments
    /// * `token` - The raw token string used as the key
    ///
    /// # Returns
    /// * `Ok(())` - Token is no longer live (whether or not it was)
    /// * `Err(StoreError)` - Store could not be reached or did not answer
    async fn delete(&self, token: &str) -> Result<(), StoreError>;

    /// Check whether a token is currently live
    ///
    /// # Arguments
    /// * `token` - The raw token string used as the key
    ///
    /// # Returns
    /// * `Ok(true)` - Token is present and its TTL has not lapsed
    /// * `Ok(false)` - Token was never put, has lapsed, or was deleted
    /// * `Err(StoreError)` - Store could not be reached or did not answer
    async fn exists(&self, token: &str) -> Result<bool, StoreError>;
}
