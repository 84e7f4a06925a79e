//! Mock implementation of TokenStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::errors::StoreError;

use super::r#trait::TokenStore;

/// Mock token store for testing
///
/// Keeps token deadlines on the tokio clock, so paused-clock tests can
/// advance time and observe TTL refresh and lapse deterministically.
pub struct MockTokenStore {
    entries: Arc<RwLock<HashMap<String, Instant>>>,
    available: bool,
}

impl MockTokenStore {
    /// Create a new mock store that answers every call
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            available: true,
        }
    }

    /// Create a mock store where every call fails with `StoreError::Unavailable`
    pub fn unavailable() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            available: false,
        }
    }

    /// Deadline recorded for a token, if it is present
    pub async fn expires_at(&self, token: &str) -> Option<Instant> {
        let entries = self.entries.read().await;
        entries.get(token).copied()
    }

    fn ensure_available(&self) -> Result<(), StoreError> {
        if self.available {
            Ok(())
        } else {
            Err(StoreError::Unavailable {
                message: "mock store marked unavailable".to_string(),
            })
        }
    }
}

impl Default for MockTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn put(&self, token: &str, ttl: Duration) -> Result<(), StoreError> {
        self.ensure_available()?;

        let mut entries = self.entries.write().await;
        entries.insert(token.to_string(), Instant::now() + ttl);
        Ok(())
    }

    async fn delete(&self, token: &str) -> Result<(), StoreError> {
        self.ensure_available()?;

        let mut entries = self.entries.write().await;
        entries.remove(token);
        Ok(())
    }

    async fn exists(&self, token: &str) -> Result<bool, StoreError> {
        self.ensure_available()?;

        let now = Instant::now();
        let mut entries = self.entries.write().await;
        // Lapsed entries disappear, mirroring server-side expiry.
        entries.retain(|_, deadline| *deadline > now);
        Ok(entries.contains_key(token))
    }
}
