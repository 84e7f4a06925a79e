//! Lifecycle transitions for session tokens.

use crate::domain::entities::token::TOKEN_TTL;
use crate::errors::StoreError;
use crate::repositories::TokenStore;

/// Lifecycle transition applied to a token's store entry
///
/// Activation and revocation share one shape so callers dispatch them
/// uniformly; a new transition is a new variant plus its match arm. Each
/// transition is idempotent because the underlying store operation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenLifecycle {
    /// Make the token live for the full session TTL
    Activate,

    /// End the token's liveness immediately
    Revoke,
}

impl TokenLifecycle {
    /// Applies this transition to a token
    ///
    /// Re-applying is safe: activating a live token refreshes its TTL,
    /// revoking an absent token is a no-op.
    ///
    /// # Arguments
    ///
    /// * `store` - The token store to mutate
    /// * `token` - The raw token string
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Transition applied
    /// * `Err(StoreError)` - Store could not be reached or did not answer
    pub async fn apply<S>(self, store: &S, token: &str) -> Result<(), StoreError>
    where
        S: TokenStore + ?Sized,
    {
        match self {
            TokenLifecycle::Activate => store.put(token, TOKEN_TTL).await,
            TokenLifecycle::Revoke => store.delete(token).await,
        }
    }
}
