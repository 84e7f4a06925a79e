//! Main token service implementation

use crate::domain::entities::token::{Claims, TokenSubject};
use crate::errors::DomainResult;
use crate::repositories::TokenStore;

use super::codec;
use super::lifecycle::TokenLifecycle;

/// Service façade for session-token issuance, verification, and liveness
///
/// Signing secrets are per-call parameters; the service holds no key
/// material, only the store handle. A single instance serves concurrent
/// callers.
pub struct TokenService<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> TokenService<S> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `store` - Token store tracking which tokens are live
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Generates a signed session token for a subject
    ///
    /// The token is returned raw and is not yet live; callers activate it
    /// separately through [`manage_token`](Self::manage_token). Each call
    /// embeds a fresh uniqueness marker, so identical arguments still yield
    /// distinct tokens.
    ///
    /// # Arguments
    ///
    /// * `id` - The subject's numeric identifier
    /// * `username` - The subject's username
    /// * `email` - The subject's email address
    /// * `secret` - Symmetric signing secret for this call
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed compact token
    /// * `Err(DomainError)` - Claims could not be encoded
    pub fn generate_token(
        &self,
        id: i64,
        username: &str,
        email: &str,
        secret: &[u8],
    ) -> DomainResult<String> {
        let claims = Claims::new(id, username, email);
        Ok(codec::sign(&claims, secret)?)
    }

    /// Verifies a token and extracts the subject identity
    ///
    /// Signature, declared algorithm, and claim typing are all checked; the
    /// store is not consulted. A verifiable token may well not be live.
    ///
    /// # Arguments
    ///
    /// * `token` - The compact token to verify
    /// * `secret` - Symmetric secret expected to have signed it
    ///
    /// # Returns
    ///
    /// * `Ok(TokenSubject)` - The identity the token was issued for
    /// * `Err(DomainError)` - Malformed input, unexpected signing method,
    ///   wrong secret, or a claim with the wrong type
    pub fn extract_token(&self, token: &str, secret: &[u8]) -> DomainResult<TokenSubject> {
        Ok(codec::verify(token, secret)?)
    }

    /// Reports whether a token is currently live
    ///
    /// The input is used as a store key and never parsed; liveness is
    /// independent of signature validity. Never-activated, lapsed, and
    /// revoked tokens all answer `false` without an error.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw token string
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Token is live
    /// * `Ok(false)` - Token is not live
    /// * `Err(DomainError)` - Store could not be reached or did not answer
    pub async fn check_token(&self, token: &str) -> DomainResult<bool> {
        Ok(self.store.exists(token).await?)
    }

    /// Applies a lifecycle transition to a token
    ///
    /// # Arguments
    ///
    /// * `state` - The transition to apply (activate or revoke)
    /// * `token` - The raw token string
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Transition applied (re-applying is safe)
    /// * `Err(DomainError)` - Store could not be reached or did not answer
    pub async fn manage_token(&self, state: TokenLifecycle, token: &str) -> DomainResult<()> {
        Ok(state.apply(&self.store, token).await?)
    }
}
