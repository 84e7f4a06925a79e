//! Token service module for session-token management
//!
//! This module handles all token-related operations including:
//! - JWT session-token signing and verification
//! - Lifecycle transitions (activation and revocation)
//! - Store-backed liveness checks

mod codec;
mod lifecycle;
mod service;

#[cfg(test)]
mod tests;

pub use lifecycle::TokenLifecycle;
pub use service::TokenService;
