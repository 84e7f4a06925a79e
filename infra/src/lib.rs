//! # Sigil Infrastructure
//!
//! Concrete adapters behind the `sigil_core` ports. Today that means one
//! thing: a Redis-backed [`TokenStore`](sigil_core::repositories::TokenStore)
//! used to track which session tokens are live.
//!
//! ## Layout
//!
//! - **Cache**: Redis client wrapper and the token store built on it
//! - **Config**: environment-driven settings for the Redis connection
//!
//! Network calls made here are bounded by a response timeout and are never
//! retried; callers decide whether a failed operation is worth repeating.

// Re-export core error types for convenience
pub use sigil_core::errors::*;

/// Cache module - Redis client and the token store
pub mod cache;

/// Configuration module for infrastructure services
pub mod config;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// A Redis command exceeded the configured response timeout
    #[error("Cache timeout: Redis did not answer within {waited_secs}s")]
    Timeout { waited_secs: u64 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
