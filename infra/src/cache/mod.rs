//! Cache module for Redis-backed session state
//!
//! This module wraps a multiplexed Redis connection and builds the
//! [`TokenStore`](sigil_core::repositories::TokenStore) implementation on
//! top of it. Every command is bounded by a response timeout and failures
//! surface immediately; nothing here retries.

pub mod redis_client;
pub mod token_store;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use token_store::RedisTokenStore;

// Re-export commonly used types
pub use crate::config::CacheConfig;
