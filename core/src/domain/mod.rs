//! Domain layer containing business entities for session tokens.

pub mod entities;

// Re-export commonly used domain types
pub use entities::{Claims, TokenSubject, TOKEN_TTL, TOKEN_TTL_SECONDS};
