//! Domain entities representing core business objects.

pub mod token;

// Re-export commonly used types
pub use token::{Claims, TokenSubject, TOKEN_TTL, TOKEN_TTL_SECONDS};
