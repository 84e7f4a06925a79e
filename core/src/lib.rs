//! # Sigil Core
//!
//! Core domain layer for the Sigil session-token service.
//! This crate contains the claim codec, the token-store port, the lifecycle
//! state machine, and the token service façade, along with the error types
//! shared by all of them.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;
