pub mod token_store;

pub use token_store::TokenStore;

#[cfg(test)]
pub use token_store::MockTokenStore;
