//! Example: Session token lifecycle over Redis
//!
//! This example walks a session token through its full life: generate,
//! activate, liveness check, identity extraction, and revocation, with
//! Redis tracking which tokens are live.
//!
//! Run with: cargo run --example session_lifecycle_demo -p sigil_infra

use sigil_core::errors::ErrorResponse;
use sigil_core::{TokenLifecycle, TokenService};
use sigil_infra::cache::{CacheConfig, RedisClient, RedisTokenStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = CacheConfig::from_env();
    let client = RedisClient::new(config).await?;
    let service = TokenService::new(RedisTokenStore::new(client));

    let secret = b"demo-signing-secret";

    // Issue a token; it is signed but not yet live
    let token = service.generate_token(42, "ada", "ada@example.com", secret)?;
    println!("Generated token: {}...", &token[..40.min(token.len())]);
    println!(
        "Live before activation: {}",
        service.check_token(&token).await?
    );

    println!("\nActivating token...");
    service
        .manage_token(TokenLifecycle::Activate, &token)
        .await?;
    println!(
        "Live after activation: {}",
        service.check_token(&token).await?
    );

    // Extract the subject identity back out of the token
    let subject = service.extract_token(&token, secret)?;
    println!(
        "Subject: id={} username={} email={}",
        subject.id, subject.username, subject.email
    );

    // A wrong secret is rejected without consulting the store
    println!("\nVerifying with the wrong secret...");
    match service.extract_token(&token, b"not-the-secret") {
        Ok(_) => println!("Unexpectedly verified"),
        Err(e) => {
            let response = ErrorResponse::from(e);
            println!("Rejected: {}", serde_json::to_string_pretty(&response)?);
        }
    }

    println!("\nRevoking token...");
    service
        .manage_token(TokenLifecycle::Revoke, &token)
        .await?;
    println!(
        "Live after revocation: {}",
        service.check_token(&token).await?
    );

    // Revocation does not touch the signature; the token still verifies
    let still_valid = service.extract_token(&token, secret).is_ok();
    println!("Still verifiable after revocation: {}", still_valid);

    println!("\nExample completed successfully!");
    Ok(())
}
