//! Unit tests for the claim codec

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;
use crate::services::token::codec;

const SECRET: &[u8] = b"secret";

fn test_claims() -> Claims {
    Claims::new(1, "username", "email@email.com")
}

/// Signs an arbitrary JSON payload with the test secret
fn sign_payload(payload: &serde_json::Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        payload,
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

#[test]
fn test_round_trip() {
    let claims = Claims::new(42, "alice", "alice@example.com");

    let token = codec::sign(&claims, SECRET).unwrap();
    assert_eq!(token.split('.').count(), 3);

    let subject = codec::verify(&token, SECRET).unwrap();
    assert_eq!(subject, claims.subject());
}

#[test]
fn test_identical_inputs_produce_distinct_tokens() {
    let first = codec::sign(&test_claims(), SECRET).unwrap();
    let second = codec::sign(&test_claims(), SECRET).unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_wrong_secret_is_rejected() {
    let token = codec::sign(&test_claims(), SECRET).unwrap();

    let err = codec::verify(&token, b"some-other-secret").unwrap_err();
    assert!(matches!(err, TokenError::InvalidSignature));
}

#[test]
fn test_hs384_token_is_rejected_by_name() {
    let token = encode(
        &Header::new(Algorithm::HS384),
        &test_claims(),
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap();

    match codec::verify(&token, SECRET).unwrap_err() {
        TokenError::UnexpectedSigningMethod { expected, actual } => {
            assert_eq!(expected, "HS256");
            assert_eq!(actual, "HS384");
        }
        other => panic!("expected UnexpectedSigningMethod, got {:?}", other),
    }
}

#[test]
fn test_hs512_token_is_rejected() {
    let token = encode(
        &Header::new(Algorithm::HS512),
        &test_claims(),
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap();

    let err = codec::verify(&token, SECRET).unwrap_err();
    assert!(matches!(err, TokenError::UnexpectedSigningMethod { .. }));
}

#[test]
fn test_forged_rs256_header_fails_before_signature_check() {
    // Header swapped to RS256 over garbage signature bytes. The algorithm
    // check must answer; a signature error here would mean the signature
    // was inspected first.
    let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"RS256\",\"typ\":\"JWT\"}");
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&test_claims()).unwrap());
    let token = format!("{}.{}.{}", header, payload, URL_SAFE_NO_PAD.encode(b"garbage"));

    match codec::verify(&token, SECRET).unwrap_err() {
        TokenError::UnexpectedSigningMethod { actual, .. } => assert_eq!(actual, "RS256"),
        other => panic!("expected UnexpectedSigningMethod, got {:?}", other),
    }
}

#[test]
fn test_alg_none_token_is_rejected() {
    // "none" is not a registered signing algorithm; the header does not
    // even parse.
    let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"none\",\"typ\":\"JWT\"}");
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&test_claims()).unwrap());
    let token = format!("{}.{}.", header, payload);

    let err = codec::verify(&token, SECRET).unwrap_err();
    assert!(matches!(err, TokenError::Malformed { .. }));
}

#[test]
fn test_garbage_inputs_are_malformed() {
    for input in ["", "not-a-token", "a.b", "a.b.c.d"] {
        let err = codec::verify(input, SECRET).unwrap_err();
        assert!(
            matches!(err, TokenError::Malformed { .. }),
            "input {:?} gave {:?}",
            input,
            err
        );
    }
}

#[test]
fn test_past_embedded_expiry_is_malformed() {
    // Tokens carry no exp by default, but one that does and has passed is
    // no longer acceptable input.
    let token = sign_payload(&json!({
        "id": 1,
        "username": "username",
        "email": "email@email.com",
        "jti": "fixed",
        "exp": Utc::now().timestamp() - 3600,
    }));

    let err = codec::verify(&token, SECRET).unwrap_err();
    assert!(matches!(err, TokenError::Malformed { .. }));
}

#[test]
fn test_future_embedded_expiry_is_accepted() {
    let token = sign_payload(&json!({
        "id": 1,
        "username": "username",
        "email": "email@email.com",
        "jti": "fixed",
        "exp": Utc::now().timestamp() + 3600,
    }));

    let subject = codec::verify(&token, SECRET).unwrap();
    assert_eq!(subject.id, 1);
}

#[test]
fn test_wrong_claim_types_name_the_claim() {
    let cases = [
        (
            json!({"id": "1", "username": "username", "email": "email@email.com", "jti": "x"}),
            "id",
            "integer",
            "string",
        ),
        (
            json!({"id": 1.5, "username": "username", "email": "email@email.com", "jti": "x"}),
            "id",
            "integer",
            "number",
        ),
        (
            json!({"id": 1, "username": 42, "email": "email@email.com", "jti": "x"}),
            "username",
            "string",
            "number",
        ),
        (
            json!({"id": 1, "username": "username", "email": true, "jti": "x"}),
            "email",
            "string",
            "boolean",
        ),
    ];

    for (payload, claim, expected, actual) in cases {
        let token = sign_payload(&payload);

        match codec::verify(&token, SECRET).unwrap_err() {
            TokenError::InvalidClaimType {
                claim: c,
                expected: e,
                actual: a,
            } => {
                assert_eq!(c, claim);
                assert_eq!(e, expected);
                assert_eq!(a, actual);
            }
            other => panic!("expected InvalidClaimType for {}, got {:?}", claim, other),
        }
    }
}

#[test]
fn test_missing_claim_names_the_claim() {
    let token = sign_payload(&json!({
        "username": "username",
        "email": "email@email.com",
        "jti": "x",
    }));

    match codec::verify(&token, SECRET).unwrap_err() {
        TokenError::MissingClaim { claim } => assert_eq!(claim, "id"),
        other => panic!("expected MissingClaim, got {:?}", other),
    }
}
