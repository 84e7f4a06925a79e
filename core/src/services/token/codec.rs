//! Claim codec: signing and verification of session-token JWTs.
//!
//! Signing pins HMAC-SHA256. Verification checks the algorithm declared in
//! the token header before any signature work, so a forged header cannot
//! steer verification onto a different method. Claims decode into a dynamic
//! JSON map and are extracted with explicit type checks, letting typing
//! failures name the offending claim.

use jsonwebtoken::{
    decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde_json::{Map, Value};

use crate::domain::entities::token::{Claims, TokenSubject};
use crate::errors::TokenError;

/// The only algorithm this service signs with or accepts
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Signs claims into a compact JWT
///
/// Any byte string is an acceptable secret; signing does not fail for
/// unusual key material.
///
/// # Arguments
///
/// * `claims` - The claim set to embed
/// * `secret` - Symmetric signing secret for this call
///
/// # Returns
///
/// * `Ok(String)` - The signed compact token
/// * `Err(TokenError::SigningFailed)` - Claims could not be encoded
pub fn sign(claims: &Claims, secret: &[u8]) -> Result<String, TokenError> {
    encode(
        &Header::new(SIGNING_ALGORITHM),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenError::SigningFailed {
        message: e.to_string(),
    })
}

/// Verifies a compact JWT and extracts the subject identity
///
/// # Arguments
///
/// * `token` - The compact token to verify
/// * `secret` - Symmetric secret expected to have signed it
///
/// # Returns
///
/// * `Ok(TokenSubject)` - Signature and claim typing both check out
/// * `Err(TokenError::Malformed)` - Not a decodable token, or an embedded
///   `exp` has passed
/// * `Err(TokenError::UnexpectedSigningMethod)` - Header declares another
///   algorithm
/// * `Err(TokenError::InvalidSignature)` - Wrong secret
/// * `Err(TokenError::InvalidClaimType)` / `Err(TokenError::MissingClaim)` -
///   Claim typing failed, naming the claim
pub fn verify(token: &str, secret: &[u8]) -> Result<TokenSubject, TokenError> {
    // The declared algorithm is checked before the signature is touched.
    let header = decode_header(token).map_err(|e| TokenError::Malformed {
        reason: e.to_string(),
    })?;

    if header.alg != SIGNING_ALGORITHM {
        return Err(TokenError::UnexpectedSigningMethod {
            expected: format!("{:?}", SIGNING_ALGORITHM),
            actual: format!("{:?}", header.alg),
        });
    }

    let token_data = decode::<Map<String, Value>>(
        token,
        &DecodingKey::from_secret(secret),
        &validation(),
    )
    .map_err(map_decode_error)?;

    subject_from_claims(&token_data.claims)
}

/// Validation pinned to the signing algorithm
///
/// No registered claims are required; issued tokens carry none. An
/// embedded `exp` is still honored when present.
fn validation() -> Validation {
    let mut validation = Validation::new(SIGNING_ALGORITHM);
    validation.set_required_spec_claims::<&str>(&[]);
    validation.validate_exp = true;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation
}

fn map_decode_error(err: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Malformed {
            reason: "embedded expiry has passed".to_string(),
        },
        ErrorKind::ImmatureSignature => TokenError::Malformed {
            reason: "token not yet valid".to_string(),
        },
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        // Backstop: the header pre-check reports algorithm mismatches first.
        ErrorKind::InvalidAlgorithm => TokenError::UnexpectedSigningMethod {
            expected: format!("{:?}", SIGNING_ALGORITHM),
            actual: "unknown".to_string(),
        },
        _ => TokenError::Malformed {
            reason: err.to_string(),
        },
    }
}

/// Builds the subject from the raw claim map, checking each claim's type
fn subject_from_claims(claims: &Map<String, Value>) -> Result<TokenSubject, TokenError> {
    Ok(TokenSubject {
        id: integer_claim(claims, "id")?,
        username: string_claim(claims, "username")?,
        email: string_claim(claims, "email")?,
    })
}

fn integer_claim(claims: &Map<String, Value>, name: &str) -> Result<i64, TokenError> {
    let value = claims.get(name).ok_or_else(|| TokenError::MissingClaim {
        claim: name.to_string(),
    })?;

    value.as_i64().ok_or_else(|| TokenError::InvalidClaimType {
        claim: name.to_string(),
        expected: "integer".to_string(),
        actual: json_type_name(value).to_string(),
    })
}

fn string_claim(claims: &Map<String, Value>, name: &str) -> Result<String, TokenError> {
    let value = claims.get(name).ok_or_else(|| TokenError::MissingClaim {
        claim: name.to_string(),
    })?;

    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| TokenError::InvalidClaimType {
            claim: name.to_string(),
            expected: "string".to_string(),
            actual: json_type_name(value).to_string(),
        })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
