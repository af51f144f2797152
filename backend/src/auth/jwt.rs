//! JWT token issuance and verification
//!
//! Tokens are stateless: the server holds no record of issued tokens and
//! trusts a token's claims for its whole lifetime. Keys are pre-computed
//! once at startup and shared via AppState.
//!
//! The algorithm is pinned to HS256 on both the issue and verify paths.
//! Verification never reads the algorithm from the token's own header, so
//! a tampered header cannot downgrade or confuse the check.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::AuthError;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed JWT keys for efficient token operations
///
/// These are expensive to create, so they are built once and cached in
/// AppState. Wrapped in Arc for cheap cloning.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl TokenKeys {
    /// Create new keys from the signing secret. Called once at startup.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Token service for issuing and verifying signed identity tokens
///
/// Create this once at application startup and store it in AppState;
/// cloning is cheap afterwards.
#[derive(Clone)]
pub struct TokenService {
    keys: TokenKeys,
    token_expiry_secs: i64,
}

impl TokenService {
    pub fn new(secret: &str, token_expiry_secs: i64) -> Self {
        Self {
            keys: TokenKeys::new(secret),
            token_expiry_secs,
        }
    }

    /// Issue a token asserting the given username
    ///
    /// Claims are `{sub, iat: now, exp: now + lifetime}`. Two issuances for
    /// the same user at different seconds produce different tokens.
    pub fn issue(&self, username: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.token_expiry_secs);

        let claims = Claims {
            sub: username.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }

    /// Verify a token's signature and expiry, returning its claims
    ///
    /// Expiry is strict: a token is valid only while the current time is
    /// before `exp` (no leeway window).
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match decode::<Claims>(token, self.keys.decoding(), &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(AuthError::TokenExpired),
                _ => Err(AuthError::InvalidToken),
            },
        }
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn token_expiry_secs(&self) -> i64 {
        self.token_expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> TokenService {
        TokenService::new("test-secret", 259_200)
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = create_test_service();

        let token = service.issue("alice01").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, "alice01");
        assert_eq!(claims.exp - claims.iat, 259_200);
    }

    #[test]
    fn test_token_has_three_segments() {
        let service = create_test_service();
        let token = service.issue("alice01").unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_expired_token_rejected_as_expired() {
        // Negative lifetime puts exp in the past at issuance
        let service = TokenService::new("test-secret", -60);
        let token = service.issue("alice01").unwrap();

        assert_eq!(service.verify(&token).unwrap_err(), AuthError::TokenExpired);
    }

    #[test]
    fn test_wrong_secret_rejected_as_invalid() {
        let service = create_test_service();
        let other = TokenService::new("another-secret", 259_200);

        let token = other.issue("alice01").unwrap();

        assert_eq!(service.verify(&token).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn test_tampered_payload_rejected_as_invalid() {
        let service = create_test_service();
        let token = service.issue("alice01").unwrap();

        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let payload = parts[1].clone();
        // Flip one byte of the payload segment
        let flipped = if payload.starts_with('A') {
            payload.replacen('A', "B", 1)
        } else {
            format!("A{}", &payload[1..])
        };
        parts[1] = flipped;
        let tampered = parts.join(".");

        assert_eq!(service.verify(&tampered).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn test_algorithm_from_token_header_is_ignored() {
        // A token signed with the same secret but a different HMAC variant
        // must not pass: verification pins HS256 rather than trusting the
        // token's header.
        let service = create_test_service();
        let claims = Claims {
            sub: "alice01".to_string(),
            exp: (Utc::now() + Duration::seconds(600)).timestamp(),
            iat: Utc::now().timestamp(),
        };
        let hs384 = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(service.verify(&hs384).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = create_test_service();
        assert_eq!(
            service.verify("not.a.token").unwrap_err(),
            AuthError::InvalidToken
        );
        assert_eq!(service.verify("").unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let cloned = service.clone(); // Arc increments only
        let token = service.issue("alice01").unwrap();
        assert!(cloned.verify(&token).is_ok());
    }
}
