use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
    models::domain::Identity,
};

/// Signs and verifies the self-contained bearer token. Swappable so services
/// can be exercised against a mock in tests.
#[cfg_attr(test, mockall::automock)]
pub trait TokenCodec: Send + Sync {
    fn issue(&self, identity: &Identity) -> AppResult<String>;
    fn verify(&self, token: &str) -> AppResult<Claims>;
}

/// HS256 codec over a process-wide secret fixed at startup. Tokens are
/// stateless and unrevoked: a role or membership change only takes effect
/// once outstanding tokens expire.
#[derive(Clone)]
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_hours: i64,
}

impl JwtCodec {
    pub fn new(secret: &SecretString, ttl_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation: Validation::default(),
            ttl_hours,
        }
    }
}

impl TokenCodec for JwtCodec {
    fn issue(&self, identity: &Identity) -> AppResult<String> {
        let claims = Claims::new(identity, self.ttl_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Every verification failure collapses to the same error: bad signature,
    /// malformed payload, and expiry are indistinguishable to the caller.
    fn verify(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, models::domain::Role, test_utils::fixtures::test_identity};

    fn codec_with_ttl(ttl_hours: i64) -> JwtCodec {
        let config = Config::test_config();
        JwtCodec::new(&config.jwt_secret, ttl_hours)
    }

    #[test]
    fn test_issue_then_verify_round_trips_subject_and_role() {
        let codec = codec_with_ttl(1);
        let identity = test_identity(Role::Admin);

        let token = codec.issue(&identity).unwrap();
        assert!(!token.is_empty());

        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.sub, identity.id);
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let codec = codec_with_ttl(1);

        match codec.verify("invalid.token.here") {
            Err(AppError::InvalidToken) => {}
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_rejects_tampered_payload() {
        let codec = codec_with_ttl(1);
        let token = codec.issue(&test_identity(Role::Student)).unwrap();

        // Splice the payload segment from a differently-signed token
        let other = codec_with_ttl(1);
        let forged = other.issue(&test_identity(Role::Admin)).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        parts[1] = forged_parts[1];
        let tampered = parts.join(".");

        assert!(matches!(codec.verify(&tampered), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let codec = codec_with_ttl(1);
        let other = JwtCodec::new(&SecretString::from("another_secret_entirely".to_string()), 1);

        let token = other.issue(&test_identity(Role::Student)).unwrap();
        assert!(matches!(codec.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        // Negative TTL puts the expiry well past the default leeway
        let codec = codec_with_ttl(-2);

        let token = codec.issue(&test_identity(Role::Student)).unwrap();
        assert!(matches!(codec.verify(&token), Err(AppError::InvalidToken)));
    }
}
