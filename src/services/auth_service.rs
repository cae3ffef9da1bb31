//! Authentication service - Admin passphrase check and session tokens.
//!
//! The admin gate has a single shared passphrase stored as an Argon2 hash.
//! A successful login yields an HS256 token that the API layer places in
//! the session cookie; every admin request verifies it.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{Config, ADMIN_SUBJECT, SECONDS_PER_HOUR};
use crate::domain::Passphrase;
use crate::errors::{AppError, AppResult};

/// Session token claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Signed session token and its lifetime in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct SessionToken {
    pub token: String,
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check the admin passphrase and issue a session token
    async fn login(&self, passphrase: &str) -> AppResult<SessionToken>;

    /// Verify a session token and extract its claims
    fn verify_session(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    passphrase: Passphrase,
    secret: Vec<u8>,
    ttl_hours: i64,
}

impl Authenticator {
    pub fn new(passphrase: Passphrase, secret: impl Into<Vec<u8>>, ttl_hours: i64) -> Self {
        Self {
            passphrase,
            secret: secret.into(),
            ttl_hours,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.admin_passphrase(),
            config.session_secret_bytes(),
            config.session_ttl_hours,
        )
    }

    fn issue(&self) -> AppResult<SessionToken> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.ttl_hours);

        let claims = Claims {
            sub: ADMIN_SUBJECT.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )?;

        Ok(SessionToken {
            token,
            expires_in: self.ttl_hours * SECONDS_PER_HOUR,
        })
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, passphrase: &str) -> AppResult<SessionToken> {
        if !self.passphrase.verify(passphrase) {
            tracing::warn!("Admin login rejected");
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!("Admin session issued");
        self.issue()
    }

    fn verify_session(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &Validation::default(),
        )?;

        if token_data.claims.sub != ADMIN_SUBJECT {
            return Err(AppError::Unauthorized);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes!!";

    fn authenticator() -> Authenticator {
        Authenticator::new(Passphrase::new("open sesame").unwrap(), SECRET, 3)
    }

    fn sign(claims: &Claims, secret: &[u8]) -> String {
        encode(&Header::default(), claims, &EncodingKey::from_secret(secret)).unwrap()
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let auth = authenticator();

        let session = auth.login("open sesame").await.unwrap();
        assert_eq!(session.expires_in, 3 * 3600);

        let claims = auth.verify_session(&session.token).unwrap();
        assert_eq!(claims.sub, ADMIN_SUBJECT);
        assert_eq!(claims.exp - claims.iat, 3 * 3600);
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_passphrase() {
        let result = authenticator().login("open sesame!").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: ADMIN_SUBJECT.to_string(),
            exp: now + 600,
            iat: now,
        };
        let token = sign(&claims, b"another-secret-another-secret-another");

        assert!(matches!(
            authenticator().verify_session(&token),
            Err(AppError::Jwt(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: ADMIN_SUBJECT.to_string(),
            exp: now - 2 * 3600,
            iat: now - 5 * 3600,
        };

        assert!(authenticator().verify_session(&sign(&claims, SECRET)).is_err());
    }

    #[test]
    fn test_foreign_subject_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "someone-else".to_string(),
            exp: now + 600,
            iat: now,
        };

        assert!(matches!(
            authenticator().verify_session(&sign(&claims, SECRET)),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(authenticator().verify_session("not-a-token").is_err());
    }
}
