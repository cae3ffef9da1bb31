//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SESSION_TTL_HOURS,
    DEFAULT_UPLOAD_DIR, DEV_ADMIN_PASSPHRASE, MIN_SESSION_SECRET_LENGTH,
};
use crate::domain::Passphrase;

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    session_secret: String,
    pub session_ttl_hours: i64,
    admin_passphrase_hash: String,
    pub server_host: String,
    pub server_port: u16,
    pub upload_dir: String,
    /// Prefix for absolute pagination links (e.g. `https://catalog.example.com`)
    pub public_base_url: Option<String>,
    pub secure_cookies: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("session_secret", &"[REDACTED]")
            .field("session_ttl_hours", &self.session_ttl_hours)
            .field("admin_passphrase_hash", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("upload_dir", &self.upload_dir)
            .field("public_base_url", &self.public_base_url)
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics in release builds if SESSION_SECRET or ADMIN_PASSPHRASE_HASH
    /// is missing, and always if SESSION_SECRET is too short.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let session_secret = env::var("SESSION_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!("SESSION_SECRET not set, using insecure default for development");
                "dev-session-secret-minimum-32-chars!".to_string()
            } else {
                panic!("SESSION_SECRET environment variable must be set in production");
            }
        });

        if session_secret.len() < MIN_SESSION_SECRET_LENGTH {
            panic!(
                "SESSION_SECRET must be at least {} characters long",
                MIN_SESSION_SECRET_LENGTH
            );
        }

        let admin_passphrase_hash = env::var("ADMIN_PASSPHRASE_HASH").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!(
                    "ADMIN_PASSPHRASE_HASH not set, accepting the development passphrase '{}'",
                    DEV_ADMIN_PASSPHRASE
                );
                match Passphrase::new(DEV_ADMIN_PASSPHRASE) {
                    Ok(hash) => hash.into_string(),
                    Err(e) => panic!("Failed to hash development passphrase: {}", e),
                }
            } else {
                panic!("ADMIN_PASSPHRASE_HASH environment variable must be set in production");
            }
        });

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            session_secret,
            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SESSION_TTL_HOURS),
            admin_passphrase_hash,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            secure_cookies: env::var("SECURE_COOKIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(!cfg!(debug_assertions)),
        }
    }

    /// Get session secret bytes for token signing/verification.
    pub fn session_secret_bytes(&self) -> &[u8] {
        self.session_secret.as_bytes()
    }

    /// Stored Argon2 hash of the admin passphrase.
    pub fn admin_passphrase(&self) -> Passphrase {
        Passphrase::from_hash(self.admin_passphrase_hash.clone())
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
