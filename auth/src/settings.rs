use std::fmt;

use chrono::Duration;

/// Default lifetime of an access token.
pub const DEFAULT_ACCESS_LIFETIME_MINUTES: i64 = 10;

/// Default lifetime of a refresh token.
pub const DEFAULT_REFRESH_LIFETIME_DAYS: i64 = 7;

/// Default PBKDF2 iteration count for new password hashes.
pub const DEFAULT_HASH_ITERATIONS: u32 = 100_000;

/// Immutable authentication settings.
///
/// Built once at startup and handed to the [`crate::Authenticator`].
/// Changing the secret invalidates every outstanding token.
#[derive(Clone)]
pub struct AuthSettings {
    secret: Vec<u8>,
    pub access_lifetime: Duration,
    pub refresh_lifetime: Duration,
    pub hash_iterations: u32,
}

impl AuthSettings {
    /// Create settings with default lifetimes and iteration count.
    ///
    /// # Arguments
    /// * `secret` - MAC key used to sign tokens
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            access_lifetime: Duration::minutes(DEFAULT_ACCESS_LIFETIME_MINUTES),
            refresh_lifetime: Duration::days(DEFAULT_REFRESH_LIFETIME_DAYS),
            hash_iterations: DEFAULT_HASH_ITERATIONS,
        }
    }

    pub fn with_access_lifetime(mut self, lifetime: Duration) -> Self {
        self.access_lifetime = lifetime;
        self
    }

    pub fn with_refresh_lifetime(mut self, lifetime: Duration) -> Self {
        self.refresh_lifetime = lifetime;
        self
    }

    pub fn with_hash_iterations(mut self, iterations: u32) -> Self {
        self.hash_iterations = iterations;
        self
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("secret", &"<redacted>")
            .field("access_lifetime", &self.access_lifetime)
            .field("refresh_lifetime", &self.refresh_lifetime)
            .field("hash_iterations", &self.hash_iterations)
            .finish()
    }
}
