use chrono::Duration;
use chrono::Utc;

use super::claims::Claims;
use super::claims::TokenKind;
use super::errors::JwtError;
use super::handler::JwtHandler;
use crate::settings::AuthSettings;

/// Issues and verifies access and refresh tokens.
///
/// Holds only immutable configuration, so a single instance can be shared
/// across any number of concurrent requests.
pub struct TokenCodec {
    handler: JwtHandler,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl TokenCodec {
    pub fn new(settings: &AuthSettings) -> Self {
        Self {
            handler: JwtHandler::new(settings.secret()),
            access_lifetime: settings.access_lifetime,
            refresh_lifetime: settings.refresh_lifetime,
        }
    }

    pub fn lifetime(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_lifetime,
            TokenKind::Refresh => self.refresh_lifetime,
        }
    }

    /// Issue a token of `kind` for `subject`, starting now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: impl ToString, kind: TokenKind) -> Result<String, JwtError> {
        self.issue_at(subject, kind, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now` (Unix seconds).
    pub fn issue_at(
        &self,
        subject: impl ToString,
        kind: TokenKind,
        now: i64,
    ) -> Result<String, JwtError> {
        let claims = Claims::new(subject, kind, now, self.lifetime(kind));
        self.handler.encode(&claims)
    }

    /// Verify a token and check that it is of the expected kind.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed token, bad signature or missing claims
    /// * `TokenExpired` - Token is past its expiry
    /// * `KindMismatch` - Token is of the other kind
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims, JwtError> {
        self.verify_at(token, expected, Utc::now().timestamp())
    }

    /// Verify a token against an explicit current time (Unix seconds).
    pub fn verify_at(&self, token: &str, expected: TokenKind, now: i64) -> Result<Claims, JwtError> {
        let claims: Claims = self.handler.decode(token)?;

        if claims.kind != expected {
            return Err(JwtError::KindMismatch {
                expected: expected.to_string(),
                actual: claims.kind.to_string(),
            });
        }

        if claims.is_expired(now) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}
