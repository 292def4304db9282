use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenCodec;
use crate::jwt::TokenKind;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::settings::AuthSettings;

/// Authentication coordinator combining password verification and token issuance.
///
/// Every credential or token failure is reported as one of two uniform
/// errors so callers cannot tell which check failed.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    decoy_hash: String,
}

/// Input for the hash checked when no account exists; its value is irrelevant.
const DECOY_PASSWORD: &str = "decoy-password";

/// Access and refresh tokens issued together at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("JWT error: {0}")]
    Jwt(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Errors
    /// * `InvalidIterations` - Settings carry a zero hash iteration count
    pub fn new(settings: &AuthSettings) -> Result<Self, PasswordError> {
        let password_hasher = PasswordHasher::with_iterations(settings.hash_iterations)?;
        let decoy_hash = password_hasher.hash(DECOY_PASSWORD);

        Ok(Self {
            password_hasher,
            token_codec: TokenCodec::new(settings),
            decoy_hash,
        })
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> String {
        self.password_hasher.hash(password)
    }

    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Issue an access token and a refresh token for the same subject.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token_pair(&self, subject: impl ToString) -> Result<TokenPair, JwtError> {
        let subject = subject.to_string();
        Ok(TokenPair {
            access_token: self.token_codec.issue(&subject, TokenKind::Access)?,
            refresh_token: self.token_codec.issue(&subject, TokenKind::Refresh)?,
        })
    }

    /// Verify credentials and issue a token pair.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier the tokens are bound to
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match or the hash is unreadable
    /// * `Jwt` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
    ) -> Result<TokenPair, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token_pair(subject)?)
    }

    /// Reject a login for which no stored hash exists.
    ///
    /// Runs a full verification against a decoy hash with the configured
    /// iteration count, so an unknown account costs as much as a wrong password.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        let _ = std::hint::black_box(self.verify_password(password, &self.decoy_hash));
        AuthenticationError::InvalidCredentials
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// The refresh token stays valid until its own expiry.
    ///
    /// # Errors
    /// * `InvalidToken` - Refresh token failed verification
    /// * `Jwt` - Token generation failed
    pub fn refresh(&self, refresh_token: &str) -> Result<String, AuthenticationError> {
        let claims = self.verify(refresh_token, TokenKind::Refresh)?;
        Ok(self.token_codec.issue(&claims.sub, TokenKind::Access)?)
    }

    /// Validate an access token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Token failed verification
    pub fn authorize(&self, access_token: &str) -> Result<Claims, AuthenticationError> {
        self.verify(access_token, TokenKind::Access)
    }

    fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, AuthenticationError> {
        self.token_codec.verify(token, kind).map_err(|e| {
            tracing::debug!(kind = %kind, reason = %e, "Token rejected");
            AuthenticationError::InvalidToken
        })
    }
}
