use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Kind of token, carried in the `type` claim.
///
/// Decoding goes through [`FromStr`], so an unknown kind surfaces as
/// `JwtError::UnsupportedKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(TokenKind::Access),
            "refresh" => Ok(TokenKind::Refresh),
            other => Err(JwtError::UnsupportedKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for TokenKind {
    type Error = JwtError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Claims carried by every issued token.
///
/// All fields are required; a token whose payload lacks any of them
/// fails to deserialize and is rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Token kind
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

impl Claims {
    /// Build claims for a subject issued at `issued_at` and valid for `lifetime`.
    pub fn new(subject: impl ToString, kind: TokenKind, issued_at: i64, lifetime: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            iat: issued_at,
            exp: issued_at + lifetime.num_seconds(),
            kind,
        }
    }

    /// Check if token is expired.
    ///
    /// A token stops being valid at the second named by `exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
