//! Authentication utilities library
//!
//! Provides the credential and token core used by the pin service:
//! - Password hashing (PBKDF2-HMAC-SHA256, `pbkdf2-sha256$salt$iterations$key`)
//! - Access/refresh JWT issuance and verification
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_iterations(1_000).unwrap();
//! let hash = hasher.hash("my_password");
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{AuthSettings, TokenCodec, TokenKind};
//!
//! let codec = TokenCodec::new(&AuthSettings::new("secret_key_at_least_32_bytes_long!"));
//! let token = codec.issue("user123", TokenKind::Access).unwrap();
//! let claims = codec.verify(&token, TokenKind::Access).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert!(codec.verify(&token, TokenKind::Refresh).is_err());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AuthSettings, Authenticator};
//!
//! let settings = AuthSettings::new("secret_key_at_least_32_bytes_long!")
//!     .with_hash_iterations(1_000);
//! let auth = Authenticator::new(&settings).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123");
//!
//! // Login: verify and issue tokens
//! let pair = auth.authenticate("password123", &hash, "user123").unwrap();
//!
//! // Refresh and authorize
//! let access_token = auth.refresh(&pair.refresh_token).unwrap();
//! let claims = auth.authorize(&access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod settings;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::TokenPair;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenCodec;
pub use jwt::TokenKind;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use settings::AuthSettings;
