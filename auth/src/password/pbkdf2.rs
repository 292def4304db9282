use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::PasswordError;
use crate::settings::DEFAULT_HASH_ITERATIONS;

/// Identifier stored in the first field of every encoded hash.
pub const ALGORITHM_ID: &str = "pbkdf2-sha256";

const SALT_LENGTH: usize = 16;
const KEY_LENGTH: usize = 32;

/// Password hashing implementation.
///
/// Derives keys with PBKDF2-HMAC-SHA256 and encodes them as
/// `pbkdf2-sha256$<base64 salt>$<iterations>$<base64 key>`.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    iterations: u32,
}

impl PasswordHasher {
    /// Create a new password hasher with the default iteration count.
    pub fn new() -> Self {
        Self {
            iterations: DEFAULT_HASH_ITERATIONS,
        }
    }

    /// Create a password hasher with a custom iteration count.
    ///
    /// # Errors
    /// * `InvalidIterations` - Iteration count is zero
    pub fn with_iterations(iterations: u32) -> Result<Self, PasswordError> {
        if iterations == 0 {
            return Err(PasswordError::InvalidIterations(iterations));
        }
        Ok(Self { iterations })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Hash a plaintext password.
    ///
    /// A fresh random salt is drawn from the OS CSPRNG on every call, so
    /// hashing the same password twice yields two different encodings.
    pub fn hash(&self, password: &str) -> String {
        let mut salt = [0u8; SALT_LENGTH];
        OsRng.fill_bytes(&mut salt);

        let key = derive_key(password, &salt, self.iterations);

        format!(
            "{}${}${}${}",
            ALGORITHM_ID,
            BASE64.encode(salt),
            self.iterations,
            BASE64.encode(key)
        )
    }

    /// Verify a password against a stored encoding.
    ///
    /// Returns false for any malformed encoding instead of failing. The
    /// iteration count is read from the encoding, not from this hasher.
    pub fn verify(&self, password: &str, encoded: &str) -> bool {
        let Some(parsed) = ParsedHash::parse(encoded) else {
            tracing::debug!("Stored password hash is malformed");
            return false;
        };

        let computed = derive_key(password, &parsed.salt, parsed.iterations);
        computed.as_slice().ct_eq(parsed.key.as_slice()).into()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

struct ParsedHash {
    salt: Vec<u8>,
    iterations: u32,
    key: Vec<u8>,
}

impl ParsedHash {
    fn parse(encoded: &str) -> Option<Self> {
        let fields: Vec<&str> = encoded.split('$').collect();
        let [algorithm, salt, iterations, key] = fields.as_slice() else {
            return None;
        };

        if *algorithm != ALGORITHM_ID {
            return None;
        }

        let salt = BASE64.decode(salt).ok()?;
        let iterations: u32 = iterations.parse().ok()?;
        let key = BASE64.decode(key).ok()?;

        if iterations == 0 || key.len() != KEY_LENGTH {
            return None;
        }

        Some(Self {
            salt,
            iterations,
            key,
        })
    }
}

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LENGTH] {
    let mut key = [0u8; KEY_LENGTH];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}
