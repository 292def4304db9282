use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::JwtError;

/// Signs and verifies compact JWS tokens with HMAC-SHA256.
///
/// Generic over the payload type. The signature and the `alg` header are
/// always checked on decode; time-based claims are left to the caller so
/// expiry can be evaluated against an explicit clock.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
}

impl JwtHandler {
    /// Create a handler keyed with `secret`.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            validation,
        }
    }

    /// Serialize and sign a payload.
    ///
    /// # Errors
    /// * `EncodingFailed` - Payload could not be serialized or signed
    pub fn encode<T: Serialize>(&self, payload: &T) -> Result<String, JwtError> {
        jsonwebtoken::encode(&self.header, payload, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify the signature of `token` and deserialize its payload.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed token, bad signature, other algorithm or
    ///   a payload that does not match `T`
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        jsonwebtoken::decode::<T>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| JwtError::InvalidToken(e.to_string()))
    }
}
