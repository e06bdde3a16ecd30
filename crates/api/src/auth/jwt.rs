//! JWT access-token validation.
//!
//! Tokens are issued by the identity service and signed with a shared HS256
//! secret. This service only reads the subject and the role list.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{required_env, ConfigError};

/// JWT claims carried by every access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Subject -- the caller's identity at the issuer.
    pub sub: String,
    /// Role names, compared verbatim (e.g. `"ADMIN"`, `"EMPLOYEE"`).
    #[serde(default)]
    pub roles: Vec<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the issuer.
    pub secret: String,
}

impl JwtConfig {
    /// Load from `JWT_SECRET`, which is required and must not be empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: required_env("JWT_SECRET")?,
        })
    }
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Checks the signature and expiry (HS256, default leeway).
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

/// Sign a token for `subject` with the given roles, valid for `ttl_secs`.
pub fn generate_token(
    subject: &str,
    roles: &[&str],
    ttl_secs: i64,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: subject.to_string(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        exp: now + ttl_secs,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}
