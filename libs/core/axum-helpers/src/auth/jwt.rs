use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default token time-to-live
pub const ACCESS_TOKEN_TTL: i64 = 900; // 15 minutes

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,    // Subject (user ID)
    pub name: String,   // User name
    pub is_admin: bool, // Admin role flag
    pub exp: i64,       // Expiration time
    pub iat: i64,       // Issued at
}

/// Stateless HS256 JWT verifier.
///
/// Token issuance lives in an external identity service that shares the
/// signing secret; [`JwtAuth::encode_token`] exists for tests and tooling.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
}

impl JwtAuth {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(config.secret.clone())
    }

    /// Verify a token's signature and expiry, returning its claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Encode a token with the default TTL
    pub fn encode_token(&self, user_id: Uuid, name: &str, is_admin: bool) -> eyre::Result<String> {
        self.encode_token_with_ttl(user_id, name, is_admin, ACCESS_TOKEN_TTL)
    }

    /// Encode a token with a specific TTL in seconds
    pub fn encode_token_with_ttl(
        &self,
        user_id: Uuid,
        name: &str,
        is_admin: bool,
        ttl_seconds: i64,
    ) -> eyre::Result<String> {
        let now = Utc::now();

        let claims = JwtClaims {
            sub: user_id.to_string(),
            name: name.to_string(),
            is_admin,
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }
}
