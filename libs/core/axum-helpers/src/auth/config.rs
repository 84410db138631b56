use core_config::{env_required, ConfigError, FromEnv};

/// JWT verification configuration
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// HS256 signing secret, shared with the token issuer
    pub secret: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl FromEnv for JwtConfig {
    /// Requires JWT_SECRET to be set (no default)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env_required("JWT_SECRET")?,
        })
    }
}
