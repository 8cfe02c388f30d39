//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token issuance and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in days.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_days: u64,
    /// Name of the httpOnly cookie carrying the token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the cookie is marked `Secure` (enable behind HTTPS).
    #[serde(default)]
    pub cookie_secure: bool,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_days: default_token_ttl(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            password_min_length: default_password_min(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    7
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_password_min() -> usize {
    6
}
