use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: i64,
}

impl JwtConfig {
    /// Reads the signing secret and token lifetime from the environment.
    ///
    /// There is deliberately no fallback secret: with `JWT_SECRET` unset,
    /// token issuance and verification fail instead of silently signing
    /// with a known value.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_default(),
            token_expiry: env::var("JWT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(259_200), // 72 hours
        }
    }
}
