use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use jsonwebtoken::errors::ErrorKind;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::utils::errors::AppError;

/// Issues a signed bearer token for the given user.
///
/// The token carries the user id as `sub` and expires `token_expiry`
/// seconds from now (72 hours by default). Fails when no signing secret
/// is configured.
pub fn create_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    if jwt_config.secret.is_empty() {
        return Err(AppError::internal(anyhow::anyhow!(
            "JWT secret key is not set"
        )));
    }

    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.token_expiry as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies a bearer token, returning its claims.
///
/// Rejects with 401 and a message distinguishing expired, badly signed,
/// and malformed tokens.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    if jwt_config.secret.is_empty() {
        return Err(AppError::internal(anyhow::anyhow!(
            "JWT secret key is not set"
        )));
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => {
            AppError::unauthorized(anyhow::anyhow!("Token has expired"))
        }
        ErrorKind::InvalidSignature => {
            AppError::unauthorized(anyhow::anyhow!("Invalid token signature"))
        }
        _ => AppError::unauthorized(anyhow::anyhow!("Malformed token")),
    })
}
