use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::User;
use crate::modules::users::service::map_user_db_error;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginDto, RegisterDto, TokenResponse};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto))]
    pub async fn register_user(db: &PgPool, dto: RegisterDto) -> Result<User, AppError> {
        let username_taken =
            sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE username = $1")
                .bind(&dto.username)
                .fetch_optional(db)
                .await
                .context("Failed to check username")
                .map_err(AppError::database)?;

        if username_taken.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Username already exists"
            )));
        }

        let email_taken = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await
            .context("Failed to check email")
            .map_err(AppError::database)?;

        if email_taken.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Email already exists"
            )));
        }

        let hashed_password = hash_password(&dto.password)?;

        // The unique constraints still arbitrate when two registrations
        // race past the checks above; map_user_db_error turns that into
        // the same 400 as the pre-check.
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password, age)
             VALUES ($1, $2, $3, $4)
             RETURNING id, username, email, age, created_at, updated_at",
        )
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(dto.age)
        .fetch_one(db)
        .await
        .map_err(map_user_db_error)?;

        Ok(user)
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginDto,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct Credentials {
            id: Uuid,
            password: String,
        }

        let credentials =
            sqlx::query_as::<_, Credentials>("SELECT id, password FROM users WHERE email = $1")
                .bind(&dto.email)
                .fetch_optional(db)
                .await
                .context("Failed to fetch user for login")
                .map_err(AppError::database)?
                .ok_or_else(|| {
                    AppError::unauthorized(anyhow::anyhow!("Invalid email or password"))
                })?;

        let is_valid = verify_password(&dto.password, &credentials.password)?;

        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid email or password"
            )));
        }

        let token = create_token(credentials.id, jwt_config)?;

        Ok(TokenResponse { token })
    }
}
