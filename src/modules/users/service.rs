use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{UpdateUserDto, User};

/// Maps unique-constraint violations on the users table to the same 400s
/// the pre-insert checks produce, so a race between two writers surfaces
/// as a duplicate conflict rather than a 500.
pub fn map_user_db_error(err: sqlx::Error) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        match db_err.constraint() {
            Some("users_username_key") => {
                return AppError::bad_request(anyhow::anyhow!("Username already exists"));
            }
            Some("users_email_key") => {
                return AppError::bad_request(anyhow::anyhow!("Email already exists"));
            }
            _ => {}
        }
    }

    AppError::database(anyhow::Error::new(err).context("Failed to write user"))
}

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, age, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }

    /// Merges the provided fields onto the stored record and persists the
    /// result. `None` fields keep their current value.
    #[instrument(skip(db, dto))]
    pub async fn update_user(
        db: &PgPool,
        id: Uuid,
        dto: UpdateUserDto,
    ) -> Result<User, AppError> {
        let existing = Self::get_user(db, id).await?;

        let username = dto.username.unwrap_or(existing.username);
        let email = dto.email.unwrap_or(existing.email);
        let age = dto.age.unwrap_or(existing.age);

        let user = sqlx::query_as::<_, User>(
            "UPDATE users
             SET username = $1, email = $2, age = $3, updated_at = now()
             WHERE id = $4
             RETURNING id, username, email, age, created_at, updated_at",
        )
        .bind(&username)
        .bind(&email)
        .bind(age)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(map_user_db_error)?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete user")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }
}
