use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{Comment, CreateCommentDto, UpdateCommentDto};

pub struct CommentService;

impl CommentService {
    #[instrument(skip(db, dto))]
    pub async fn create_comment(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateCommentDto,
    ) -> Result<Comment, AppError> {
        let comment = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (user_id, photo_id, message)
             VALUES ($1, $2, $3)
             RETURNING id, user_id, photo_id, message, created_at, updated_at",
        )
        .bind(user_id)
        .bind(dto.photo_id)
        .bind(&dto.message)
        .fetch_one(db)
        .await
        .context("Failed to insert comment")
        .map_err(AppError::database)?;

        Ok(comment)
    }

    #[instrument(skip(db))]
    pub async fn get_comment(db: &PgPool, id: Uuid) -> Result<Comment, AppError> {
        let comment = sqlx::query_as::<_, Comment>(
            "SELECT id, user_id, photo_id, message, created_at, updated_at
             FROM comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch comment")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Comment not found")))?;

        Ok(comment)
    }

    // TODO: update/delete accept any authenticated user, not just the
    // comment's author. Confirm with stakeholders before locking this down.
    #[instrument(skip(db, dto))]
    pub async fn update_comment(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCommentDto,
    ) -> Result<Comment, AppError> {
        Self::get_comment(db, id).await?;

        let comment = sqlx::query_as::<_, Comment>(
            "UPDATE comments
             SET message = $1, updated_at = now()
             WHERE id = $2
             RETURNING id, user_id, photo_id, message, created_at, updated_at",
        )
        .bind(&dto.message)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update comment")
        .map_err(AppError::database)?;

        Ok(comment)
    }

    #[instrument(skip(db))]
    pub async fn delete_comment(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete comment")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Comment not found")));
        }

        Ok(())
    }
}
