use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateSocialMediaDto, SocialMedia, UpdateSocialMediaDto};

pub struct SocialMediaService;

impl SocialMediaService {
    #[instrument(skip(db, dto))]
    pub async fn create_social_media(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateSocialMediaDto,
    ) -> Result<SocialMedia, AppError> {
        let social_media = sqlx::query_as::<_, SocialMedia>(
            "INSERT INTO social_media (name, social_media_url, user_id)
             VALUES ($1, $2, $3)
             RETURNING id, name, social_media_url, user_id, created_at, updated_at",
        )
        .bind(&dto.name)
        .bind(&dto.social_media_url)
        .bind(user_id)
        .fetch_one(db)
        .await
        .context("Failed to insert social media record")
        .map_err(AppError::database)?;

        Ok(social_media)
    }

    #[instrument(skip(db))]
    pub async fn get_social_media(db: &PgPool, id: Uuid) -> Result<SocialMedia, AppError> {
        let social_media = sqlx::query_as::<_, SocialMedia>(
            "SELECT id, name, social_media_url, user_id, created_at, updated_at
             FROM social_media WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch social media record")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Social media record not found")))?;

        Ok(social_media)
    }

    // TODO: update/delete accept any authenticated user, not just the
    // record's owner. Confirm with stakeholders before locking this down.
    #[instrument(skip(db, dto))]
    pub async fn update_social_media(
        db: &PgPool,
        id: Uuid,
        dto: UpdateSocialMediaDto,
    ) -> Result<SocialMedia, AppError> {
        Self::get_social_media(db, id).await?;

        let social_media = sqlx::query_as::<_, SocialMedia>(
            "UPDATE social_media
             SET name = $1, social_media_url = $2, updated_at = now()
             WHERE id = $3
             RETURNING id, name, social_media_url, user_id, created_at, updated_at",
        )
        .bind(&dto.name)
        .bind(&dto.social_media_url)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update social media record")
        .map_err(AppError::database)?;

        Ok(social_media)
    }

    #[instrument(skip(db))]
    pub async fn delete_social_media(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM social_media WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete social media record")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Social media record not found"
            )));
        }

        Ok(())
    }
}
