use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::ownership::ensure_owner;
use crate::utils::errors::AppError;

use super::model::{CreatePhotoDto, Photo, PhotoOwner, PhotoWithOwner, UpdatePhotoDto};

pub struct PhotoService;

impl PhotoService {
    #[instrument(skip(db, dto))]
    pub async fn create_photo(
        db: &PgPool,
        user_id: Uuid,
        dto: CreatePhotoDto,
    ) -> Result<Photo, AppError> {
        let photo = sqlx::query_as::<_, Photo>(
            "INSERT INTO photos (title, caption, photo_url, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, caption, photo_url, user_id, created_at, updated_at",
        )
        .bind(&dto.title)
        .bind(&dto.caption)
        .bind(&dto.photo_url)
        .bind(user_id)
        .fetch_one(db)
        .await
        .context("Failed to insert photo")
        .map_err(AppError::database)?;

        Ok(photo)
    }

    /// Lists the caller's photos, each with the owner's username and email
    /// embedded.
    #[instrument(skip(db))]
    pub async fn get_photos(db: &PgPool, user_id: Uuid) -> Result<Vec<PhotoWithOwner>, AppError> {
        #[derive(sqlx::FromRow)]
        struct PhotoOwnerRow {
            id: Uuid,
            title: String,
            caption: String,
            photo_url: String,
            user_id: Uuid,
            created_at: chrono::DateTime<chrono::Utc>,
            updated_at: chrono::DateTime<chrono::Utc>,
            username: String,
            email: String,
        }

        let rows = sqlx::query_as::<_, PhotoOwnerRow>(
            "SELECT p.id, p.title, p.caption, p.photo_url, p.user_id,
                    p.created_at, p.updated_at, u.username, u.email
             FROM photos p
             JOIN users u ON u.id = p.user_id
             WHERE p.user_id = $1
             ORDER BY p.created_at",
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch photos")
        .map_err(AppError::database)?;

        let photos = rows
            .into_iter()
            .map(|row| PhotoWithOwner {
                id: row.id,
                title: row.title,
                caption: row.caption,
                photo_url: row.photo_url,
                user_id: row.user_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
                user: PhotoOwner {
                    username: row.username,
                    email: row.email,
                },
            })
            .collect();

        Ok(photos)
    }

    #[instrument(skip(db))]
    pub async fn get_photo(db: &PgPool, id: Uuid) -> Result<Photo, AppError> {
        let photo = sqlx::query_as::<_, Photo>(
            "SELECT id, title, caption, photo_url, user_id, created_at, updated_at
             FROM photos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch photo")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Photo not found")))?;

        Ok(photo)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_photo(
        db: &PgPool,
        id: Uuid,
        dto: UpdatePhotoDto,
    ) -> Result<Photo, AppError> {
        // Existence check first so a missing photo is a 404, not a silent no-op.
        Self::get_photo(db, id).await?;

        let photo = sqlx::query_as::<_, Photo>(
            "UPDATE photos
             SET title = $1, caption = $2, photo_url = $3, updated_at = now()
             WHERE id = $4
             RETURNING id, title, caption, photo_url, user_id, created_at, updated_at",
        )
        .bind(&dto.title)
        .bind(&dto.caption)
        .bind(&dto.photo_url)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update photo")
        .map_err(AppError::database)?;

        Ok(photo)
    }

    /// Deletes a photo after verifying the caller owns it. The owner id
    /// comes from the loaded row, not the path.
    #[instrument(skip(db))]
    pub async fn delete_photo(db: &PgPool, id: Uuid, auth_user_id: Uuid) -> Result<(), AppError> {
        let photo = Self::get_photo(db, id).await?;

        ensure_owner(auth_user_id, photo.user_id)?;

        sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete photo")
            .map_err(AppError::database)?;

        Ok(())
    }
}
