use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Photo {
    pub id: Uuid,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    pub user_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Owner details embedded in photo listings.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PhotoOwner {
    pub username: String,
    pub email: String,
}

/// A photo together with its owner, as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PhotoWithOwner {
    pub id: Uuid,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    pub user_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub user: PhotoOwner,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePhotoDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[validate(url(message = "Photo URL must be a valid URL"))]
    pub photo_url: String,
}

/// Full replacement of a photo's content fields; `user_id` never changes.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePhotoDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[validate(url(message = "Photo URL must be a valid URL"))]
    pub photo_url: String,
}
