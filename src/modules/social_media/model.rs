use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct SocialMedia {
    pub id: Uuid,
    pub name: String,
    pub social_media_url: String,
    pub user_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSocialMediaDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(url(message = "Social media URL must be a valid URL"))]
    pub social_media_url: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateSocialMediaDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(url(message = "Social media URL must be a valid URL"))]
    pub social_media_url: String,
}
