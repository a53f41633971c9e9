//! User entity and DTOs.
//!
//! The [`User`] struct deliberately has no password field: the hash lives
//! only in the `users.password` column and private query row types, so it
//! can never be serialized into a response.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub age: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Partial profile update. A field left out of the JSON body (or set to
/// `null`) keeps its stored value; there is no way to clear a field.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: Option<String>,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(range(min = 8, message = "Age must be at least 8"))]
    pub age: Option<i32>,
}
