use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::{ApiResponse, MessageResponse};
use crate::validator::ValidatedJson;

use super::model::{CreateSocialMediaDto, SocialMedia, UpdateSocialMediaDto};
use super::service::SocialMediaService;

/// Attach a social media link to the caller's profile
#[utoipa::path(
    post,
    path = "/api/socialmedias",
    request_body = CreateSocialMediaDto,
    responses(
        (status = 201, description = "Social media record created", body = SocialMedia),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "SocialMedia"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_social_media(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateSocialMediaDto>,
) -> Result<(StatusCode, Json<ApiResponse<SocialMedia>>), AppError> {
    let social_media =
        SocialMediaService::create_social_media(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(social_media))))
}

/// Get a social media record by id
#[utoipa::path(
    get,
    path = "/api/socialmedias/{id}",
    params(("id" = Uuid, Path, description = "Social media record id")),
    responses(
        (status = 200, description = "Social media record", body = SocialMedia),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "SocialMedia"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_social_media(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SocialMedia>>, AppError> {
    let social_media = SocialMediaService::get_social_media(&state.db, id).await?;
    Ok(Json(ApiResponse::success(social_media)))
}

/// Replace a social media record's name and URL
#[utoipa::path(
    put,
    path = "/api/socialmedias/{id}",
    request_body = UpdateSocialMediaDto,
    params(("id" = Uuid, Path, description = "Social media record id")),
    responses(
        (status = 200, description = "Updated social media record", body = SocialMedia),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "SocialMedia"
)]
#[instrument(skip(state, _auth_user, dto))]
pub async fn update_social_media(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateSocialMediaDto>,
) -> Result<Json<ApiResponse<SocialMedia>>, AppError> {
    let social_media = SocialMediaService::update_social_media(&state.db, id, dto).await?;
    Ok(Json(ApiResponse::success(social_media)))
}

/// Delete a social media record
#[utoipa::path(
    delete,
    path = "/api/socialmedias/{id}",
    params(("id" = Uuid, Path, description = "Social media record id")),
    responses(
        (status = 200, description = "Record deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "SocialMedia"
)]
#[instrument(skip(state, _auth_user))]
pub async fn delete_social_media(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    SocialMediaService::delete_social_media(&state.db, id).await?;
    Ok(Json(ApiResponse::success(MessageResponse::new(
        "Social media record deleted successfully",
    ))))
}
