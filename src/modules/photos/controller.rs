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

use super::model::{CreatePhotoDto, Photo, PhotoWithOwner, UpdatePhotoDto};
use super::service::PhotoService;

/// Upload a new photo
#[utoipa::path(
    post,
    path = "/api/photos",
    request_body = CreatePhotoDto,
    responses(
        (status = 201, description = "Photo created", body = Photo),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Photos"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_photo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePhotoDto>,
) -> Result<(StatusCode, Json<ApiResponse<Photo>>), AppError> {
    let photo = PhotoService::create_photo(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(photo))))
}

/// List the caller's photos with owner details embedded
#[utoipa::path(
    get,
    path = "/api/photos",
    responses(
        (status = 200, description = "List of photos", body = Vec<PhotoWithOwner>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Photos"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_photos(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ApiResponse<Vec<PhotoWithOwner>>>, AppError> {
    let photos = PhotoService::get_photos(&state.db, auth_user.user_id()?).await?;
    Ok(Json(ApiResponse::success(photos)))
}

/// Get a photo by id
#[utoipa::path(
    get,
    path = "/api/photos/{id}",
    params(("id" = Uuid, Path, description = "Photo id")),
    responses(
        (status = 200, description = "Photo", body = Photo),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Photo not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Photos"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_photo(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Photo>>, AppError> {
    let photo = PhotoService::get_photo(&state.db, id).await?;
    Ok(Json(ApiResponse::success(photo)))
}

/// Replace a photo's title, caption, and URL
#[utoipa::path(
    put,
    path = "/api/photos/{id}",
    request_body = UpdatePhotoDto,
    params(("id" = Uuid, Path, description = "Photo id")),
    responses(
        (status = 200, description = "Updated photo", body = Photo),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Photo not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Photos"
)]
#[instrument(skip(state, _auth_user, dto))]
pub async fn update_photo(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdatePhotoDto>,
) -> Result<Json<ApiResponse<Photo>>, AppError> {
    let photo = PhotoService::update_photo(&state.db, id, dto).await?;
    Ok(Json(ApiResponse::success(photo)))
}

/// Delete a photo (owner only)
#[utoipa::path(
    delete,
    path = "/api/photos/{id}",
    params(("id" = Uuid, Path, description = "Photo id")),
    responses(
        (status = 200, description = "Photo deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the photo owner", body = ErrorResponse),
        (status = 404, description = "Photo not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Photos"
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_photo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    PhotoService::delete_photo(&state.db, id, auth_user.user_id()?).await?;
    Ok(Json(ApiResponse::success(MessageResponse::new(
        "Your photo has been successfully deleted",
    ))))
}
