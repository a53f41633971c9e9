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

use super::model::{Comment, CreateCommentDto, UpdateCommentDto};
use super::service::CommentService;

/// Comment on a photo
#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = Comment),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Comments"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<ApiResponse<Comment>>), AppError> {
    let comment = CommentService::create_comment(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(comment))))
}

/// Get a comment by id
#[utoipa::path(
    get,
    path = "/api/comments/{id}",
    params(("id" = Uuid, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment", body = Comment),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Comments"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_comment(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Comment>>, AppError> {
    let comment = CommentService::get_comment(&state.db, id).await?;
    Ok(Json(ApiResponse::success(comment)))
}

/// Replace a comment's message
#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    request_body = UpdateCommentDto,
    params(("id" = Uuid, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Updated comment", body = Comment),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Comments"
)]
#[instrument(skip(state, _auth_user, dto))]
pub async fn update_comment(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCommentDto>,
) -> Result<Json<ApiResponse<Comment>>, AppError> {
    let comment = CommentService::update_comment(&state.db, id, dto).await?;
    Ok(Json(ApiResponse::success(comment)))
}

/// Delete a comment
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    params(("id" = Uuid, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Comments"
)]
#[instrument(skip(state, _auth_user))]
pub async fn delete_comment(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    CommentService::delete_comment(&state.db, id).await?;
    Ok(Json(ApiResponse::success(MessageResponse::new(
        "Comment deleted successfully",
    ))))
}
