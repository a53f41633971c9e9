//! Ownership checks.
//!
//! A single guard, [`ensure_owner`], backs every ownership decision:
//!
//! 1. As the [`require_self`] route layer, where the owner id comes from
//!    the `{user_id}` path parameter (user profile update/delete).
//! 2. Called directly by services after loading a record, where the owner
//!    id comes from the row itself (photo delete).

use axum::{
    extract::{FromRequestParts, Path, Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rejects with 403 unless the authenticated user owns the resource.
pub fn ensure_owner(auth_user_id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
    if auth_user_id != owner_id {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "You are not authorized to access this resource"
        )));
    }

    Ok(())
}

/// Route-layer middleware for routes whose path id directly names a user.
///
/// Attach with `axum::middleware::from_fn_with_state`. Rejects with 401 on
/// a bad token, 400 on a malformed path id, and 403 when the path user is
/// not the caller.
pub async fn require_self(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    let Path(user_id) = Path::<Uuid>::from_request_parts(&mut parts, &state)
        .await
        .map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid user ID")))?;

    ensure_owner(auth_user.user_id()?, user_id)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}
