use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::middleware::ownership::require_self;
use crate::state::AppState;

use super::controller::{delete_user, get_profile, update_user};

pub fn init_users_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route(
            "/{user_id}",
            put(update_user)
                .delete(delete_user)
                .layer(middleware::from_fn_with_state(state, require_self)),
        )
}
