use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_social_media, delete_social_media, get_social_media, update_social_media,
};

pub fn init_social_media_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_social_media))
        .route(
            "/{id}",
            get(get_social_media)
                .put(update_social_media)
                .delete(delete_social_media),
        )
}
