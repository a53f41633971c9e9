use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_photo, delete_photo, get_photo, get_photos, update_photo};

pub fn init_photos_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_photos).post(create_photo))
        .route(
            "/{id}",
            get(get_photo).put(update_photo).delete(delete_photo),
        )
}
