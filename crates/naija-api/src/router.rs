use axum::{
    Router, middleware,
    routing::{delete, get, patch, post, put},
};

use crate::error::ApiError;
use crate::middleware::require_auth;
use crate::state::AppState;
use crate::{auth, emojis};

/// Reads are public; anything that mutates goes through the auth gate.
pub fn build_router(state: AppState) -> Router {
    let gate = middleware::from_fn_with_state(state.clone(), require_auth);

    Router::new()
        .route("/", get(auth::index))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", get(auth::logout).route_layer(gate.clone()))
        .route(
            "/emojis",
            get(emojis::list_emojis).merge(post(emojis::create_emoji).route_layer(gate.clone())),
        )
        .route(
            "/emojis/{id}",
            get(emojis::get_emoji).merge(
                put(emojis::update_emoji)
                    .merge(patch(emojis::patch_emoji))
                    .merge(delete(emojis::delete_emoji))
                    .route_layer(gate),
            ),
        )
        .fallback(route_not_found)
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
