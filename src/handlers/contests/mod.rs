//! Contest handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Contest routes. Browsing is public, participation is token-gated.
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(handler::list_contests))
        .route("/{id}", get(handler::get_contest));

    let protected = Router::new()
        .route("/{id}/register", post(handler::register_for_contest))
        .route("/{id}/unregister", post(handler::unregister_from_contest))
        .route("/{id}/registration", get(handler::registration_status))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
