//! Forum handlers
//!
//! Threads, replies, and reply voting. Reads are public; every write
//! goes through the auth middleware. Category administration lives
//! under the admin surface.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Forum routes
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/categories", get(handler::list_categories))
        .route("/threads", get(handler::list_threads))
        .route("/threads/{id}", get(handler::get_thread));

    let protected = Router::new()
        .route("/threads", post(handler::create_thread))
        .route("/threads/{id}", delete(handler::delete_thread))
        .route("/threads/{id}/replies", post(handler::post_reply))
        .route("/threads/{id}/close", post(handler::close_thread))
        .route("/threads/{id}/reopen", post(handler::reopen_thread))
        .route("/replies/{id}", delete(handler::delete_reply))
        .route("/replies/{id}/vote", post(handler::cast_vote))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
