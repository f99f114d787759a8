//! User profile endpoints

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// User routes. Profiles are public; editing one requires a token.
pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(handler::list_users))
        .route("/{id}", get(handler::get_user));

    let protected = Router::new()
        .route("/{id}", put(handler::update_user))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
