//! Problem browsing handlers
//!
//! Authoring lives under the admin surface; this module only reads.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{middleware, routing::get, Router};

use crate::{middleware::auth::optional_auth_middleware, state::AppState};

/// Problem routes. Test case listing recognizes admin tokens so the
/// hidden cases stay hidden from everyone else.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_problems))
        .route("/{id}", get(handler::get_problem))
        .route(
            "/{id}/test-cases",
            get(handler::list_test_cases).route_layer(middleware::from_fn_with_state(
                state,
                optional_auth_middleware,
            )),
        )
}
