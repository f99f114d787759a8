//! Moderation and authoring endpoints
//!
//! Content authoring (problems, test cases, contests, categories) and
//! platform management. The whole surface sits behind the auth
//! middleware, and every handler takes `AdminUser`, so a non-admin
//! token gets 403 before any body parsing happens.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// The admin surface, fully token-gated
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Accounts
        .route("/users", get(handler::list_all_users))
        .route("/users/{id}/role", put(handler::update_user_role))
        // Platform
        .route("/stats", get(handler::get_platform_stats))
        .route("/ranks/recompute", post(handler::recompute_ranks))
        // Problem authoring
        .route("/problems", post(handler::create_problem))
        .route("/problems/{id}", put(handler::update_problem))
        .route("/problems/{id}", delete(handler::delete_problem))
        .route("/problems/{id}/test-cases", post(handler::add_test_case))
        .route(
            "/problems/{id}/test-cases/{case_id}",
            delete(handler::delete_test_case),
        )
        // Contest authoring
        .route("/contests", post(handler::create_contest))
        .route("/contests/{id}", put(handler::update_contest))
        .route("/contests/{id}", delete(handler::delete_contest))
        // Forum categories
        .route("/forum/categories", post(handler::create_category))
        .route("/forum/categories/{id}", delete(handler::delete_category))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
