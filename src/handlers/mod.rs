//! HTTP handlers, one submodule per domain.
//!
//! Each submodule owns its request/response DTOs and its slice of the
//! route table.

pub mod admin;
pub mod auth;
pub mod contests;
pub mod forum;
pub mod health;
pub mod problems;
pub mod submissions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes. Each domain module decides which of its
/// routes sit behind the auth middleware, so the router needs the
/// state up front.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::routes(state.clone()))
        .nest("/users", users::routes(state.clone()))
        .nest("/problems", problems::routes(state.clone()))
        .nest("/submissions", submissions::routes(state.clone()))
        .nest("/contests", contests::routes(state.clone()))
        .nest("/forum", forum::routes(state.clone()))
        .nest("/admin", admin::routes(state))
}
