//! Per-client request throttling.
//!
//! Fixed-window counters in Redis, keyed by client IP and path bucket.
//! If Redis is unreachable the limiter fails open rather than taking
//! the API down with it.

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use redis::AsyncCommands;
use std::net::SocketAddr;

use crate::{constants, error::AppError, state::AppState};

/// Counts the request against its bucket and rejects once over the limit.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let ip = addr.ip().to_string();
    let path = request.uri().path().to_string();

    let bucket = path_bucket(&path);
    let (limit, window) = bucket_limits(bucket);

    let key = format!("rate_limit:{}:{}", ip, bucket);
    let mut redis = state.redis();

    let count: i64 = redis.incr(&key, 1).await.unwrap_or(0);

    if count == 1 {
        let _: () = redis.expire(&key, window).await.unwrap_or(());
    }

    if count > limit {
        return Err(AppError::TooManyRequests);
    }

    Ok(next.run(request).await)
}

/// Group endpoints that share a budget
fn path_bucket(path: &str) -> &'static str {
    if path.starts_with("/api/v1/auth") {
        "auth"
    } else if path.starts_with("/api/v1/submissions") {
        "submissions"
    } else if path.starts_with("/api/v1/forum") {
        "forum"
    } else {
        "general"
    }
}

fn bucket_limits(bucket: &str) -> (i64, i64) {
    match bucket {
        "auth" => (
            constants::rate_limits::AUTH_MAX_REQUESTS,
            constants::rate_limits::AUTH_WINDOW_SECS,
        ),
        "submissions" => (
            constants::rate_limits::SUBMISSION_MAX_REQUESTS,
            constants::rate_limits::SUBMISSION_WINDOW_SECS,
        ),
        "forum" => (
            constants::rate_limits::FORUM_MAX_REQUESTS,
            constants::rate_limits::FORUM_WINDOW_SECS,
        ),
        _ => (
            constants::rate_limits::GENERAL_MAX_REQUESTS,
            constants::rate_limits::GENERAL_WINDOW_SECS,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_partition_the_api_surface() {
        assert_eq!(path_bucket("/api/v1/auth/login"), "auth");
        assert_eq!(path_bucket("/api/v1/submissions"), "submissions");
        assert_eq!(path_bucket("/api/v1/forum/threads"), "forum");
        assert_eq!(path_bucket("/api/v1/problems"), "general");
        assert_eq!(path_bucket("/health"), "general");
    }

    #[test]
    fn write_heavy_buckets_are_tighter_than_general() {
        let (auth_limit, _) = bucket_limits("auth");
        let (forum_limit, _) = bucket_limits("forum");
        let (general_limit, _) = bucket_limits("general");

        assert!(auth_limit < forum_limit);
        assert!(forum_limit < general_limit);
    }
}
