//! Request middleware: auth extraction, rate limiting, and access logging.

pub mod auth;
pub mod logging;
pub mod rate_limit;

pub use auth::{auth_middleware, AdminUser, AuthenticatedUser, OptionalAuth};
pub use logging::logging_middleware;
pub use rate_limit::rate_limit_middleware;
