//! CampusCode - Student Coding Practice Platform
//!
//! Students solve problems from a curated bank, enter timed contests,
//! and discuss solutions on a voting forum, earning XP toward levels
//! and ranks as they go. Submissions are graded by an external judge
//! service; everything else lives in this crate.
//!
//! Request flow is handlers -> services -> repositories. Handlers stay
//! thin and deal in DTOs, services own the business rules, and each
//! repository wraps the SQL for one aggregate. Shared wiring (pool,
//! cache, judge client, config) travels through [`AppState`].

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod judge;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
