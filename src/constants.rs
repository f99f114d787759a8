//! Fixed values shared across the crate.
//!
//! Anything an operator may want to change lives in [`crate::config`]
//! instead; what is here is part of the platform's behavior.

// =============================================================================
// SERVER
// =============================================================================

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE
// =============================================================================

/// Pool size when DATABASE_MAX_CONNECTIONS is not set
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// SESSIONS
// =============================================================================

/// Access token lifetime when JWT_EXPIRY_HOURS is not set
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Refresh token lifetime when REFRESH_TOKEN_EXPIRY_DAYS is not set
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Length of the opaque refresh token
pub const REFRESH_TOKEN_LENGTH: usize = 48;

// =============================================================================
// JUDGE
// =============================================================================

/// Default Piston execution endpoint
pub const DEFAULT_JUDGE_URL: &str = "http://localhost:2000";

/// How long one judge call may take before it is abandoned
pub const DEFAULT_JUDGE_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// PROGRESSION
// =============================================================================

/// XP at which the displayed progress bar reaches 100%
pub const XP_DISPLAY_CAP: i32 = 2000;

/// XP awarded to every newly registered account
pub const SIGNUP_XP: i32 = 100;

/// Streak a new account starts with
pub const SIGNUP_STREAK: i32 = 1;

/// Placeholder global rank until the first batch recomputation
pub const PLACEHOLDER_GLOBAL_RANK: i32 = 9999;

/// Placeholder college rank until the first batch recomputation
pub const PLACEHOLDER_COLLEGE_RANK: i32 = 500;

/// XP span of a single level
pub const XP_PER_LEVEL: i32 = 1000;

/// College assigned to accounts that do not supply one
pub const DEFAULT_COLLEGE: &str = "CampusCode Institute";

// =============================================================================
// ROLES
// =============================================================================

/// Role strings as stored in the users table
pub mod roles {
    pub const STUDENT: &str = "student";
    pub const ADMIN: &str = "admin";

    pub const ALL: &[&str] = &[STUDENT, ADMIN];
}

// =============================================================================
// PROBLEMS
// =============================================================================

/// Difficulty strings as stored in the problems table
pub mod difficulties {
    pub const EASY: &str = "easy";
    pub const MEDIUM: &str = "medium";
    pub const HARD: &str = "hard";

    pub const ALL: &[&str] = &[EASY, MEDIUM, HARD];
}

/// Languages the external judge accepts
pub mod languages {
    pub const C: &str = "c";
    pub const CPP: &str = "cpp";
    pub const JAVA: &str = "java";
    pub const PYTHON: &str = "python";
    pub const JAVASCRIPT: &str = "javascript";
    pub const RUST: &str = "rust";

    pub const ALL: &[&str] = &[C, CPP, JAVA, PYTHON, JAVASCRIPT, RUST];
}

// =============================================================================
// FORUM
// =============================================================================

/// Thread states a moderator can set
pub mod thread_statuses {
    pub const OPEN: &str = "open";
    pub const CLOSED: &str = "closed";

    pub const ALL: &[&str] = &[OPEN, CLOSED];
}

pub const MAX_THREAD_TITLE_LENGTH: u64 = 200;
pub const MAX_FORUM_BODY_LENGTH: u64 = 65535;
pub const MAX_CATEGORY_NAME_LENGTH: u64 = 64;

// =============================================================================
// RATE LIMITS
// =============================================================================

/// Fixed-window limits per client IP, grouped by path bucket.
/// Auth is tightest since it fronts password guessing; submissions are
/// capped to keep the judge healthy.
pub mod rate_limits {
    pub const AUTH_MAX_REQUESTS: i64 = 5;
    pub const AUTH_WINDOW_SECS: i64 = 60;

    pub const SUBMISSION_MAX_REQUESTS: i64 = 10;
    pub const SUBMISSION_WINDOW_SECS: i64 = 60;

    pub const FORUM_MAX_REQUESTS: i64 = 30;
    pub const FORUM_WINDOW_SECS: i64 = 60;

    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGING
// =============================================================================

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Hard ceiling on per_page, whatever the client asks for
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// INPUT LIMITS
// =============================================================================

pub const MIN_PASSWORD_LENGTH: u64 = 8;
pub const MAX_PASSWORD_LENGTH: u64 = 128;
pub const MIN_USERNAME_LENGTH: u64 = 3;
pub const MAX_USERNAME_LENGTH: u64 = 32;
pub const MAX_PROBLEM_TITLE_LENGTH: u64 = 200;

/// Largest source file a submission may carry (64 KB)
pub const MAX_SOURCE_CODE_SIZE: usize = 64 * 1024;

/// Largest input or expected output on a single test case (1 MB)
pub const MAX_TEST_CASE_SIZE: usize = 1024 * 1024;
