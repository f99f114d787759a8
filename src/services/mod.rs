//! Business logic, one service per domain area.

pub mod admin_service;
pub mod auth_service;
pub mod contest_service;
pub mod forum_service;
pub mod problem_service;
pub mod progression;
pub mod ranking;
pub mod submission_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use auth_service::{AuthService, IssuedTokens};
pub use contest_service::ContestService;
pub use forum_service::ForumService;
pub use problem_service::ProblemService;
pub use progression::ProgressionService;
pub use ranking::{RankProvider, RankingService, XpRankProvider};
pub use submission_service::{CaseOutcome, GradedSubmission, SubmissionService};
pub use user_service::UserService;
