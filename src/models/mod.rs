pub mod contest;
pub mod forum;
pub mod problem;
pub mod submission;
pub mod test_case;
pub mod user;

pub use contest::{Contest, ContestRegistration, ContestStatus};
pub use forum::{ForumCategory, ForumReply, ForumThread, ForumVote, ThreadStatus, VoteValue};
pub use problem::{Difficulty, Problem};
pub use submission::Submission;
pub use test_case::TestCase;
pub use user::{Role, User};
