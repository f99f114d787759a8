//! Small shared helpers with no dependencies on the rest of the crate.

pub mod crypto;
pub mod time;
pub mod validation;

pub use crypto::{generate_secure_token, hash_string};
pub use time::today_utc;
pub use validation::{validate_language, validate_username};
