//! Database layer
//!
//! Pool construction, embedded migrations, and one repository per
//! aggregate under [`repositories`].

pub mod connection;
pub mod repositories;

use sqlx::PgPool;

pub use connection::{create_pool, test_connection};

/// Apply embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
