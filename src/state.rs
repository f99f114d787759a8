//! Shared application state

use std::sync::Arc;

use redis::aio::ConnectionManager;
use sqlx::PgPool;

use crate::config::Config;
use crate::judge::JudgeClient;

/// Handler-visible state. Every field is cheap to clone, so the whole
/// struct is passed by value through the router.
#[derive(Clone)]
pub struct AppState {
    db: PgPool,
    redis: ConnectionManager,
    judge: Arc<dyn JudgeClient>,
    config: Arc<Config>,
}

impl AppState {
    pub fn new(
        db: PgPool,
        redis: ConnectionManager,
        judge: Arc<dyn JudgeClient>,
        config: Config,
    ) -> Self {
        Self {
            db,
            redis,
            judge,
            config: Arc::new(config),
        }
    }

    pub fn db(&self) -> &PgPool {
        &self.db
    }

    /// Connection managers multiplex over one connection; cloning is
    /// how the redis crate hands out handles.
    pub fn redis(&self) -> ConnectionManager {
        self.redis.clone()
    }

    pub fn judge(&self) -> &Arc<dyn JudgeClient> {
        &self.judge
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
