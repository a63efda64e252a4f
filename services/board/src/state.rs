//! Application state shared across handlers

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::repositories::{PostRepository, SessionRepository, UserRepository};

/// Application state shared across handlers; repositories are injected
/// here once at startup rather than reached through any global handle
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub config: AppConfig,
    pub users: UserRepository,
    pub posts: PostRepository,
    pub sessions: SessionRepository,
}

impl AppState {
    /// Build the state from a connected pool and the service configuration
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            posts: PostRepository::new(pool.clone()),
            sessions: SessionRepository::new(pool.clone()),
            db_pool: pool,
            config,
        }
    }
}
