//! Application state - shared across all handlers.

use std::sync::Arc;

use blogly_core::ports::{PostRepository, TagRepository, UserRepository};
use blogly_infra::database::{
    DatabaseConnections, SeaOrmPostRepository, SeaOrmTagRepository, SeaOrmUserRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub db: Arc<DatabaseConnections>,
}

impl AppState {
    /// Build the repositories on top of an already opened connection pool.
    pub fn new(db: Arc<DatabaseConnections>) -> Self {
        let users = Arc::new(SeaOrmUserRepository::new(db.main.clone()));
        let posts = Arc::new(SeaOrmPostRepository::new(db.main.clone()));
        let tags = Arc::new(SeaOrmTagRepository::new(db.main.clone()));

        tracing::info!("Application state initialized");

        Self {
            users,
            posts,
            tags,
            db,
        }
    }
}
