//! # Blogly Infrastructure
//!
//! Concrete implementations of the ports defined in `blogly-core`:
//! SeaORM entities for the blog schema and repositories that enforce the
//! cascade and association rules inside database transactions.
//!
//! ## Feature Flags
//!
//! - `sqlite` - SQLite support (used by the test suites); PostgreSQL is always on

pub mod database;

pub use database::{
    DatabaseConfig, DatabaseConnections, SeaOrmPostRepository, SeaOrmTagRepository,
    SeaOrmUserRepository,
};
