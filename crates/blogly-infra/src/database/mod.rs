//! Database connection management and repositories.

mod base;
mod connections;
pub mod entity;
mod links;
mod repositories;

pub use base::SeaOrmRepository;
pub use connections::{DatabaseConfig, DatabaseConnections};
pub use repositories::{SeaOrmPostRepository, SeaOrmTagRepository, SeaOrmUserRepository};

#[cfg(test)]
mod tests;
