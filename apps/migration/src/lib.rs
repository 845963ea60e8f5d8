//! Blogly schema migrations.

pub use sea_orm_migration::prelude::*;

mod m20250106_000001_create_blog_tables;

/// Applies every Blogly migration in order.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250106_000001_create_blog_tables::Migration)]
    }
}
