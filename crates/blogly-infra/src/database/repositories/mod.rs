//! SeaORM repository implementations.
//!
//! Every mutation opens a transaction, performs its lookups first and
//! returns [`RepoError::NotFound`](blogly_core::RepoError::NotFound) before
//! writing anything. Dropping an uncommitted transaction rolls it back.

mod posts;
mod tags;
mod users;

use super::base::SeaOrmRepository;
use super::entity::post::Entity as PostEntity;
use super::entity::tag::Entity as TagEntity;
use super::entity::user::Entity as UserEntity;

/// SeaORM user repository.
pub type SeaOrmUserRepository = SeaOrmRepository<UserEntity>;

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmRepository<PostEntity>;

/// SeaORM tag repository.
pub type SeaOrmTagRepository = SeaOrmRepository<TagEntity>;
