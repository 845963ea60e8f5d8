use async_trait::async_trait;

use crate::domain::{
    Post, PostDetail, PostDraft, PostWithAuthor, Selection, Tag, TagDetail, TagDraft, User,
    UserDraft,
};
use crate::error::RepoError;

/// Generic repository trait for lookups shared by every entity.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;
}

/// User repository.
///
/// Mutations run in a single transaction; a missing user aborts with
/// [`RepoError::NotFound`] before anything is written.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// All users ordered by last name, then first name.
    async fn list(&self) -> Result<Vec<User>, RepoError>;

    async fn create(&self, draft: UserDraft) -> Result<User, RepoError>;

    /// Overwrite every field of an existing user.
    async fn update(&self, id: i32, draft: UserDraft) -> Result<User, RepoError>;

    /// Delete a user together with all of their posts and those posts' tag links.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Every post with its author, oldest first.
    async fn list_with_authors(&self) -> Result<Vec<PostWithAuthor>, RepoError>;

    /// The `limit` newest posts with their authors, newest first.
    async fn recent(&self, limit: u64) -> Result<Vec<PostWithAuthor>, RepoError>;

    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;

    async fn find_detail(&self, id: i32) -> Result<Option<PostDetail>, RepoError>;

    /// Create a post for `user_id` tagged with exactly the resolvable ids in `tags`.
    async fn create(
        &self,
        user_id: i32,
        draft: PostDraft,
        tags: Selection,
    ) -> Result<Post, RepoError>;

    /// Overwrite title and content and replace the tag set.
    async fn update(&self, id: i32, draft: PostDraft, tags: Selection)
    -> Result<Post, RepoError>;

    /// Delete a post and its tag links, returning the removed post.
    async fn delete(&self, id: i32) -> Result<Post, RepoError>;
}

/// Tag repository.
#[async_trait]
pub trait TagRepository: BaseRepository<Tag, i32> {
    /// All tags ordered by id.
    async fn list(&self) -> Result<Vec<Tag>, RepoError>;

    /// Tags attached to at least one post, ordered by id.
    async fn list_in_use(&self) -> Result<Vec<Tag>, RepoError>;

    async fn find_detail(&self, id: i32) -> Result<Option<TagDetail>, RepoError>;

    async fn tags_for_post(&self, post_id: i32) -> Result<Vec<Tag>, RepoError>;

    /// Create a tag attached to exactly the resolvable ids in `posts`.
    async fn create(&self, draft: TagDraft, posts: Selection) -> Result<Tag, RepoError>;

    /// Rename a tag and replace its post set.
    async fn update(&self, id: i32, draft: TagDraft, posts: Selection) -> Result<Tag, RepoError>;

    /// Delete a tag and its post links. Formerly tagged posts survive.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}
