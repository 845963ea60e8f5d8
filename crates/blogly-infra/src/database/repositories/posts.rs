use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use blogly_core::domain::{Post, PostDetail, PostDraft, PostWithAuthor, Selection};
use blogly_core::error::RepoError;
use blogly_core::ports::PostRepository;

use super::SeaOrmPostRepository;
use crate::database::base::map_db_err;
use crate::database::entity::post::{self, Entity as PostEntity};
use crate::database::entity::tag::{self, Entity as TagEntity};
use crate::database::entity::user::{self, Entity as UserEntity};
use crate::database::links;

/// Pair a post row with its author, which the foreign key guarantees.
fn with_author(
    (post, author): (post::Model, Option<user::Model>),
) -> Result<PostWithAuthor, RepoError> {
    let author = author.ok_or_else(|| {
        RepoError::Query(format!(
            "post {} references missing user {}",
            post.id, post.user_id
        ))
    })?;

    Ok(PostWithAuthor {
        post: post.into(),
        author: author.into(),
    })
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn list_with_authors(&self) -> Result<Vec<PostWithAuthor>, RepoError> {
        let rows = PostEntity::find()
            .find_also_related(UserEntity)
            .order_by_asc(post::Column::CreatedAt)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(with_author).collect()
    }

    async fn recent(&self, limit: u64) -> Result<Vec<PostWithAuthor>, RepoError> {
        let rows = PostEntity::find()
            .find_also_related(UserEntity)
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(with_author).collect()
    }

    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::CreatedAt)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_detail(&self, id: i32) -> Result<Option<PostDetail>, RepoError> {
        let Some((post, author)) = PostEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let tags = post
            .find_related(TagEntity)
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        let PostWithAuthor { post, author } = with_author((post, author))?;
        Ok(Some(PostDetail {
            post,
            author,
            tags: tags.into_iter().map(Into::into).collect(),
        }))
    }

    async fn create(
        &self,
        user_id: i32,
        draft: PostDraft,
        tags: Selection,
    ) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        UserEntity::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| RepoError::not_found("User", user_id))?;

        let model = post::ActiveModel {
            id: NotSet,
            title: Set(draft.title),
            content: Set(draft.content),
            created_at: Set(Utc::now().into()),
            user_id: Set(user_id),
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        links::replace_post_tags(&txn, model.id, &tags)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        tracing::info!(post_id = model.id, user_id, "Created post");

        Ok(model.into())
    }

    async fn update(
        &self,
        id: i32,
        draft: PostDraft,
        tags: Selection,
    ) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = PostEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| RepoError::not_found("Post", id))?;

        let mut active: post::ActiveModel = existing.into();
        active.title = Set(draft.title);
        active.content = Set(draft.content);
        let model = active.update(&txn).await.map_err(map_db_err)?;

        links::replace_post_tags(&txn, id, &tags)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        tracing::info!(post_id = id, "Updated post");

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = PostEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| RepoError::not_found("Post", id))?;

        links::unlink_posts(&txn, vec![id])
            .await
            .map_err(map_db_err)?;
        PostEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        tracing::info!(post_id = id, user_id = existing.user_id, "Deleted post");

        Ok(existing.into())
    }
}
