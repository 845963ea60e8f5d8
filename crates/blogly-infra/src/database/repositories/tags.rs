use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, NotSet, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use blogly_core::domain::{Selection, Tag, TagDetail, TagDraft};
use blogly_core::error::RepoError;
use blogly_core::ports::TagRepository;

use super::SeaOrmTagRepository;
use crate::database::base::map_db_err;
use crate::database::entity::post::{self, Entity as PostEntity};
use crate::database::entity::post_tag::{self, Entity as PostTagEntity};
use crate::database::entity::tag::{self, Entity as TagEntity};
use crate::database::links;

#[async_trait]
impl TagRepository for SeaOrmTagRepository {
    async fn list(&self) -> Result<Vec<Tag>, RepoError> {
        let tags = TagEntity::find()
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(tags.into_iter().map(Into::into).collect())
    }

    async fn list_in_use(&self) -> Result<Vec<Tag>, RepoError> {
        let linked = Query::select()
            .column(post_tag::Column::TagId)
            .from(PostTagEntity)
            .to_owned();

        let tags = TagEntity::find()
            .filter(tag::Column::Id.in_subquery(linked))
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(tags.into_iter().map(Into::into).collect())
    }

    async fn find_detail(&self, id: i32) -> Result<Option<TagDetail>, RepoError> {
        let Some(tag) = TagEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let posts = tag
            .find_related(PostEntity)
            .order_by_asc(post::Column::CreatedAt)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(TagDetail {
            tag: tag.into(),
            posts: posts.into_iter().map(Into::into).collect(),
        }))
    }

    async fn tags_for_post(&self, post_id: i32) -> Result<Vec<Tag>, RepoError> {
        let linked = Query::select()
            .column(post_tag::Column::TagId)
            .from(PostTagEntity)
            .and_where(post_tag::Column::PostId.eq(post_id))
            .to_owned();

        let tags = TagEntity::find()
            .filter(tag::Column::Id.in_subquery(linked))
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(tags.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: TagDraft, posts: Selection) -> Result<Tag, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = tag::ActiveModel {
            id: NotSet,
            name: Set(draft.name),
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        links::replace_tag_posts(&txn, model.id, &posts)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        tracing::info!(tag_id = model.id, name = %model.name, "Created tag");

        Ok(model.into())
    }

    async fn update(&self, id: i32, draft: TagDraft, posts: Selection) -> Result<Tag, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = TagEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| RepoError::not_found("Tag", id))?;

        let mut active: tag::ActiveModel = existing.into();
        active.name = Set(draft.name);
        let model = active.update(&txn).await.map_err(map_db_err)?;

        links::replace_tag_posts(&txn, id, &posts)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        tracing::info!(tag_id = id, "Updated tag");

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        TagEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| RepoError::not_found("Tag", id))?;

        let links_removed = links::unlink_tag(&txn, id).await.map_err(map_db_err)?;
        TagEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        tracing::info!(tag_id = id, links_removed, "Deleted tag");

        Ok(())
    }
}
