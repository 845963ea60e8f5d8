use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

use blogly_core::domain::{User, UserDraft};
use blogly_core::error::RepoError;
use blogly_core::ports::UserRepository;

use super::SeaOrmUserRepository;
use crate::database::base::map_db_err;
use crate::database::entity::post::{self, Entity as PostEntity};
use crate::database::entity::user::{self, Entity as UserEntity};
use crate::database::links;

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let users = UserEntity::find()
            .order_by_asc(user::Column::LastName)
            .order_by_asc(user::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(users.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: UserDraft) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(draft)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn update(&self, id: i32, draft: UserDraft) -> Result<User, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = UserEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| RepoError::not_found("User", id))?;

        let mut active: user::ActiveModel = existing.into();
        active.first_name = Set(draft.first_name);
        active.last_name = Set(draft.last_name);
        active.image_url = Set(draft.image_url);
        let model = active.update(&txn).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        tracing::info!(user_id = id, "Updated user");

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        UserEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| RepoError::not_found("User", id))?;

        // Children first: links, then posts, then the user.
        let post_ids: Vec<i32> = PostEntity::find()
            .select_only()
            .column(post::Column::Id)
            .filter(post::Column::UserId.eq(id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(map_db_err)?;

        let links_removed = links::unlink_posts(&txn, post_ids)
            .await
            .map_err(map_db_err)?;

        let posts_removed = PostEntity::delete_many()
            .filter(post::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?
            .rows_affected;

        UserEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        tracing::info!(user_id = id, posts_removed, links_removed, "Deleted user");

        Ok(())
    }
}
