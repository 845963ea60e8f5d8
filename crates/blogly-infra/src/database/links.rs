//! Maintenance of `posts_tags` rows.
//!
//! Association edits are full replacements: the existing links of the owner
//! are deleted, the submitted ids are resolved against the other table, and
//! one row is inserted per resolved id. Ids that match nothing are skipped.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

use blogly_core::domain::Selection;

use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_tag::{self, Entity as PostTagEntity};
use super::entity::tag::{self, Entity as TagEntity};

/// Make `tags` the exact tag set of `post_id`. Returns the linked tag ids.
pub(crate) async fn replace_post_tags<C>(
    conn: &C,
    post_id: i32,
    tags: &Selection,
) -> Result<Vec<i32>, DbErr>
where
    C: ConnectionTrait,
{
    unlink_posts(conn, vec![post_id]).await?;

    let existing: Vec<i32> = if tags.is_empty() {
        Vec::new()
    } else {
        TagEntity::find()
            .select_only()
            .column(tag::Column::Id)
            .filter(tag::Column::Id.is_in(tags.ids()))
            .into_tuple()
            .all(conn)
            .await?
    };
    let resolved = tags.resolve(existing);

    insert_links(conn, resolved.iter().map(|&tag_id| (post_id, tag_id))).await?;
    tracing::debug!(post_id, tags = ?resolved, "Replaced post tags");

    Ok(resolved)
}

/// Make `posts` the exact post set of `tag_id`. Returns the linked post ids.
pub(crate) async fn replace_tag_posts<C>(
    conn: &C,
    tag_id: i32,
    posts: &Selection,
) -> Result<Vec<i32>, DbErr>
where
    C: ConnectionTrait,
{
    unlink_tag(conn, tag_id).await?;

    let existing: Vec<i32> = if posts.is_empty() {
        Vec::new()
    } else {
        PostEntity::find()
            .select_only()
            .column(post::Column::Id)
            .filter(post::Column::Id.is_in(posts.ids()))
            .into_tuple()
            .all(conn)
            .await?
    };
    let resolved = posts.resolve(existing);

    insert_links(conn, resolved.iter().map(|&post_id| (post_id, tag_id))).await?;
    tracing::debug!(tag_id, posts = ?resolved, "Replaced tag posts");

    Ok(resolved)
}

/// Drop every link that references one of `post_ids`.
pub(crate) async fn unlink_posts<C>(conn: &C, post_ids: Vec<i32>) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    if post_ids.is_empty() {
        return Ok(0);
    }

    let result = PostTagEntity::delete_many()
        .filter(post_tag::Column::PostId.is_in(post_ids))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

/// Drop every link that references `tag_id`.
pub(crate) async fn unlink_tag<C>(conn: &C, tag_id: i32) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let result = PostTagEntity::delete_many()
        .filter(post_tag::Column::TagId.eq(tag_id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

async fn insert_links<C, I>(conn: &C, pairs: I) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    I: IntoIterator<Item = (i32, i32)>,
{
    let rows: Vec<post_tag::ActiveModel> = pairs
        .into_iter()
        .map(|(post_id, tag_id)| post_tag::ActiveModel::link(post_id, tag_id))
        .collect();

    // An empty multi-row INSERT is not valid SQL.
    if rows.is_empty() {
        return Ok(());
    }

    PostTagEntity::insert_many(rows)
        .exec_without_returning(conn)
        .await?;

    Ok(())
}
