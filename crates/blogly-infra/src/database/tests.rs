#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, DbConn, EntityTrait, Set};

    use crate::database::entity::{post, post_tag, tag};
    use crate::database::{
        DatabaseConfig, DatabaseConnections, SeaOrmPostRepository, SeaOrmTagRepository,
        SeaOrmUserRepository,
    };
    use blogly_core::RepoError;
    use blogly_core::domain::{Post, PostDraft, Selection, TagDraft, User, UserDraft};
    use blogly_core::ports::{BaseRepository, PostRepository, TagRepository, UserRepository};

    async fn setup() -> DbConn {
        let db = DatabaseConnections::init(&DatabaseConfig::sqlite_memory())
            .await
            .unwrap();
        Migrator::up(&db.main, None).await.unwrap();
        db.main
    }

    async fn seed_user(db: &DbConn, first: &str, last: &str) -> User {
        SeaOrmUserRepository::new(db.clone())
            .create(UserDraft::new(first, last, None))
            .await
            .unwrap()
    }

    async fn seed_tag(db: &DbConn, name: &str) -> i32 {
        SeaOrmTagRepository::new(db.clone())
            .create(TagDraft::new(name), Selection::default())
            .await
            .unwrap()
            .id
    }

    /// Insert a post with a fixed timestamp so ordering is deterministic.
    async fn seed_post_at(db: &DbConn, user_id: i32, title: &str, minutes: i64) -> i32 {
        let base = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        post::ActiveModel {
            title: Set(title.to_owned()),
            content: Set(format!("{title} body")),
            created_at: Set((base + Duration::minutes(minutes)).into()),
            user_id: Set(user_id),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
        .id
    }

    async fn link_count(db: &DbConn) -> usize {
        post_tag::Entity::find().all(db).await.unwrap().len()
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = setup().await;
        let author = seed_user(&db, "Test", "User").await;
        let id = seed_post_at(&db, author.id, "Test Post", 0).await;

        let repo = SeaOrmPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, id);
        assert_eq!(post.user_id, author.id);
    }

    #[tokio::test]
    async fn test_find_user_by_missing_id() {
        let db = setup().await;
        seed_user(&db, "Test", "User").await;

        let repo = SeaOrmUserRepository::new(db);

        let result: Option<User> = repo.find_by_id(99).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn users_are_listed_by_last_then_first_name() {
        let db = setup().await;
        seed_user(&db, "Zed", "Alda").await;
        seed_user(&db, "Jane", "Smith").await;
        seed_user(&db, "Alan", "Alda").await;

        let users = SeaOrmUserRepository::new(db).list().await.unwrap();
        let names: Vec<String> = users.iter().map(User::full_name).collect();
        assert_eq!(names, vec!["Alan Alda", "Zed Alda", "Jane Smith"]);
    }

    #[tokio::test]
    async fn update_overwrites_every_user_field() {
        let db = setup().await;
        let user = seed_user(&db, "Test", "User").await;
        let repo = SeaOrmUserRepository::new(db);

        let updated = repo
            .update(
                user.id,
                UserDraft::new("New", "Name", Some("https://example.com/a.png".into())),
            )
            .await
            .unwrap();

        assert_eq!(updated.full_name(), "New Name");
        assert_eq!(updated.image_url, "https://example.com/a.png");
    }

    #[tokio::test]
    async fn update_of_missing_user_is_not_found() {
        let db = setup().await;
        let err = SeaOrmUserRepository::new(db)
            .update(404, UserDraft::new("A", "B", None))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound { entity: "User", id: 404 }));
    }

    #[tokio::test]
    async fn deleting_user_cascades_to_posts_and_links() {
        let db = setup().await;
        let author = seed_user(&db, "Test", "User").await;
        let other = seed_user(&db, "Other", "User").await;
        let fun = seed_tag(&db, "Fun").await;

        let posts = SeaOrmPostRepository::new(db.clone());
        posts
            .create(author.id, PostDraft::new("One", "1"), Selection::new([fun]))
            .await
            .unwrap();
        posts
            .create(author.id, PostDraft::new("Two", "2"), Selection::new([fun]))
            .await
            .unwrap();
        let kept = posts
            .create(other.id, PostDraft::new("Kept", "3"), Selection::new([fun]))
            .await
            .unwrap();
        assert_eq!(link_count(&db).await, 3);

        SeaOrmUserRepository::new(db.clone())
            .delete(author.id)
            .await
            .unwrap();

        let remaining = post::Entity::find().all(&db).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
        assert_eq!(link_count(&db).await, 1);
        assert!(tag::Entity::find_by_id(fun).one(&db).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn post_tags_are_replaced_not_merged() {
        let db = setup().await;
        let author = seed_user(&db, "Test", "User").await;
        let t1 = seed_tag(&db, "t1").await;
        let t2 = seed_tag(&db, "t2").await;
        let t3 = seed_tag(&db, "t3").await;

        let posts = SeaOrmPostRepository::new(db.clone());
        let tags = SeaOrmTagRepository::new(db.clone());

        let post = posts
            .create(author.id, PostDraft::new("Tagged", "body"), Selection::new([t1, t3]))
            .await
            .unwrap();
        let linked = tags.tags_for_post(post.id).await.unwrap();
        let ids: Vec<i32> = linked.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![t1, t3]);

        posts
            .update(post.id, PostDraft::new("Tagged", "edited"), Selection::new([t2]))
            .await
            .unwrap();

        let detail = posts.find_detail(post.id).await.unwrap().unwrap();
        assert_eq!(detail.tag_ids(), vec![t2]);
        assert_eq!(detail.post.content, "edited");
        assert_eq!(detail.author.id, author.id);
    }

    #[tokio::test]
    async fn unknown_tag_ids_are_skipped() {
        let db = setup().await;
        let author = seed_user(&db, "Test", "User").await;
        let real = seed_tag(&db, "real").await;

        let posts = SeaOrmPostRepository::new(db.clone());
        let post = posts
            .create(
                author.id,
                PostDraft::new("Title", "body"),
                Selection::new([real, 999, real]),
            )
            .await
            .unwrap();

        let detail = posts.find_detail(post.id).await.unwrap().unwrap();
        assert_eq!(detail.tag_ids(), vec![real]);
    }

    #[tokio::test]
    async fn creating_post_for_missing_user_writes_nothing() {
        let db = setup().await;
        let t1 = seed_tag(&db, "t1").await;

        let err = SeaOrmPostRepository::new(db.clone())
            .create(42, PostDraft::new("Orphan", "body"), Selection::new([t1]))
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::NotFound { entity: "User", id: 42 }));
        assert!(post::Entity::find().all(&db).await.unwrap().is_empty());
        assert_eq!(link_count(&db).await, 0);
    }

    #[tokio::test]
    async fn recent_returns_five_newest_first() {
        let db = setup().await;
        let author = seed_user(&db, "Test", "User").await;
        for minute in 0..7 {
            seed_post_at(&db, author.id, &format!("Post {minute}"), minute).await;
        }

        let posts = SeaOrmPostRepository::new(db);
        let recent = posts.recent(5).await.unwrap();
        let titles: Vec<&str> = recent.iter().map(|p| p.post.title.as_str()).collect();
        assert_eq!(titles, vec!["Post 6", "Post 5", "Post 4", "Post 3", "Post 2"]);
        assert!(recent.iter().all(|p| p.author.id == author.id));

        let all = posts.list_with_authors().await.unwrap();
        assert_eq!(all.len(), 7);
        assert_eq!(all.first().unwrap().post.title, "Post 0");
        assert_eq!(all.last().unwrap().post.title, "Post 6");
    }

    #[tokio::test]
    async fn deleting_post_returns_it_and_keeps_tags() {
        let db = setup().await;
        let author = seed_user(&db, "Test", "User").await;
        let fun = seed_tag(&db, "Fun").await;

        let posts = SeaOrmPostRepository::new(db.clone());
        let post = posts
            .create(author.id, PostDraft::new("Bye", "body"), Selection::new([fun]))
            .await
            .unwrap();

        let deleted = posts.delete(post.id).await.unwrap();
        assert_eq!(deleted.user_id, author.id);
        assert_eq!(link_count(&db).await, 0);
        assert!(tag::Entity::find_by_id(fun).one(&db).await.unwrap().is_some());

        let again = posts.delete(post.id).await.unwrap_err();
        assert!(again.is_not_found());
    }

    #[tokio::test]
    async fn tag_posts_are_replaced_and_tag_delete_keeps_posts() {
        let db = setup().await;
        let author = seed_user(&db, "Test", "User").await;
        let p1 = seed_post_at(&db, author.id, "p1", 0).await;
        let p2 = seed_post_at(&db, author.id, "p2", 1).await;

        let tags = SeaOrmTagRepository::new(db.clone());
        let tag = tags
            .create(TagDraft::new("Fun"), Selection::new([p1, 12345]))
            .await
            .unwrap();
        assert_eq!(tags.find_detail(tag.id).await.unwrap().unwrap().post_ids(), vec![p1]);

        tags.update(tag.id, TagDraft::new("Funner"), Selection::new([p2]))
            .await
            .unwrap();
        let detail = tags.find_detail(tag.id).await.unwrap().unwrap();
        assert_eq!(detail.tag.name, "Funner");
        assert_eq!(detail.post_ids(), vec![p2]);
        assert_eq!(tags.list_in_use().await.unwrap().len(), 1);

        tags.delete(tag.id).await.unwrap();
        assert!(tags.list().await.unwrap().is_empty());
        assert!(tags.list_in_use().await.unwrap().is_empty());
        assert_eq!(post::Entity::find().all(&db).await.unwrap().len(), 2);
        assert_eq!(link_count(&db).await, 0);
    }

    #[tokio::test]
    async fn duplicate_tag_name_is_a_constraint_violation() {
        let db = setup().await;
        seed_tag(&db, "Fun").await;

        let err = SeaOrmTagRepository::new(db)
            .create(TagDraft::new("Fun"), Selection::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }
}
