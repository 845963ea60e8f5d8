use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Tag, User};

/// Post entity - a blog post owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Human-readable creation date, e.g. `Mon Jan 6 2025, 3:04 PM`.
    pub fn friendly_date(&self) -> String {
        self.created_at.format("%a %b %-d %Y, %-I:%M %p").to_string()
    }
}

/// Field values for creating or overwriting a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A post together with the user who wrote it.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: User,
}

/// Everything the post detail page shows.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub author: User,
    pub tags: Vec<Tag>,
}

impl PostDetail {
    pub fn tag_ids(&self) -> Vec<i32> {
        self.tags.iter().map(|t| t.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn friendly_date_is_readable() {
        let post = Post {
            id: 1,
            user_id: 1,
            title: "First".into(),
            content: "Hello".into(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 6, 15, 4, 0).unwrap(),
        };
        assert_eq!(post.friendly_date(), "Mon Jan 6 2025, 3:04 PM");
    }
}
