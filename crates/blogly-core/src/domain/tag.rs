use serde::{Deserialize, Serialize};

use super::Post;

/// Tag entity - a globally unique label attached to posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// Field values for creating or renaming a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDraft {
    pub name: String,
}

impl TagDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A tag together with the posts carrying it.
#[derive(Debug, Clone)]
pub struct TagDetail {
    pub tag: Tag,
    pub posts: Vec<Post>,
}

impl TagDetail {
    pub fn post_ids(&self) -> Vec<i32> {
        self.posts.iter().map(|p| p.id).collect()
    }
}
