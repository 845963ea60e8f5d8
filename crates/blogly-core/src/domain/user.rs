use serde::{Deserialize, Serialize};

/// Image shown for users who did not supply one.
pub const DEFAULT_IMAGE_URL: &str =
    "https://www.freeiconspng.com/uploads/person-icon-user-person-man-icon-4.png";

/// User entity - the author of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl User {
    /// "first last" representation used across pages.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Field values for creating or overwriting a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl UserDraft {
    /// Build a draft, falling back to [`DEFAULT_IMAGE_URL`] when no image is given.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        image_url: Option<String>,
    ) -> Self {
        let image_url = image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            image_url,
        }
    }
}
