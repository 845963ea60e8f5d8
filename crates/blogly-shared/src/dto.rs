//! Data Transfer Objects - form submissions accepted by the web pages.
//!
//! Forms arrive as `application/x-www-form-urlencoded` bodies. Multi-select
//! fields repeat their key (`tags=1&tags=3`), so bodies are first decoded
//! into ordered key/value pairs and then read field by field.

use serde::Deserialize;
use thiserror::Error;

/// Problems reading a submitted form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required field `{0}`")]
    Missing(&'static str),

    #[error("field `{field}` has non-numeric value `{value}`")]
    InvalidId { field: &'static str, value: String },
}

/// Raw form body as ordered key/value pairs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// Wrap already decoded pairs, e.g. from a multipart or query parser.
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// A field that must be present. Empty values are accepted; the
    /// database decides what it will store.
    pub fn required(&self, key: &'static str) -> Result<String, FormError> {
        self.get(key)
            .map(str::to_owned)
            .ok_or(FormError::Missing(key))
    }

    /// Every id submitted under a repeated `key`, in order.
    pub fn ids(&self, key: &'static str) -> Result<Vec<i32>, FormError> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| {
                v.trim().parse().map_err(|_| FormError::InvalidId {
                    field: key,
                    value: v.clone(),
                })
            })
            .collect()
    }
}

/// New/edit user form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
}

impl TryFrom<&FormFields> for UserForm {
    type Error = FormError;

    fn try_from(fields: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: fields.required("first_name")?,
            last_name: fields.required("last_name")?,
            // Older markup posted the URL as `image`.
            image_url: fields
                .get("image_url")
                .or_else(|| fields.get("image"))
                .map(str::to_owned),
        })
    }
}

/// New/edit post form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub tag_ids: Vec<i32>,
}

impl TryFrom<&FormFields> for PostForm {
    type Error = FormError;

    fn try_from(fields: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            title: fields.required("title")?,
            content: fields.required("content")?,
            tag_ids: fields.ids("tags")?,
        })
    }
}

/// New/edit tag form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagForm {
    pub name: String,
    pub post_ids: Vec<i32>,
}

impl TryFrom<&FormFields> for TagForm {
    type Error = FormError;

    fn try_from(fields: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            name: fields.required("name")?,
            post_ids: fields.ids("posts")?,
        })
    }
}
