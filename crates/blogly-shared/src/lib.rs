//! # Blogly Shared
//!
//! Request types shared between the HTTP layer and anything else that
//! submits Blogly forms.

pub mod dto;

pub use dto::{FormError, FormFields, PostForm, TagForm, UserForm};
