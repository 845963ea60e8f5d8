//! # Blogly Core
//!
//! The domain layer of Blogly.
//! This crate contains the users/posts/tags model and the repository ports,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
