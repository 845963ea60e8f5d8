//! Domain entities - the core business objects.

mod post;
mod selection;
mod tag;
mod user;

pub use post::{Post, PostDetail, PostDraft, PostWithAuthor};
pub use selection::Selection;
pub use tag::{Tag, TagDetail, TagDraft};
pub use user::{DEFAULT_IMAGE_URL, User, UserDraft};
