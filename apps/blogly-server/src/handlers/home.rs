//! Landing page.

use actix_web::{HttpResponse, web};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::HomePage;

use super::render;

/// Number of posts shown on the landing page.
const RECENT_POSTS: u64 = 5;

/// GET / - newest posts and the tags in use.
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.recent(RECENT_POSTS).await?;
    let tags = state.tags.list_in_use().await?;

    render(&HomePage { posts, tags })
}
