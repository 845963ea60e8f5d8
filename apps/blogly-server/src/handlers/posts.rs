//! Post pages, including the per-user "new post" form.

use actix_web::{HttpResponse, web};

use blogly_core::domain::{PostDraft, Selection};
use blogly_shared::{FormFields, PostForm};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{PostDetailPage, PostFormPage, PostListPage};

use super::{found, redirect, render};

fn into_parts(form: PostForm) -> (PostDraft, Selection) {
    (
        PostDraft::new(form.title, form.content),
        Selection::new(form.tag_ids),
    )
}

/// GET /posts - every post, oldest first.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_with_authors().await?;
    render(&PostListPage { posts })
}

/// GET /users/{id}/posts/new
pub async fn new_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let user = found(state.users.find_by_id(user_id).await?, "User", user_id)?;
    let tags = state.tags.list().await?;

    render(&PostFormPage::blank(&user, tags))
}

/// POST /users/{id}/posts/new
pub async fn create(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Form<FormFields>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let (draft, tags) = into_parts(PostForm::try_from(&body.into_inner())?);
    state.posts.create(user_id, draft, tags).await?;

    Ok(redirect(format!("/users/{}", user_id)))
}

/// GET /posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let detail = found(state.posts.find_detail(id).await?, "Post", id)?;

    render(&PostDetailPage { detail })
}

/// GET /posts/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let detail = found(state.posts.find_detail(id).await?, "Post", id)?;
    let tags = state.tags.list().await?;

    render(&PostFormPage::edit(detail, tags))
}

/// POST /posts/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Form<FormFields>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let (draft, tags) = into_parts(PostForm::try_from(&body.into_inner())?);
    state.posts.update(id, draft, tags).await?;

    Ok(redirect(format!("/posts/{}", id)))
}

/// POST /posts/{id}/delete - back to the author's page.
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = state.posts.delete(path.into_inner()).await?;

    Ok(redirect(format!("/users/{}", post.user_id)))
}
