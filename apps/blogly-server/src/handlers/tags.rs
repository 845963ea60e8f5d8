//! Tag pages.

use actix_web::{HttpResponse, web};

use blogly_core::domain::{Selection, TagDraft};
use blogly_shared::{FormFields, TagForm};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{TagDetailPage, TagFormPage, TagListPage};

use super::{found, redirect, render};

fn into_parts(form: TagForm) -> (TagDraft, Selection) {
    (TagDraft::new(form.name), Selection::new(form.post_ids))
}

/// GET /tags
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.tags.list().await?;
    render(&TagListPage { tags })
}

/// GET /tags/new
pub async fn new_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_with_authors().await?;
    render(&TagFormPage::blank(posts))
}

/// POST /tags/new
pub async fn create(
    state: web::Data<AppState>,
    body: web::Form<FormFields>,
) -> AppResult<HttpResponse> {
    let (draft, posts) = into_parts(TagForm::try_from(&body.into_inner())?);
    state.tags.create(draft, posts).await?;

    Ok(redirect("/tags"))
}

/// GET /tags/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let detail = found(state.tags.find_detail(id).await?, "Tag", id)?;

    render(&TagDetailPage { detail })
}

/// GET /tags/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let detail = found(state.tags.find_detail(id).await?, "Tag", id)?;
    let posts = state.posts.list_with_authors().await?;

    render(&TagFormPage::edit(detail, posts))
}

/// POST /tags/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Form<FormFields>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let (draft, posts) = into_parts(TagForm::try_from(&body.into_inner())?);
    state.tags.update(id, draft, posts).await?;

    Ok(redirect("/tags"))
}

/// POST /tags/{id}/delete
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.tags.delete(path.into_inner()).await?;

    Ok(redirect("/tags"))
}
