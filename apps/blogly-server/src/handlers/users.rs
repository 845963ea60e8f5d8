//! User pages.

use actix_web::{HttpResponse, web};

use blogly_core::domain::UserDraft;
use blogly_shared::{FormFields, UserForm};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{UserDetailPage, UserFormPage, UserListPage};

use super::{found, redirect, render};

fn into_draft(form: UserForm) -> UserDraft {
    UserDraft::new(form.first_name, form.last_name, form.image_url)
}

/// GET /users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    render(&UserListPage { users })
}

/// GET /users/new
pub async fn new_form() -> AppResult<HttpResponse> {
    render(&UserFormPage::blank())
}

/// POST /users/new
pub async fn create(
    state: web::Data<AppState>,
    body: web::Form<FormFields>,
) -> AppResult<HttpResponse> {
    let form = UserForm::try_from(&body.into_inner())?;
    let user = state.users.create(into_draft(form)).await?;

    Ok(redirect(format!("/users/{}", user.id)))
}

/// GET /users/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = found(state.users.find_by_id(id).await?, "User", id)?;
    let posts = state.posts.find_by_user_id(id).await?;

    render(&UserDetailPage { user, posts })
}

/// GET /users/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = found(state.users.find_by_id(id).await?, "User", id)?;

    render(&UserFormPage::edit(user))
}

/// POST /users/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Form<FormFields>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = UserForm::try_from(&body.into_inner())?;
    state.users.update(id, into_draft(form)).await?;

    Ok(redirect("/users"))
}

/// POST /users/{id}/delete - also removes the user's posts.
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.users.delete(path.into_inner()).await?;

    Ok(redirect("/users"))
}
