//! HTTP handlers and route configuration.

mod health;
mod home;
mod posts;
mod tags;
mod users;

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use askama::Template;

use blogly_core::error::RepoError;

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        // `/users/abc` names no user.
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::NotFound(err.to_string()).into()),
    )
    .app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/", web::get().to(home::index))
    .route("/health", web::get().to(health::health_check))
    .service(
        web::scope("/users")
            .route("", web::get().to(users::list))
            .service(
                web::resource("/new")
                    .route(web::get().to(users::new_form))
                    .route(web::post().to(users::create)),
            )
            .route("/{id}", web::get().to(users::show))
            .service(
                web::resource("/{id}/edit")
                    .route(web::get().to(users::edit_form))
                    .route(web::post().to(users::update)),
            )
            .route("/{id}/delete", web::post().to(users::delete))
            .service(
                web::resource("/{id}/posts/new")
                    .route(web::get().to(posts::new_form))
                    .route(web::post().to(posts::create)),
            ),
    )
    .service(
        web::scope("/posts")
            .route("", web::get().to(posts::list))
            .route("/{id}", web::get().to(posts::show))
            .service(
                web::resource("/{id}/edit")
                    .route(web::get().to(posts::edit_form))
                    .route(web::post().to(posts::update)),
            )
            .route("/{id}/delete", web::post().to(posts::delete)),
    )
    .service(
        web::scope("/tags")
            .route("", web::get().to(tags::list))
            .service(
                web::resource("/new")
                    .route(web::get().to(tags::new_form))
                    .route(web::post().to(tags::create)),
            )
            .route("/{id}", web::get().to(tags::show))
            .service(
                web::resource("/{id}/edit")
                    .route(web::get().to(tags::edit_form))
                    .route(web::post().to(tags::update)),
            )
            .route("/{id}/delete", web::post().to(tags::delete)),
    )
    .default_service(web::to(not_found));
}

/// Fallback for unmatched paths.
async fn not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}

/// Render a page as a 200 HTML response.
fn render<T: Template>(page: &T) -> AppResult<HttpResponse> {
    let html = page.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// 302 to `location`.
fn redirect(location: impl Into<String>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.into()))
        .finish()
}

/// Turn a lookup miss into a 404.
fn found<T>(entity: Option<T>, kind: &'static str, id: i32) -> AppResult<T> {
    entity.ok_or_else(|| RepoError::not_found(kind, id).into())
}
