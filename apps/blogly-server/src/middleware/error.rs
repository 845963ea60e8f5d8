//! Error handling - HTML error pages.
//!
//! A lookup miss is the only expected failure and becomes a 404 page. Bad
//! form submissions become 400s and everything else is a logged 500; none
//! of them are retried or swallowed.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use askama::Template;

use blogly_core::error::RepoError;
use blogly_shared::FormError;

use crate::views::ErrorPage;

/// Application-level error type that converts to HTML error pages.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let page = match self {
            AppError::NotFound(detail) => {
                tracing::debug!("Not found: {}", detail);
                ErrorPage::new(status, "Page Not Found", None)
            }
            AppError::BadRequest(detail) => {
                ErrorPage::new(status, "Bad Request", Some(detail.as_str()))
            }
            AppError::Internal(detail) => {
                // Details stay in the logs.
                tracing::error!("Internal error: {}", detail);
                ErrorPage::new(status, "Internal Server Error", None)
            }
        };

        let html = page.render().unwrap_or_else(|e| {
            tracing::error!("Failed to render error page: {}", e);
            fallback_html(status)
        });

        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
            .body(html)
    }
}

fn fallback_html(status: StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    format!(
        r#"<!DOCTYPE html>
<html><head><title>{code} - {reason} | Blogly</title></head>
<body><h1>{code} - {reason}</h1></body></html>"#,
        code = status.as_u16(),
    )
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { entity, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity, id))
            }
            // Logged once, when the response is built.
            RepoError::Constraint(msg) => {
                AppError::Internal(format!("database constraint violated: {}", msg))
            }
            RepoError::Connection(msg) => {
                AppError::Internal(format!("database connection error: {}", msg))
            }
            RepoError::Query(msg) => AppError::Internal(format!("database query error: {}", msg)),
        }
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(format!("template rendering failed: {}", err))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
