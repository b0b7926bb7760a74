use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::{
    response::{ApiResponse, Meta},
    views,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No items selected.")]
    NoItemsSelected,

    #[error("Unknown menu item: {0}")]
    UnknownItem(String),

    #[error("Quantity for {0} must be a positive number.")]
    InvalidQuantity(String),

    #[error("Invalid date! Use format YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Invalid login.")]
    InvalidLogin,

    #[error("Access Denied! Admins only.")]
    Forbidden,

    #[error("Could not read the submitted form.")]
    MalformedForm(#[from] FormRejection),

    #[error("Session error")]
    SessionError(#[from] tower_sessions::session::Error),

    #[error("Database error")]
    DbError(#[from] sqlx::Error),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoItemsSelected
            | AppError::UnknownItem(_)
            | AppError::InvalidQuantity(_)
            | AppError::InvalidDate(_)
            | AppError::MalformedForm(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidLogin => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::DbError(_)
            | AppError::OrmError(_)
            | AppError::SessionError(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Where the error page points the user next.
    fn back_link(&self) -> (&'static str, &'static str) {
        match self {
            AppError::NoItemsSelected
            | AppError::UnknownItem(_)
            | AppError::InvalidQuantity(_)
            | AppError::MalformedForm(_) => ("/", "Go back"),
            AppError::InvalidDate(_) => ("/report", "Try again"),
            AppError::InvalidLogin => ("/login", "Try again"),
            AppError::Forbidden => ("/login", "Login"),
            AppError::DbError(_)
            | AppError::OrmError(_)
            | AppError::SessionError(_)
            | AppError::Internal(_) => ("/", "Home"),
        }
    }

    fn log(&self) {
        match self {
            AppError::DbError(err) => tracing::error!(error = %err, "database failure"),
            AppError::OrmError(err) => tracing::error!(error = %err, "orm failure"),
            AppError::SessionError(err) => tracing::error!(error = %err, "session store failure"),
            AppError::MalformedForm(err) => tracing::debug!(error = %err, "form rejected"),
            AppError::Internal(err) => tracing::error!(error = ?err, "internal failure"),
            _ => {}
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let (href, label) = self.back_link();
        let body = views::message_page(&self.to_string(), href, label);
        (status, Html(body)).into_response()
    }
}

/// JSON flavour of [`AppError`] for the `/api` routes.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        err.log();
        let status = err.status();
        let body = ApiResponse {
            message: err.to_string(),
            data: Some(ErrorData {
                error: err.to_string(),
            }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type ApiResult<T> = Result<T, ApiError>;
