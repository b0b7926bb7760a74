use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Form` whose rejections render as the HTML error page.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct HtmlForm<T>(pub T);
