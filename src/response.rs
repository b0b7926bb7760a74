use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub date: Option<String>,
    pub total: Option<i64>,
}

impl Meta {
    pub fn new(date: impl Into<String>, total: i64) -> Self {
        Self {
            date: Some(date.into()),
            total: Some(total),
        }
    }

    pub fn empty() -> Self {
        Self {
            date: None,
            total: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
