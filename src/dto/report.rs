use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// `POST /report` form and `GET /api/report` query.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// Calendar date, `YYYY-MM-DD`. Defaults to today.
    pub date: Option<String>,
}
