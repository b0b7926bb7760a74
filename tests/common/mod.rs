#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use restaurant_pos::{
    catalog::Catalog,
    db::{create_pool, run_migrations},
    routes::create_router,
    session::{create_session_store, session_layer},
    state::AppState,
    users::StaticUserDirectory,
};
use tower_sessions::SessionStore;

/// Fresh state over an in-memory database with the default catalog and users.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let pool = create_pool("sqlite::memory:").await?;
    run_migrations(&pool).await?;

    let users = StaticUserDirectory::with_defaults()?;

    Ok(AppState::new(pool, Catalog::default(), Arc::new(users)))
}

/// Full application over `state`, with sessions persisted next to the orders.
pub async fn app_with_state(state: AppState) -> anyhow::Result<Router> {
    let store = create_session_store(&state.pool).await?;
    Ok(app_with_store(state, store))
}

pub fn app_with_store<S>(state: AppState, store: S) -> Router
where
    S: SessionStore + Clone,
{
    create_router()
        .layer(session_layer(store, 30))
        .with_state(state)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(day: NaiveDate, h: u32, m: u32, s: u32) -> NaiveDateTime {
    day.and_hms_opt(h, m, s).expect("valid time")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
