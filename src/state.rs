use std::sync::Arc;

use crate::{
    catalog::Catalog,
    db::{DbPool, OrmConn, create_orm_conn},
    users::UserDirectory,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub catalog: Arc<Catalog>,
    pub users: Arc<dyn UserDirectory>,
}

impl AppState {
    pub fn new(pool: DbPool, catalog: Catalog, users: Arc<dyn UserDirectory>) -> Self {
        let orm = create_orm_conn(pool.clone());
        Self {
            pool,
            orm,
            catalog: Arc::new(catalog),
            users,
        }
    }
}
