use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{menu::MenuData, report::ReportQuery},
    models::{ItemSales, MenuItem, SalesReport},
    response::{ApiResponse, Meta},
    routes::{api, health},
    session::SESSION_COOKIE,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        api::menu,
        api::report,
    ),
    components(
        schemas(
            MenuItem,
            MenuData,
            ItemSales,
            SalesReport,
            ReportQuery,
            Meta,
            ApiResponse<MenuData>,
            ApiResponse<SalesReport>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Menu", description = "Catalog endpoints"),
        (name = "Report", description = "Admin sales report endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
