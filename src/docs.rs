use axum::Json;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::products;
use crate::models::{Product, ProductPayload};

/// Generated OpenAPI 3 document for the product endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Microservicio de Productos API",
        version = "1.0.0",
        description = "Documentación interactiva para la gestión de productos (CRUD). Este microservicio es una unidad independiente."
    ),
    servers((url = "/api/v1", description = "Servidor de desarrollo local")),
    paths(
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
    ),
    components(schemas(Product, ProductPayload)),
    modifiers(&BasicAuthScheme),
    tags((name = "Productos", description = "Gestión de productos"))
)]
pub struct ApiDoc;

/// Declares HTTP basic auth. Documentation only; no route checks credentials.
struct BasicAuthScheme;

impl Modify for BasicAuthScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basicAuth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
            );
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
