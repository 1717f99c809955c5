use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{Product, ProductId, ProductPayload},
    validation, AppState,
};

/// Unwraps the JSON body and applies the type checks of validation.
fn payload_parts(payload: Result<Json<ProductPayload>, JsonRejection>) -> AppResult<(String, f64)> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(payload.into_parts()?)
}

// ── List ──────────────────────────────────────────────────────────────────────

/// Obtiene la lista de todos los productos
#[utoipa::path(
    get,
    path = "/productos",
    tag = "Productos",
    responses(
        (status = 200, description = "Lista exitosa de productos.", body = [Product]),
        (status = 500, description = "Error interno del servidor."),
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.read().await.list().to_vec();

    info!(count = products.len(), "Listed products");

    Ok(Json(products))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

/// Obtiene un producto por su ID
#[utoipa::path(
    get,
    path = "/productos/{id}",
    tag = "Productos",
    params(("id" = u64, Path, description = "ID del producto a obtener.")),
    responses(
        (status = 200, description = "Detalle del producto encontrado.", body = Product),
        (status = 400, description = "ID inválido."),
        (status = 404, description = "Producto no encontrado."),
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let id: ProductId = id
        .parse()
        .map_err(|_| AppError::BadRequest("ID inválido".to_string()))?;

    let product = state
        .products
        .read()
        .await
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Producto no encontrado".to_string()))?;

    info!(id = %id, "Fetched product");

    Ok(Json(product))
}

// ── Create ────────────────────────────────────────────────────────────────────

/// Crea un nuevo producto
#[utoipa::path(
    post,
    path = "/productos",
    tag = "Productos",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Producto creado con éxito.", body = Product),
        (status = 400, description = "Datos de producto inválidos."),
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let (name, price) = payload_parts(payload)?;
    let product = state.products.write().await.create(name, price)?;

    info!(id = %product.id, name = %product.name, price = product.price, "Created product");

    Ok((StatusCode::CREATED, Json(product)))
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Actualiza un producto existente por su ID
///
/// The body is validated before the id is resolved; an id that does not parse
/// matches no product.
#[utoipa::path(
    put,
    path = "/productos/{id}",
    tag = "Productos",
    params(("id" = u64, Path, description = "ID del producto a actualizar.")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Producto actualizado con éxito.", body = Product),
        (status = 400, description = "Datos de actualización inválidos."),
        (status = 404, description = "Producto no encontrado para actualizar."),
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let (name, price) = payload_parts(payload)?;

    let updated = match id.parse::<ProductId>() {
        Ok(id) => state.products.write().await.update(id, name, price)?,
        Err(_) => {
            validation::validate(&name, price)?;
            None
        }
    };
    let product = updated
        .ok_or_else(|| AppError::NotFound("Producto no encontrado para actualizar".to_string()))?;

    info!(id = %product.id, "Updated product");

    Ok(Json(product))
}

// ── Delete ────────────────────────────────────────────────────────────────────

/// Elimina un producto por su ID
#[utoipa::path(
    delete,
    path = "/productos/{id}",
    tag = "Productos",
    params(("id" = u64, Path, description = "ID del producto a eliminar.")),
    responses(
        (status = 204, description = "Producto eliminado con éxito (No Content)."),
        (status = 404, description = "Producto no encontrado para eliminar."),
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = match id.parse::<ProductId>() {
        Ok(id) => state.products.write().await.delete(id),
        Err(_) => false,
    };
    if !deleted {
        return Err(AppError::NotFound(
            "Producto no encontrado para eliminar".to_string(),
        ));
    }

    info!(id = %id, "Deleted product");

    Ok(StatusCode::NO_CONTENT)
}
