use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use storefront_core::{DomainError, ProductId};
use storefront_infra::ShopStore;

use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

pub async fn list_products(
    Extension(store): Extension<Arc<dyn ShopStore>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(store.products())).into_response()
}

pub async fn get_product(
    Extension(store): Extension<Arc<dyn ShopStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid product id"),
    };

    match store.product(product_id) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e @ DomainError::NotFound(_)) => errors::json_error(StatusCode::NOT_FOUND, e.to_string()),
        Err(e) => errors::domain_error_to_response(e),
    }
}
