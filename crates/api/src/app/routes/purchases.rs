use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use storefront_infra::ShopStore;

use crate::app::{dto, errors};

pub async fn list_purchases(
    Extension(store): Extension<Arc<dyn ShopStore>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(store.purchases())).into_response()
}

pub async fn create_purchase(
    Extension(store): Extension<Arc<dyn ShopStore>>,
    body: Result<Json<dto::CreatePurchaseRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match store.purchase(body.into()) {
        Ok(purchase) => (StatusCode::OK, Json(purchase)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
