use axum::{Router, routing::get};

pub mod products;
pub mod purchases;
pub mod system;

/// Router for the shop endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .route("/purchase", get(purchases::list_purchases).post(purchases::create_purchase))
}
