use serde::Deserialize;

use storefront_core::ProductId;
use storefront_customers::CustomerDetails;
use storefront_purchasing::PurchaseRequest;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CustomerRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePurchaseRequest {
    pub product_id: u64,
    pub quantity: u32,
    // Missing customer falls through to field validation.
    pub customer: Option<CustomerRequest>,
}

// -------------------------
// Domain mapping helpers
// -------------------------

impl From<CustomerRequest> for CustomerDetails {
    fn from(body: CustomerRequest) -> Self {
        CustomerDetails::new(body.email, body.name, body.address)
    }
}

impl From<CreatePurchaseRequest> for PurchaseRequest {
    fn from(body: CreatePurchaseRequest) -> Self {
        PurchaseRequest {
            product_id: ProductId::new(body.product_id),
            quantity: body.quantity,
            customer: body.customer.map(CustomerDetails::from).unwrap_or_default(),
        }
    }
}
