use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId, PurchaseId};
use storefront_customers::{Customer, CustomerDetails};

/// Request to buy `quantity` units of a product on behalf of a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub product_id: ProductId,
    pub quantity: u32,
    pub customer: CustomerDetails,
}

impl PurchaseRequest {
    /// Checks that need no store access: positive quantity, customer fields present.
    pub fn validate(&self) -> DomainResult<()> {
        if self.quantity == 0 {
            return Err(DomainError::validation("quantity must be greater than zero"));
        }
        self.customer.validate()
    }
}

/// A purchase ready to be recorded (everything but the id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPurchase {
    pub product_id: ProductId,
    pub quantity: u32,
    pub customer: Customer,
    pub purchased_at: DateTime<Utc>,
}

/// A recorded purchase. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    id: PurchaseId,
    product_id: ProductId,
    quantity: u32,
    customer: Customer,
    purchased_at: DateTime<Utc>,
}

impl Purchase {
    pub(crate) fn record(id: PurchaseId, new: NewPurchase) -> Self {
        Self {
            id,
            product_id: new.product_id,
            quantity: new.quantity,
            customer: new.customer,
            purchased_at: new.purchased_at,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn purchased_at(&self) -> DateTime<Utc> {
        self.purchased_at
    }
}

impl Entity for Purchase {
    type Id = PurchaseId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
