//! The purchase operation.
//!
//! Every precondition that can fail is checked before the first mutation, so a
//! rejected request leaves catalog, registry and ledger exactly as they were.

use chrono::{DateTime, Utc};

use storefront_catalog::CatalogStore;
use storefront_core::DomainResult;
use storefront_customers::CustomerRegistry;

use crate::ledger::PurchaseLedger;
use crate::purchase::{NewPurchase, Purchase, PurchaseRequest};

/// Exclusive view over the three stores for the duration of one purchase.
#[derive(Debug)]
pub struct PurchaseTransaction<'a> {
    catalog: &'a mut CatalogStore,
    customers: &'a mut CustomerRegistry,
    ledger: &'a mut PurchaseLedger,
}

impl<'a> PurchaseTransaction<'a> {
    pub fn new(
        catalog: &'a mut CatalogStore,
        customers: &'a mut CustomerRegistry,
        ledger: &'a mut PurchaseLedger,
    ) -> Self {
        Self {
            catalog,
            customers,
            ledger,
        }
    }

    /// Decrement stock, resolve the customer and record the purchase.
    ///
    /// Errors: `Validation` (quantity or customer fields), `EmptyCatalog`,
    /// `NotFound` (product), `InsufficientStock`.
    pub fn execute(self, request: PurchaseRequest, at: DateTime<Utc>) -> DomainResult<Purchase> {
        request.validate()?;

        // Fails without touching the catalog.
        self.catalog
            .decrease_stock(request.product_id, request.quantity)?;

        // Cannot fail: the candidate was validated above.
        let customer = self.customers.create_or_get(request.customer)?;

        Ok(self.ledger.append(NewPurchase {
            product_id: request.product_id,
            quantity: request.quantity,
            customer,
            purchased_at: at,
        }))
    }
}
