//! Shared shop state behind a storage trait.

pub mod in_memory;

pub use in_memory::InMemoryShopStore;

use std::sync::Arc;

use storefront_catalog::Product;
use storefront_core::{DomainResult, ProductId};
use storefront_customers::Customer;
use storefront_purchasing::{Purchase, PurchaseRequest};

/// Catalog, customers and purchases as one shared store.
///
/// Implementations serialize purchases so that stock, customer and ledger
/// updates happen as one unit.
pub trait ShopStore: Send + Sync {
    fn products(&self) -> Vec<Product>;
    fn product(&self, id: ProductId) -> DomainResult<Product>;
    fn customers(&self) -> Vec<Customer>;
    fn purchases(&self) -> Vec<Purchase>;
    /// Run a purchase transaction.
    fn purchase(&self, request: PurchaseRequest) -> DomainResult<Purchase>;
}

impl<S> ShopStore for Arc<S>
where
    S: ShopStore + ?Sized,
{
    fn products(&self) -> Vec<Product> {
        (**self).products()
    }

    fn product(&self, id: ProductId) -> DomainResult<Product> {
        (**self).product(id)
    }

    fn customers(&self) -> Vec<Customer> {
        (**self).customers()
    }

    fn purchases(&self) -> Vec<Purchase> {
        (**self).purchases()
    }

    fn purchase(&self, request: PurchaseRequest) -> DomainResult<Purchase> {
        (**self).purchase(request)
    }
}
