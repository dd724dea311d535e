use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use storefront_catalog::{CatalogStore, Product};
use storefront_core::{DomainResult, Entity, ProductId};
use storefront_customers::{Customer, CustomerRegistry};
use storefront_purchasing::{Purchase, PurchaseLedger, PurchaseRequest, PurchaseTransaction};

use super::ShopStore;

#[derive(Debug)]
struct ShopState {
    catalog: CatalogStore,
    customers: CustomerRegistry,
    ledger: PurchaseLedger,
}

/// Process-lifetime shop state guarded by a single lock.
///
/// Reads share the lock; a purchase holds it exclusively for the whole
/// transaction.
#[derive(Debug)]
pub struct InMemoryShopStore {
    state: RwLock<ShopState>,
}

impl InMemoryShopStore {
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            state: RwLock::new(ShopState {
                catalog,
                customers: CustomerRegistry::new(),
                ledger: PurchaseLedger::new(),
            }),
        }
    }

    // Transactions validate before mutating, so a panicking holder cannot
    // leave half-applied state behind and poisoning can be ignored.
    fn read(&self) -> RwLockReadGuard<'_, ShopState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ShopState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ShopStore for InMemoryShopStore {
    fn products(&self) -> Vec<Product> {
        self.read().catalog.list().to_vec()
    }

    fn product(&self, id: ProductId) -> DomainResult<Product> {
        self.read().catalog.find_by_id(id).cloned()
    }

    fn customers(&self) -> Vec<Customer> {
        self.read().customers.list().to_vec()
    }

    fn purchases(&self) -> Vec<Purchase> {
        self.read().ledger.list().to_vec()
    }

    fn purchase(&self, request: PurchaseRequest) -> DomainResult<Purchase> {
        let product_id = request.product_id;
        let quantity = request.quantity;

        let mut guard = self.write();
        let state = &mut *guard;
        let result = PurchaseTransaction::new(&mut state.catalog, &mut state.customers, &mut state.ledger)
            .execute(request, Utc::now());

        match &result {
            Ok(purchase) => tracing::info!(
                purchase_id = %purchase.id(),
                product_id = %product_id,
                quantity,
                customer_id = %purchase.customer().id(),
                "purchase recorded"
            ),
            Err(err) => tracing::warn!(
                product_id = %product_id,
                quantity,
                error = %err,
                "purchase rejected"
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use rust_decimal::Decimal;
    use storefront_core::{DomainError, PurchaseId};
    use storefront_customers::CustomerDetails;

    use super::*;

    fn store(stock: u32) -> InMemoryShopStore {
        let catalog = CatalogStore::from_products(vec![
            Product::new(ProductId::new(1), "Lamp", Decimal::new(2450, 2), stock),
            Product::new(ProductId::new(2), "Mug", Decimal::new(800, 2), 10),
        ])
        .unwrap();
        InMemoryShopStore::new(catalog)
    }

    fn request(quantity: u32, email: &str) -> PurchaseRequest {
        PurchaseRequest {
            product_id: ProductId::new(1),
            quantity,
            customer: CustomerDetails::new(email, "Jane", "Somewhere 1"),
        }
    }

    #[test]
    fn reads_reflect_committed_purchases() {
        let store = store(5);
        let purchase = store.purchase(request(2, "jane@mail.com")).unwrap();

        assert_eq!(store.product(ProductId::new(1)).unwrap().stock(), 3);
        assert_eq!(store.purchases(), vec![purchase]);
        assert_eq!(store.customers().len(), 1);
    }

    #[test]
    fn rejected_purchase_changes_nothing() {
        let store = store(5);
        let before = store.products();

        let err = store.purchase(request(2, "")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.products(), before);
        assert!(store.purchases().is_empty());
        assert!(store.customers().is_empty());
    }

    #[test]
    fn unknown_product_lookup_fails() {
        let store = store(5);
        assert!(matches!(
            store.product(ProductId::new(404)),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn concurrent_purchases_never_oversell() {
        let store = Arc::new(store(100));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..25)
                        .filter_map(|_| store.purchase(request(1, &format!("buyer{t}@mail.com"))).ok())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let accepted: Vec<Purchase> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        // 200 attempts against 100 units.
        assert_eq!(accepted.len(), 100);
        assert_eq!(store.product(ProductId::new(1)).unwrap().stock(), 0);

        let ids: HashSet<PurchaseId> = accepted.iter().map(Entity::id).collect();
        assert_eq!(ids.len(), 100);
        assert_eq!(ids.iter().max(), Some(&PurchaseId::new(100)));
        // Each buyer can take at most 25 units, so at least four got through.
        assert!((4..=8).contains(&store.customers().len()));
    }
}
