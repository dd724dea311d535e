use storefront_core::{DomainError, DomainResult, IdSequence, PurchaseId, find_by_id};

use crate::purchase::{NewPurchase, Purchase};

/// Append-only log of completed purchases.
///
/// Performs no validation; the purchase transaction checks everything before
/// appending.
#[derive(Debug, Clone, Default)]
pub struct PurchaseLedger {
    purchases: Vec<Purchase>,
    ids: IdSequence,
}

impl PurchaseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a purchase under the next sequential id.
    pub fn append(&mut self, purchase: NewPurchase) -> Purchase {
        let purchase = Purchase::record(self.ids.next_id(), purchase);
        self.purchases.push(purchase.clone());
        purchase
    }

    /// All purchases in insertion order.
    pub fn list(&self) -> &[Purchase] {
        &self.purchases
    }

    pub fn get(&self, id: PurchaseId) -> DomainResult<&Purchase> {
        find_by_id(&self.purchases, id)
            .ok_or_else(|| DomainError::not_found(format!("no purchase found for id {id}")))
    }

    pub fn len(&self) -> usize {
        self.purchases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storefront_core::{Entity, ProductId};
    use storefront_customers::{CustomerDetails, CustomerRegistry};

    fn new_purchase(product: u64, quantity: u32) -> NewPurchase {
        let customer = CustomerRegistry::new()
            .create_or_get(CustomerDetails::new("a@b.com", "A", "B"))
            .unwrap();
        NewPurchase {
            product_id: ProductId::new(product),
            quantity,
            customer,
            purchased_at: Utc::now(),
        }
    }

    #[test]
    fn append_assigns_sequential_ids() {
        let mut ledger = PurchaseLedger::new();
        let first = ledger.append(new_purchase(3, 2));
        let second = ledger.append(new_purchase(5, 1));

        assert_eq!(first.id(), PurchaseId::new(1));
        assert_eq!(second.id(), PurchaseId::new(2));
        assert_eq!(second.product_id(), ProductId::new(5));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut ledger = PurchaseLedger::new();
        for product in [9, 4, 7] {
            ledger.append(new_purchase(product, 1));
        }
        let products: Vec<u64> = ledger.list().iter().map(|p| p.product_id().get()).collect();
        assert_eq!(products, vec![9, 4, 7]);
    }

    #[test]
    fn get_looks_up_by_id() {
        let mut ledger = PurchaseLedger::new();
        let recorded = ledger.append(new_purchase(3, 2));
        assert_eq!(ledger.get(recorded.id()).unwrap(), &recorded);
        assert!(matches!(
            ledger.get(PurchaseId::new(42)),
            Err(DomainError::NotFound(_))
        ));
    }
}
