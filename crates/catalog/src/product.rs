use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

/// A purchasable catalog entry.
///
/// Products are created in bulk from the catalog source and only ever change
/// through [`Product::take_stock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    stock: u32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Remove `amount` units from stock.
    ///
    /// Leaves the product untouched when `amount` exceeds the current stock.
    pub(crate) fn take_stock(&mut self, amount: u32) -> DomainResult<()> {
        let remaining = self
            .stock
            .checked_sub(amount)
            .ok_or_else(|| DomainError::insufficient_stock(self.id, amount, self.stock))?;
        self.stock = remaining;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(stock: u32) -> Product {
        Product::new(ProductId::new(1), "Widget", Decimal::new(1999, 2), stock)
    }

    #[test]
    fn take_stock_reduces_stock() {
        let mut product = widget(10);
        product.take_stock(4).unwrap();
        assert_eq!(product.stock(), 6);
    }

    #[test]
    fn take_stock_allows_selling_out() {
        let mut product = widget(3);
        product.take_stock(3).unwrap();
        assert_eq!(product.stock(), 0);
    }

    #[test]
    fn take_stock_rejects_overdraw_without_mutation() {
        let mut product = widget(5);
        let err = product.take_stock(9).unwrap_err();
        assert_eq!(err, DomainError::insufficient_stock(ProductId::new(1), 9, 5));
        assert_eq!(product.stock(), 5);
    }

    #[test]
    fn price_serializes_as_json_number() {
        let json = serde_json::to_value(widget(2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Widget", "price": 19.99, "stock": 2})
        );
    }
}
