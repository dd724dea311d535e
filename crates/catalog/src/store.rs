use storefront_core::{DomainError, DomainResult, ProductId, find_by_id, find_by_id_mut};

use crate::load::{LoadError, ensure_unique_ids, parse_products};
use crate::product::Product;

/// In-memory catalog of products and their current stock levels.
///
/// Not synchronized; callers that share a store across threads wrap it in a
/// lock (see `storefront-infra`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Build a catalog from a JSON source.
    pub fn load(source: &[u8]) -> Result<Self, LoadError> {
        Ok(Self {
            products: parse_products(source)?,
        })
    }

    pub fn from_products(products: Vec<Product>) -> Result<Self, LoadError> {
        ensure_unique_ids(&products)?;
        Ok(Self { products })
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find_by_id(&self, id: ProductId) -> DomainResult<&Product> {
        find_by_id(&self.products, id).ok_or_else(|| product_not_found(id))
    }

    /// Remove `amount` units from the product's stock and return the updated
    /// product.
    ///
    /// On error no product is modified.
    pub fn decrease_stock(&mut self, id: ProductId, amount: u32) -> DomainResult<Product> {
        if self.products.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let product = find_by_id_mut(&mut self.products, id).ok_or_else(|| product_not_found(id))?;
        product.take_stock(amount)?;
        Ok(product.clone())
    }
}

fn product_not_found(id: ProductId) -> DomainError {
    DomainError::not_found(format!("no product found for id {id}"))
}
