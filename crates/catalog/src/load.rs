//! Catalog source parsing.
//!
//! The source is a JSON array of `{id, name, price, stock}` records. Reading
//! the bytes is the caller's concern; see `storefront-infra` for the file
//! loader.

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

use storefront_core::{Entity, ProductId};

use crate::product::Product;

/// Failure to produce a catalog from its source. Fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog source {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog source: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate product id {0} in catalog source")]
    DuplicateId(ProductId),
}

/// Parse a catalog source into products, preserving source order.
pub fn parse_products(source: &[u8]) -> Result<Vec<Product>, LoadError> {
    let products: Vec<Product> = serde_json::from_slice(source)?;
    ensure_unique_ids(&products)?;
    Ok(products)
}

pub(crate) fn ensure_unique_ids(products: &[Product]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id()) {
            return Err(LoadError::DuplicateId(product.id()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn parses_products_in_source_order() {
        let source = br#"[
            {"id": 2, "name": "Lamp", "price": 24.5, "stock": 7},
            {"id": 1, "name": "Mug", "price": 8, "stock": 0}
        ]"#;

        let products = parse_products(source).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id(), ProductId::new(2));
        assert_eq!(products[0].price(), Decimal::new(245, 1));
        assert_eq!(products[1].name(), "Mug");
        assert_eq!(products[1].price(), Decimal::new(8, 0));
        assert_eq!(products[1].stock(), 0);
    }

    #[test]
    fn empty_array_is_a_valid_source() {
        assert!(parse_products(b"[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_products(b"[{\"id\": 1, \"name\": ").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn negative_stock_is_rejected() {
        let err = parse_products(br#"[{"id": 1, "name": "Mug", "price": 1, "stock": -3}]"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let source = br#"[
            {"id": 4, "name": "A", "price": 1, "stock": 1},
            {"id": 4, "name": "B", "price": 2, "stock": 2}
        ]"#;
        let err = parse_products(source).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(id) if id == ProductId::new(4)));
    }
}
