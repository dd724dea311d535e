//! Catalog domain module.
//!
//! Holds the products loaded once at startup and the only mutation they
//! support: stock decrement. Deterministic domain logic (no IO, no HTTP).

pub mod load;
pub mod product;
pub mod store;

pub use load::LoadError;
pub use product::Product;
pub use store::CatalogStore;
