//! Infrastructure layer: configuration, catalog source loading and the
//! shared, lock-guarded shop state.

pub mod catalog_file;
pub mod config;
pub mod shop_store;

pub use catalog_file::read_catalog;
pub use config::{AppConfig, ConfigError};
pub use shop_store::{InMemoryShopStore, ShopStore};
