//! Customer domain module.
//!
//! Customers are registered implicitly by their first purchase and keyed by
//! email.

pub mod customer;
pub mod registry;

pub use customer::{Customer, CustomerDetails};
pub use registry::CustomerRegistry;
