//! Purchasing domain module.
//!
//! - `purchase`: the recorded purchase and the request that produces one
//! - `ledger`: append-only purchase log with sequential ids
//! - `transaction`: the purchase operation spanning catalog, customers and ledger

pub mod ledger;
pub mod purchase;
pub mod transaction;

pub use ledger::PurchaseLedger;
pub use purchase::{NewPurchase, Purchase, PurchaseRequest};
pub use transaction::PurchaseTransaction;
