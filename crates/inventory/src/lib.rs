//! Inventory domain module.
//!
//! This crate contains business rules for stock levels, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod snapshot;
pub mod stock;

pub use snapshot::StockSnapshot;
pub use stock::{ProductStock, StockKey};
