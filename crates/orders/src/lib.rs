//! Order domain module.
//!
//! This crate contains the order lifecycle state machine and the store that
//! owns every order record (no HTTP, no persistence).

pub mod order;
pub mod store;

pub use order::{CreateOrder, Order, OrderId, OrderLine, OrderStatus};
pub use store::{OrderCounters, OrderStore, ProcessingDelays, StatusDistribution};
