use serde::{Deserialize, Serialize};

/// Inventory item identifier.
pub type ItemId = u64;

/// Items with fewer available units than this (but more than zero) count as
/// low stock.
pub const LOW_STOCK_THRESHOLD: u64 = 20;

/// A stocked item. Owned and mutated exclusively by
/// [`InventoryStore`](crate::store::InventoryStore).
///
/// `quantity` and `reserved` are unsigned: no operation can drive either
/// below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u64,
    pub price: f64,
    pub reserved: u64,
}

/// Partial update: only fields present on the wire are applied.
///
/// The two fields are deliberately independent; nothing cross-checks one
/// against the other.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct UpdateItem {
    pub quantity: Option<u64>,
    pub reserved: Option<u64>,
}

/// Stock figures derived from the full item list on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StockSummary {
    /// Σ quantity × price across all items.
    pub total_value: f64,
    /// Items with no available units.
    pub out_of_stock: u64,
    /// Items below [`LOW_STOCK_THRESHOLD`] but not yet out of stock.
    pub low_stock: u64,
}
