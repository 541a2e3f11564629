//! Inventory store: stock levels, reservations, derived metrics.

use std::sync::Mutex;

use fulfillment_core::{DomainError, DomainResult};

use crate::item::{Item, ItemId, LOW_STOCK_THRESHOLD, StockSummary, UpdateItem};

#[derive(Debug, Default)]
struct Shelf {
    items: Vec<Item>,
    checks: u64,
    updates: u64,
}

/// Owns every item record; all reads and mutations go through one lock, so a
/// reservation is a single atomic step and no reader observes a torn item.
#[derive(Debug, Default)]
pub struct InventoryStore {
    shelf: Mutex<Shelf>,
}

/// Everything a scrape needs, captured under one lock.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySnapshot {
    pub items: Vec<Item>,
    pub checks: u64,
    pub updates: u64,
    pub summary: StockSummary,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with a catalog.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            shelf: Mutex::new(Shelf {
                items,
                checks: 0,
                updates: 0,
            }),
        }
    }

    /// Look up one item. The attempt counts as an inventory check even when
    /// the id is unknown.
    pub fn get(&self, id: ItemId) -> Option<Item> {
        let mut shelf = self.shelf.lock().unwrap();
        shelf.checks += 1;
        shelf.items.iter().find(|i| i.id == id).cloned()
    }

    /// All items. Counts as one inventory check.
    pub fn list(&self) -> Vec<Item> {
        let mut shelf = self.shelf.lock().unwrap();
        shelf.checks += 1;
        shelf.items.clone()
    }

    /// Overwrite whichever of `quantity`/`reserved` the patch carries.
    ///
    /// The attempt counts as an inventory update even when the id is
    /// unknown.
    pub fn update(&self, id: ItemId, patch: UpdateItem) -> DomainResult<Item> {
        let mut shelf = self.shelf.lock().unwrap();
        shelf.updates += 1;

        let Some(item) = shelf.items.iter_mut().find(|i| i.id == id) else {
            return Err(DomainError::NotFound);
        };
        if let Some(quantity) = patch.quantity {
            item.quantity = quantity;
        }
        if let Some(reserved) = patch.reserved {
            item.reserved = reserved;
        }

        tracing::debug!(item_id = id, "inventory item updated");
        Ok(item.clone())
    }

    /// Move `quantity` units from available stock into the reservation, as
    /// one atomic step. A shortfall rejects without touching the item.
    pub fn reserve(&self, id: ItemId, quantity: u64) -> DomainResult<Item> {
        let mut shelf = self.shelf.lock().unwrap();
        shelf.updates += 1;

        let Some(item) = shelf.items.iter_mut().find(|i| i.id == id) else {
            return Err(DomainError::NotFound);
        };
        if item.quantity < quantity {
            return Err(DomainError::InsufficientStock {
                requested: quantity,
                available: item.quantity,
            });
        }

        item.quantity -= quantity;
        item.reserved += quantity;
        tracing::debug!(item_id = id, quantity, "inventory reserved");
        Ok(item.clone())
    }

    /// Consistent snapshot for a scrape. Does not count as a check.
    pub fn snapshot(&self) -> InventorySnapshot {
        let shelf = self.shelf.lock().unwrap();
        InventorySnapshot {
            items: shelf.items.clone(),
            checks: shelf.checks,
            updates: shelf.updates,
            summary: summarize(&shelf.items),
        }
    }
}

/// Derive the stock figures from the current item list.
fn summarize(items: &[Item]) -> StockSummary {
    StockSummary {
        total_value: items.iter().map(|i| i.quantity as f64 * i.price).sum(),
        out_of_stock: items.iter().filter(|i| i.quantity == 0).count() as u64,
        low_stock: items
            .iter()
            .filter(|i| i.quantity > 0 && i.quantity < LOW_STOCK_THRESHOLD)
            .count() as u64,
    }
}
