//! Engine facade: one call per simulated day.
//!
//! ```text
//! &mut [Item]
//!   ↓
//! for each item (input order):
//!   1. resolve category by exact name (default if unregistered)
//!   2. apply that category's rules in place
//!   ↓
//! same &mut [Item], mutated
//! ```
//!
//! The engine holds only its read-only [`CategoryRegistry`], so one engine can be
//! shared by callers that tick disjoint collections.

use serde_json::Value as JsonValue;

use shelfwise_core::{DomainError, DomainResult};

use crate::category::{Category, MAX_QUALITY, MIN_QUALITY};
use crate::item::Item;
use crate::record::parse_items;
use crate::registry::CategoryRegistry;

#[derive(Debug, Clone, Default)]
pub struct InventoryEngine {
    registry: CategoryRegistry,
}

impl InventoryEngine {
    pub fn new(registry: CategoryRegistry) -> Self {
        Self { registry }
    }

    /// Engine over [`CategoryRegistry::standard`].
    pub fn standard() -> Self {
        Self::new(CategoryRegistry::standard())
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Advance every item by one day.
    ///
    /// Items are mutated in place and the caller's slice is handed back; nothing is
    /// copied. Calling this twice advances two days.
    pub fn tick<'a>(&self, items: &'a mut [Item]) -> &'a mut [Item] {
        tracing::debug!(items = items.len(), "tick");

        for item in items.iter_mut() {
            let category = self.registry.resolve(item.name());
            let (sell_in_before, quality_before) = (item.sell_in(), item.quality());
            category.apply(item);
            tracing::trace!(
                name = item.name(),
                category = category.as_str(),
                sell_in_before,
                quality_before,
                sell_in = item.sell_in(),
                quality = item.quality(),
                "item aged"
            );
        }

        items
    }

    /// Advance every item by `days` days (`0` is a no-op).
    pub fn tick_days<'a>(&self, items: &'a mut [Item], days: u32) -> &'a mut [Item] {
        for _ in 0..days {
            self.tick(items);
        }
        items
    }

    /// Check that every non-legendary item starts with quality in
    /// `MIN_QUALITY..=MAX_QUALITY`.
    pub fn check_bounds(&self, items: &[Item]) -> DomainResult<()> {
        for (index, item) in items.iter().enumerate() {
            if self.registry.resolve(item.name()) == Category::Legendary {
                continue;
            }
            if !(MIN_QUALITY..=MAX_QUALITY).contains(&item.quality()) {
                return Err(DomainError::validation(format!(
                    "items[{index}].quality is out of range"
                )));
            }
        }
        Ok(())
    }

    /// Validate raw `{name, sellIn, quality}` records and advance them by one day.
    ///
    /// Validation (shape, then quality bounds) covers the whole collection before any
    /// item is aged, so a bad record yields an error and no output at all.
    pub fn tick_records(&self, records: &JsonValue) -> DomainResult<Vec<Item>> {
        let mut items = parse_items(records)?;
        self.check_bounds(&items)?;
        self.tick(&mut items);
        Ok(items)
    }
}
