//! Inventory aging engine.
//!
//! This crate contains the daily update rules for stock items, implemented purely as
//! deterministic domain logic (no IO, no clock, no storage). A host calls
//! [`InventoryEngine::tick`] once per simulated day and persists or displays the
//! resulting items itself.

pub mod category;
pub mod engine;
pub mod item;
pub mod record;
pub mod registry;

pub use category::{Category, MAX_QUALITY, MIN_QUALITY};
pub use engine::InventoryEngine;
pub use item::Item;
pub use record::{items_from_json, parse_items};
pub use registry::{
    AGED_BRIE, BACKSTAGE_PASSES, CONJURED_MANA_CAKE, CategoryRegistry, DEFAULT_CATEGORY, SULFURAS,
};
