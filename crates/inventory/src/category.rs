//! Item categories and their daily update rules.
//!
//! Every category owns one update function. Adding a category means adding a variant
//! and its function here and registering a name for it; existing rules stay untouched.

use crate::item::Item;

/// Upper bound on quality for every category except [`Category::Legendary`].
pub const MAX_QUALITY: i32 = 50;

/// Lower bound on quality for every category except [`Category::Legendary`].
pub const MIN_QUALITY: i32 = 0;

/// Update-rule family an item belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Default: loses 1 quality per day, 2 once expired.
    Normal,
    /// Gains 1 quality per day, 2 once expired, up to the cap.
    Appreciating,
    /// Never changes, not even out-of-range quality.
    Legendary,
    /// Gains value as the event approaches and drops to zero once it has passed.
    TieredEvent,
    /// Degrades twice as fast as a normal item.
    Conjured,
}

impl Category {
    /// Advance `item` by one day according to this category's rules.
    ///
    /// Only `sell_in` and `quality` are touched.
    pub fn apply(self, item: &mut Item) {
        match self {
            Category::Normal => degrade(item, 1),
            Category::Appreciating => appreciate(item),
            Category::Legendary => {}
            Category::TieredEvent => tiered_event(item),
            Category::Conjured => degrade(item, 2),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::Appreciating => "appreciating",
            Category::Legendary => "legendary",
            Category::TieredEvent => "tiered_event",
            Category::Conjured => "conjured",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn degrade(item: &mut Item, rate: i32) {
    item.sell_in = item.sell_in.saturating_sub(1);
    item.quality = item.quality.saturating_sub(rate);
    if item.is_expired() {
        item.quality = item.quality.saturating_sub(rate);
    }
    item.quality = item.quality.max(MIN_QUALITY);
}

fn appreciate(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
    item.quality = item.quality.saturating_add(1);
    if item.is_expired() {
        item.quality = item.quality.saturating_add(1);
    }
    item.quality = item.quality.min(MAX_QUALITY);
}

// Thresholds are checked against the already-decremented sell_in.
fn tiered_event(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
    item.quality = item.quality.saturating_add(1);
    if item.sell_in < 10 {
        item.quality = item.quality.saturating_add(1);
    }
    if item.sell_in < 5 {
        item.quality = item.quality.saturating_add(1);
    }
    if item.is_expired() {
        item.quality = 0;
    }
    item.quality = item.quality.min(MAX_QUALITY);
}
