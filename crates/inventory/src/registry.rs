//! Name → category resolution.

use std::collections::BTreeMap;

use crate::category::Category;

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED_MANA_CAKE: &str = "Conjured Mana Cake";

/// Category used for any name without a registered entry.
pub const DEFAULT_CATEGORY: Category = Category::Normal;

/// Immutable mapping from exact item names to categories.
///
/// Built once (usually via [`CategoryRegistry::standard`] plus any
/// [`with_category`](CategoryRegistry::with_category) calls) and then handed to the
/// engine. Lookups are exact and case-sensitive; there is no prefix or pattern
/// matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    entries: BTreeMap<String, Category>,
}

impl CategoryRegistry {
    /// Registry with no entries: every item resolves to [`DEFAULT_CATEGORY`].
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The standard shop catalogue.
    pub fn standard() -> Self {
        Self::empty()
            .with_category(AGED_BRIE, Category::Appreciating)
            .with_category(SULFURAS, Category::Legendary)
            .with_category(BACKSTAGE_PASSES, Category::TieredEvent)
    }

    /// Register `name` under `category`, replacing any previous entry for that name.
    pub fn with_category(mut self, name: impl Into<String>, category: Category) -> Self {
        self.entries.insert(name.into(), category);
        self
    }

    pub fn resolve(&self, name: &str) -> Category {
        self.entries.get(name).copied().unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> {
        self.entries.iter().map(|(name, category)| (name.as_str(), *category))
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_maps_known_names() {
        let registry = CategoryRegistry::standard();
        assert_eq!(registry.resolve(AGED_BRIE), Category::Appreciating);
        assert_eq!(registry.resolve(SULFURAS), Category::Legendary);
        assert_eq!(registry.resolve(BACKSTAGE_PASSES), Category::TieredEvent);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn unknown_names_fall_back_to_default() {
        let registry = CategoryRegistry::standard();
        assert_eq!(registry.resolve("+5 Dexterity Vest"), DEFAULT_CATEGORY);
        assert_eq!(registry.resolve(""), DEFAULT_CATEGORY);
    }

    #[test]
    fn conjured_is_opt_in() {
        assert_eq!(
            CategoryRegistry::standard().resolve(CONJURED_MANA_CAKE),
            Category::Normal
        );
        let registry =
            CategoryRegistry::standard().with_category(CONJURED_MANA_CAKE, Category::Conjured);
        assert_eq!(registry.resolve(CONJURED_MANA_CAKE), Category::Conjured);
        assert_eq!(registry.resolve(AGED_BRIE), Category::Appreciating);
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let registry = CategoryRegistry::standard();
        assert_eq!(registry.resolve("aged brie"), Category::Normal);
        assert_eq!(registry.resolve("Aged Brie "), Category::Normal);
        assert_eq!(registry.resolve("Sulfuras"), Category::Normal);
        assert_eq!(registry.resolve("Backstage passes to a concert"), Category::Normal);
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let registry = CategoryRegistry::standard().with_category(AGED_BRIE, Category::Legendary);
        assert_eq!(registry.resolve(AGED_BRIE), Category::Legendary);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn empty_registry_resolves_everything_to_default() {
        let registry = CategoryRegistry::empty();
        assert!(registry.is_empty());
        assert_eq!(registry.resolve(SULFURAS), DEFAULT_CATEGORY);
    }

    #[test]
    fn iter_is_name_ordered() {
        let registry = CategoryRegistry::standard();
        let names: Vec<&str> = registry.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec![AGED_BRIE, BACKSTAGE_PASSES, SULFURAS]);
    }
}
