use serde::Serialize;

/// A stock item tracked by the aging engine.
///
/// `name` is fixed at construction and selects the item's category. `sell_in` and
/// `quality` are the only fields a tick ever touches, and they are mutated in place:
/// the engine hands the caller's own records back rather than producing copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    name: String,
    #[serde(rename = "sellIn")]
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days remaining before the sell-by date (0 = last day, negative = expired).
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_name_sell_in_quality() {
        let item = Item::new("+5 Dexterity Vest", 10, 20);
        assert_eq!(item.to_string(), "+5 Dexterity Vest, 10, 20");
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let item = Item::new("Aged Brie", 2, 0);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Aged Brie", "sellIn": 2, "quality": 0 })
        );
    }

    #[test]
    fn expired_only_after_sell_by_day() {
        assert!(!Item::new("x", 0, 1).is_expired());
        assert!(Item::new("x", -1, 1).is_expired());
    }
}
