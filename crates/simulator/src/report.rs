//! Plain-text day reports.

use shelfwise_inventory::Item;

/// Render one day's report:
///
/// ```text
/// -------- day 1 --------
/// name, sellIn, quality
/// Aged Brie, 1, 1
///
/// ```
pub fn render_day(day: u32, items: &[Item]) -> String {
    let mut out = format!("-------- day {day} --------\n");
    out.push_str("name, sellIn, quality\n");
    for item in items {
        out.push_str(&format!("{item}\n"));
    }
    out.push('\n');
    out
}
