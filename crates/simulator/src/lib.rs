//! `shelfwise-simulator` — reference host for the aging engine.
//!
//! Loads the initial shop, then alternates between printing a day report and asking
//! the engine to age every item by one day. Persistence is just the in-memory list.

pub mod config;
pub mod fixture;
pub mod report;

use std::io::Write;

use anyhow::Context;

use shelfwise_inventory::{
    CONJURED_MANA_CAKE, Category, CategoryRegistry, InventoryEngine, Item, items_from_json,
};

pub use config::SimConfig;
pub use fixture::standard_shop;
pub use report::render_day;

/// Category registry for the given configuration.
pub fn registry_for(config: &SimConfig) -> CategoryRegistry {
    let registry = CategoryRegistry::standard();
    if config.conjured {
        registry.with_category(CONJURED_MANA_CAKE, Category::Conjured)
    } else {
        registry
    }
}

/// Initial items: the configured JSON file, or the built-in shop.
pub fn load_items(config: &SimConfig) -> anyhow::Result<Vec<Item>> {
    let Some(path) = &config.items_path else {
        return Ok(standard_shop());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read items from {}", path.display()))?;
    let items = items_from_json(&raw)
        .with_context(|| format!("invalid items in {}", path.display()))?;

    tracing::info!(path = %path.display(), items = items.len(), "loaded items");
    Ok(items)
}

/// Run the configured simulation, writing day reports `0..=days` to `out`.
pub fn run(config: &SimConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let engine = InventoryEngine::new(registry_for(config));
    let mut items = load_items(config)?;
    engine
        .check_bounds(&items)
        .context("initial items violate quality bounds")?;
    simulate(&engine, &mut items, config.days, out)
}

/// Report day 0, then tick and report each following day.
pub fn simulate(
    engine: &InventoryEngine,
    items: &mut [Item],
    days: u32,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    tracing::info!(days, items = items.len(), "starting simulation");

    for day in 0..=days {
        if day > 0 {
            engine.tick(items);
        }
        out.write_all(render_day(day, items).as_bytes())
            .context("failed to write day report")?;
    }

    out.flush().context("failed to flush report output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_follows_conjured_flag() {
        let off = registry_for(&SimConfig::default());
        assert_eq!(off.resolve(CONJURED_MANA_CAKE), Category::Normal);

        let on = registry_for(&SimConfig {
            conjured: true,
            ..SimConfig::default()
        });
        assert_eq!(on.resolve(CONJURED_MANA_CAKE), Category::Conjured);
    }

    #[test]
    fn zero_days_prints_only_initial_state() {
        let mut out = Vec::<u8>::new();
        let mut items = vec![Item::new("x", 1, 1)];
        simulate(&InventoryEngine::standard(), &mut items, 0, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "-------- day 0 --------\nname, sellIn, quality\nx, 1, 1\n\n"
        );
        assert_eq!(items[0], Item::new("x", 1, 1));
    }

    #[test]
    fn default_run_prints_three_days_of_the_standard_shop() {
        let mut out = Vec::<u8>::new();
        run(&SimConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("-------- day").count(), 3);
        assert!(text.contains("-------- day 2 --------\nname, sellIn, quality\n+5 Dexterity Vest, 8, 18\n"));
        assert!(text.contains("Backstage passes to a TAFKAL80ETC concert, 3, 50\n"));
    }

    #[test]
    fn missing_items_file_is_an_error() {
        let config = SimConfig {
            items_path: Some("/definitely/not/here/items.json".into()),
            ..SimConfig::default()
        };
        let err = run(&config, &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("failed to read items"));
    }
}
