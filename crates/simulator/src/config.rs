//! Simulator configuration (environment variables + optional day-count argument).

use std::path::PathBuf;

use anyhow::{Context, bail};

pub const DAYS_ENV: &str = "SHELFWISE_DAYS";
pub const ITEMS_ENV: &str = "SHELFWISE_ITEMS";
pub const CONJURED_ENV: &str = "SHELFWISE_CONJURED";

pub const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of days to simulate after the initial (day 0) report.
    pub days: u32,
    /// JSON file with the initial items; the built-in shop is used when unset.
    pub items_path: Option<PathBuf>,
    /// Register the conjured category for `Conjured Mana Cake`.
    pub conjured: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            items_path: None,
            conjured: false,
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// Unparseable values are logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(DAYS_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(days) => config.days = days,
                Err(_) => {
                    tracing::warn!(value = %raw, "{DAYS_ENV} is not a day count; using {DEFAULT_DAYS}")
                }
            }
        }

        config.items_path = lookup(ITEMS_ENV)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        if let Some(raw) = lookup(CONJURED_ENV) {
            config.conjured = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                _ => {
                    tracing::warn!(value = %raw, "{CONJURED_ENV} is not a boolean; leaving conjured items disabled");
                    false
                }
            };
        }

        config
    }

    /// Apply command-line arguments: an optional positional day count.
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut args = args.into_iter();

        if let Some(raw) = args.next() {
            self.days = raw
                .parse()
                .with_context(|| format!("day count must be a non-negative integer, got {raw:?}"))?;
        }
        if let Some(extra) = args.next() {
            bail!("unexpected argument {extra:?}; usage: shelfwise-sim [days]");
        }

        Ok(self)
    }
}
