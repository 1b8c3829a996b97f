//! Validation of raw item records coming from a host.
//!
//! Hosts usually hold items as loosely typed JSON (`{name, sellIn, quality}`). Records
//! are checked here and rejected as a whole on the first malformed entry, so a bad
//! collection never reaches the engine half-aged.

use serde_json::{Map, Value as JsonValue};

use shelfwise_core::{DomainError, DomainResult};

use crate::item::Item;

/// Parse a JSON document holding an array of item records.
pub fn items_from_json(input: &str) -> DomainResult<Vec<Item>> {
    let value: JsonValue = serde_json::from_str(input)
        .map_err(|e| DomainError::validation(format!("malformed item json: {e}")))?;
    parse_items(&value)
}

/// Convert an array of item records into [`Item`]s.
///
/// Each entry must be an object with a non-empty string `name` and integer `sellIn`
/// and `quality` fields that fit in an `i32`. Extra fields are ignored.
pub fn parse_items(value: &JsonValue) -> DomainResult<Vec<Item>> {
    let entries = value
        .as_array()
        .ok_or_else(|| DomainError::validation("items must be an array"))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_item(index, entry))
        .collect()
}

fn parse_item(index: usize, entry: &JsonValue) -> DomainResult<Item> {
    let record = match entry {
        JsonValue::Object(record) => record,
        JsonValue::Null => {
            return Err(DomainError::validation(format!("items[{index}] is null")));
        }
        _ => {
            return Err(DomainError::validation(format!(
                "items[{index}] must be an object"
            )));
        }
    };

    let name = match record.get("name") {
        Some(JsonValue::String(name)) if !name.trim().is_empty() => name.clone(),
        Some(JsonValue::String(_)) => {
            return Err(DomainError::validation(format!(
                "items[{index}].name cannot be empty"
            )));
        }
        Some(_) => {
            return Err(DomainError::validation(format!(
                "items[{index}].name must be a string"
            )));
        }
        None => {
            return Err(DomainError::validation(format!(
                "items[{index}].name is missing"
            )));
        }
    };

    let sell_in = integer_field(index, record, "sellIn")?;
    let quality = integer_field(index, record, "quality")?;

    Ok(Item::new(name, sell_in, quality))
}

fn integer_field(index: usize, record: &Map<String, JsonValue>, field: &str) -> DomainResult<i32> {
    let value = record
        .get(field)
        .ok_or_else(|| DomainError::validation(format!("items[{index}].{field} is missing")))?;

    // Floats (even integral ones like 3.0) and strings are rejected, not coerced.
    let JsonValue::Number(number) = value else {
        return Err(DomainError::validation(format!(
            "items[{index}].{field} must be an integer"
        )));
    };
    let wide = number.as_i64().ok_or_else(|| {
        if number.is_u64() {
            DomainError::validation(format!("items[{index}].{field} is out of range"))
        } else {
            DomainError::validation(format!("items[{index}].{field} must be an integer"))
        }
    })?;

    i32::try_from(wide)
        .map_err(|_| DomainError::validation(format!("items[{index}].{field} is out of range")))
}
