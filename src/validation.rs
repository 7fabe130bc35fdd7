//! Input rules for recording an item.
//!
//! Every violated rule yields its own message so callers can show them all
//! at once. The embedded web form applies the same rules before posting.

use serde_json::Value;

use crate::constants::limits::MAX_NAME_LENGTH;

pub const NAME_REQUIRED: &str = "Item name is required";
pub const NAME_NOT_TEXT: &str = "Item name must be text";
pub const NAME_TOO_LONG: &str = "Item name must be at most 100 characters";
pub const QUANTITY_REQUIRED: &str = "Quantity is required";
pub const QUANTITY_NOT_POSITIVE: &str = "Quantity must be a positive integer";

/// A name/quantity pair that passed validation. `name` is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInput {
    pub name: String,
    pub quantity: i64,
}

pub fn validate_name(name: &str) -> Result<String, &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(NAME_REQUIRED);
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(NAME_TOO_LONG);
    }
    Ok(trimmed.to_string())
}

pub fn validate_quantity(quantity: i64) -> Result<i64, &'static str> {
    if quantity < 1 {
        return Err(QUANTITY_NOT_POSITIVE);
    }
    Ok(quantity)
}

/// Validates already-typed input, as used by the service layer and the CLI.
pub fn validate_item(name: &str, quantity: i64) -> Result<ItemInput, Vec<String>> {
    let name = validate_name(name);
    let quantity = validate_quantity(quantity);

    match (name, quantity) {
        (Ok(name), Ok(quantity)) => Ok(ItemInput { name, quantity }),
        (name, quantity) => Err([name.err(), quantity.err()]
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect()),
    }
}

fn name_from_json(value: Option<&Value>) -> Result<String, &'static str> {
    match value {
        None | Some(Value::Null) => Err(NAME_REQUIRED),
        Some(Value::String(s)) => validate_name(s),
        Some(_) => Err(NAME_NOT_TEXT),
    }
}

/// JSON integers pass through; strings get exactly one integer parse.
fn quantity_from_json(value: Option<&Value>) -> Result<i64, &'static str> {
    let parsed = match value {
        None | Some(Value::Null) => return Err(QUANTITY_REQUIRED),
        Some(Value::String(s)) if s.trim().is_empty() => return Err(QUANTITY_REQUIRED),
        Some(Value::String(s)) => s.parse::<i64>().ok(),
        Some(Value::Number(n)) => n.as_i64(),
        Some(_) => None,
    };

    parsed
        .ok_or(QUANTITY_NOT_POSITIVE)
        .and_then(validate_quantity)
}

/// Validates raw JSON fields from a request body.
pub fn validate_json_item(
    name: Option<&Value>,
    quantity: Option<&Value>,
) -> Result<ItemInput, Vec<String>> {
    let name = name_from_json(name);
    let quantity = quantity_from_json(quantity);

    match (name, quantity) {
        (Ok(name), Ok(quantity)) => Ok(ItemInput { name, quantity }),
        (name, quantity) => Err([name.err(), quantity.err()]
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect()),
    }
}
