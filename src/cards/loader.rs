//! Parsing the external card list.
//!
//! The host fetches a JSON document shaped like
//! `[{ "name": "cat", "image": "./img/cat.png" }, ...]`. Text that is not
//! JSON at all is a data source failure. JSON that is not a non-empty
//! array of well-formed records is invalid input.

use serde_json::Value;

use super::definition::CardDefinition;
use crate::error::{GameError, Result};

/// Parse and shape-check a JSON card list.
///
/// Uniqueness of names is checked later by `CardRegistry`.
pub fn parse_definitions(json: &str) -> Result<Vec<CardDefinition>> {
    let value: Value = serde_json::from_str(json)?;

    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(GameError::InvalidInput(format!(
                "expected an array of cards, found {}",
                json_kind(&other)
            )))
        }
    };

    if records.is_empty() {
        return Err(GameError::InvalidInput("card list is empty".to_string()));
    }

    records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_record(index, record))
        .collect()
}

fn parse_record(index: usize, record: &Value) -> Result<CardDefinition> {
    let name = string_field(index, record, "name")?;
    let image = string_field(index, record, "image")?;
    Ok(CardDefinition::new(name, image))
}

fn string_field<'a>(index: usize, record: &'a Value, field: &str) -> Result<&'a str> {
    match record.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.as_str()),
        Some(Value::String(_)) => Err(GameError::InvalidInput(format!(
            "card {index}: `{field}` is blank"
        ))),
        Some(other) => Err(GameError::InvalidInput(format!(
            "card {index}: `{field}` must be a string, found {}",
            json_kind(other)
        ))),
        None => Err(GameError::InvalidInput(format!(
            "card {index}: missing `{field}`"
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
