//! JSON import/export module for flashcard decks.
//! Turns pasted or uploaded text into a validated card list, and writes the
//! current deck back out in the same shape.

use crate::models::Card;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Reasons an import payload is rejected. Checked in declaration order.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Please paste some JSON first.")]
    EmptyInput,

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("JSON must be an array")]
    NotArray,

    #[error("Array is empty")]
    EmptyArray,

    /// `index` is 1-based
    #[error("Card {index} is missing \"front\" or \"back\" field")]
    MissingField { index: usize },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses and validates an import payload.
///
/// Rules fail fast in order: non-blank input, well-formed JSON, top-level
/// array, non-empty array, then a truthy `front` and `back` on every element.
pub fn parse_deck(raw: &str) -> Result<Vec<Card>, ImportError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let parsed: Value = serde_json::from_str(input)?;

    let Value::Array(items) = parsed else {
        return Err(ImportError::NotArray);
    };

    if items.is_empty() {
        return Err(ImportError::EmptyArray);
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let front = item.get("front").and_then(truthy_text);
            let back = item.get("back").and_then(truthy_text);
            match (front, back) {
                (Some(front), Some(back)) => Ok(Card { front, back }),
                _ => Err(ImportError::MissingField { index: i + 1 }),
            }
        })
        .collect()
}

/// Text for a truthy field value, `None` for falsy ones
/// (`null`, `false`, `0`, `""`).
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                None
            } else {
                Some(n.to_string())
            }
        }
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Reads an import payload from a file picked by the user.
pub fn read_import_file(path: &Path) -> Result<String, ExportError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Exports the deck to a JSON file at the specified path.
/// The file has the import payload shape, so it can be imported back as is.
pub fn export_deck_to_path(cards: &[Card], path: &Path) -> Result<(), ExportError> {
    let json_string = serde_json::to_string_pretty(cards)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}
