//! Coercion of the vision model's free-text reply into a dish list.
//!
//! The model is instructed to return a bare JSON array, but in practice the
//! array arrives wrapped in prose or code fences. Parsing is two attempts:
//! first the balanced `[...]` slice found by bracket matching, then the
//! whole reply verbatim. Everything brittle about model-output handling is
//! isolated here so orchestration logic never touches reply text directly.

use crate::error::OrchestrateError;
use crate::types::ExtractedDish;

/// Parse the extraction reply into an ordered dish list.
///
/// Pure and idempotent: the same text always yields the same dishes. An
/// empty array is a valid result (no dishes found on the menu).
pub fn parse_dish_list(text: &str) -> Result<Vec<ExtractedDish>, OrchestrateError> {
    if let Some(slice) = balanced_array_slice(text) {
        if let Ok(dishes) = serde_json::from_str::<Vec<ExtractedDish>>(slice) {
            return Ok(dishes);
        }
    }

    serde_json::from_str::<Vec<ExtractedDish>>(text.trim()).map_err(|e| {
        OrchestrateError::ExtractionParse {
            message: format!("reply did not contain a JSON dish array: {e}"),
        }
    })
}

/// Find the first balanced `[...]` substring of `text`.
///
/// Tracks JSON string literals and escapes so brackets inside dish names
/// (e.g. `"Pasta [house special]"`) don't end the slice early. Returns
/// `None` when no opening bracket exists or the array never closes.
fn balanced_array_slice(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let bytes = text.as_bytes();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'[' if !in_string => depth += 1,
            b']' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
