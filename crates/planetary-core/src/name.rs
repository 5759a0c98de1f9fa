//! Planet name normalization.
//!
//! Names are the natural uniqueness key, so every path that touches one
//! (creation, lookup, deletion) funnels through the same normalization:
//! trim surrounding spaces, uppercase the first character, lowercase the
//! rest. The function is pure and idempotent.

use crate::ports::CoreError;

/// Normalize a raw planet name.
///
/// Returns `CoreError::Validation` when the name is empty after trimming.
pub fn normalize_name(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim_matches(' ');
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return Err(CoreError::Validation(
            "planet name must not be empty".to_string(),
        ));
    };

    let mut name = String::with_capacity(trimmed.len());
    name.extend(first.to_uppercase());
    name.push_str(&chars.as_str().to_lowercase());
    Ok(name)
}
