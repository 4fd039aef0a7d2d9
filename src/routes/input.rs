// SPDX-License-Identifier: MIT

//! Request input validation helpers.
//!
//! Presence checks use truthiness: an absent field, an empty string, and a
//! numeric zero are all treated as missing. Zero durations and zero calories
//! are therefore rejected — preserved compatibility behavior, see DESIGN.md.

use serde::Deserialize;

use crate::error::{AppError, Result};

/// Require a non-empty text field.
pub fn require_text(value: Option<&str>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(missing(name)),
    }
}

/// Require a present, non-zero number.
pub fn require_number(value: Option<f64>, name: &str) -> Result<f64> {
    match value {
        Some(v) if v != 0.0 => Ok(v),
        _ => Err(missing(name)),
    }
}

/// Require a present, non-zero integer amount, coercing text input.
pub fn require_amount(value: Option<&NumberOrText>, name: &str) -> Result<i64> {
    match value.and_then(NumberOrText::as_i64) {
        Some(v) if v != 0 => Ok(v),
        _ => Err(missing(name)),
    }
}

fn missing(name: &str) -> AppError {
    AppError::Validation(format!("{} is required", name))
}

/// A numeric field that callers may send as a JSON number or a string.
///
/// Workout amounts are coerced to integers before storage; unparseable text
/// coerces to nothing and fails the presence check.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberOrText {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NumberOrText::Int(v) => Some(*v),
            NumberOrText::Float(v) => Some(*v as i64),
            NumberOrText::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_empty() {
        assert!(require_text(Some("run"), "type").is_ok());
        assert!(require_text(Some(""), "type").is_err());
        assert!(require_text(Some("   "), "type").is_err());
        assert!(require_text(None, "type").is_err());
    }

    #[test]
    fn test_require_amount_rejects_zero() {
        let thirty = NumberOrText::Int(30);
        let zero = NumberOrText::Int(0);
        assert_eq!(require_amount(Some(&thirty), "duration").unwrap(), 30);
        assert!(require_amount(Some(&zero), "duration").is_err());
        assert!(require_amount(None, "duration").is_err());
    }

    #[test]
    fn test_amount_coerces_text() {
        let text = NumberOrText::Text("300".to_string());
        assert_eq!(require_amount(Some(&text), "calories").unwrap(), 300);

        let junk = NumberOrText::Text("lots".to_string());
        assert!(require_amount(Some(&junk), "calories").is_err());
    }

    #[test]
    fn test_require_number_rejects_zero() {
        assert!(require_number(Some(72.5), "weight").is_ok());
        assert!(require_number(Some(0.0), "weight").is_err());
        assert!(require_number(None, "weight").is_err());
    }
}
