//! Dynamic values exchanged through the variables map.
//!
//! The variables map is the sparse, UI-facing side channel of extraction:
//! it carries only the fields actually found in the source text, keyed by
//! the [`crate::CriterionField`] string names, plus the `_times` and
//! `_numbers` diagnostic token lists.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which every time-like token is listed, in order of appearance.
pub const TIMES_KEY: &str = "_times";

/// Key under which every distinct raw numeric token is listed, in
/// first-seen order.
pub const NUMBERS_KEY: &str = "_numbers";

/// Sparse map of fields explicitly found in source text.
pub type VariablesMap = BTreeMap<String, FieldValue>;

/// A typed value carried by the variables map or a patch request.
///
/// Serialized untagged, so JSON callers exchange plain literals. Variant
/// order matters for deserialization: integers must be tried before the
/// general number case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean flag.
    Bool(bool),
    /// Non-negative integer, e.g. a ranking cutoff.
    Integer(u32),
    /// Floating-point number.
    Number(f64),
    /// Free text, e.g. an `HH:MM` time.
    Text(String),
    /// Ordered list of text tokens.
    TextList(Vec<String>),
}

impl FieldValue {
    /// Returns the boolean payload, if this is a flag.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric payload as `f64`, widening integers.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(f64::from(*i)),
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_untagged_serialization() {
        let json =
            serde_json::to_string(&FieldValue::Integer(15)).expect("value should serialize");
        assert_eq!(json, "15");

        let json =
            serde_json::to_string(&FieldValue::Text("09:30".to_string())).expect("value should serialize");
        assert_eq!(json, "\"09:30\"");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_integer_deserializes_before_number() {
        let value: FieldValue = serde_json::from_str("20").expect("integer should parse");
        assert_eq!(value, FieldValue::Integer(20));

        let value: FieldValue = serde_json::from_str("0.2").expect("number should parse");
        assert_eq!(value, FieldValue::Number(0.2));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(FieldValue::Bool(true).as_bool(), Some(true));
        assert_eq!(FieldValue::Integer(15).as_f64(), Some(15.0));
        assert_eq!(FieldValue::Number(0.2).as_f64(), Some(0.2));
        assert_eq!(FieldValue::Text("09:30".to_string()).as_text(), Some("09:30"));
        assert_eq!(FieldValue::Bool(true).as_f64(), None);
    }
}
