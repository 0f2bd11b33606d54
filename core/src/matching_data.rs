//! `MatchingData`: The result of resolving a [`Path`](crate::Path) against a record
//!
//! Path resolution never fails loudly. A missing key, an index past the end, or
//! a step into a scalar all produce [`MatchingData::None`], which is distinct
//! from a present JSON `null`.

use serde_json::Value;

/// Data found (or not found) at a path inside a record.
///
/// # Variants
///
/// - `None`: Nothing at that location (the absent marker)
/// - `Value`: A borrowed value from the record, possibly `null`
///
/// # INV: None → false
///
/// Every condition that receives `None` produces `false` before negation:
/// absent is falsy and is never deep-equal to any value.
///
/// # Example
///
/// ```
/// use patty::MatchingData;
/// use serde_json::{json, Value};
///
/// let null = Value::Null;
/// assert!(MatchingData::None.is_none());
/// assert!(!MatchingData::Value(&null).is_none());
/// assert!(!MatchingData::Value(&null).is_truthy());
///
/// let n = json!(3);
/// assert!(MatchingData::Value(&n).is_truthy());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MatchingData<'a> {
    /// Resolution failed somewhere along the path.
    #[default]
    None,

    /// Resolution succeeded; the value lives in the record.
    Value(&'a Value),
}

impl<'a> MatchingData<'a> {
    /// Returns `true` if this is the absent marker.
    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the resolved value, if any.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        match *self {
            Self::Value(v) => Some(v),
            Self::None => Option::None,
        }
    }

    /// Reduce to a boolean with the usual truthy/falsy coercion.
    ///
    /// Absent is falsy; see [`is_truthy`](crate::is_truthy) for values.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        self.value().is_some_and(crate::is_truthy)
    }

    /// Structural equality against an expected value.
    ///
    /// Absent never equals anything, not even `null`.
    #[must_use]
    pub fn deep_equals(&self, expected: &Value) -> bool {
        self.value().is_some_and(|v| crate::deep_equal(v, expected))
    }

    /// Returns a string describing the type of the resolved data.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Value(Value::Null) => "null",
            Self::Value(Value::Bool(_)) => "bool",
            Self::Value(Value::Number(_)) => "number",
            Self::Value(Value::String(_)) => "string",
            Self::Value(Value::Array(_)) => "array",
            Self::Value(Value::Object(_)) => "object",
        }
    }
}

impl<'a> From<Option<&'a Value>> for MatchingData<'a> {
    fn from(opt: Option<&'a Value>) -> Self {
        opt.map_or(Self::None, Self::Value)
    }
}
