//! Specification: A condition, or an AND-list of specifications
//!
//! Specifications are plain data. They are usually decoded from JSON (or any
//! serde format) and the decoding is total: every shape maps to a
//! specification, and shapes that make no sense evaluate to `false`.

use crate::{Condition, SpecTrace};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// What a record is checked against.
///
/// # Variants
///
/// - `Condition`: One typed test
/// - `All`: Every entry must match (vacuously true when empty)
/// - `Invalid`: Neither an object nor a list; never matches
///
/// # Example
///
/// ```
/// use patty::Specification;
/// use serde_json::json;
///
/// let spec = Specification::from(&json!([
///     { "type": "path", "path": ["a", "b", "c"] },
///     { "type": "value", "prop": "y", "value": 100 },
/// ]));
///
/// assert!(spec.evaluate(&json!({"a": {"b": {"c": 10}}, "y": 100})));
/// assert!(!spec.evaluate(&json!({})));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Specification {
    /// A single condition.
    Condition(Condition),

    /// All entries must match (logical AND).
    /// Short-circuits on the first `false`.
    All(Vec<Specification>),

    /// A shape that is neither an object nor a list.
    Invalid,
}

impl Specification {
    /// AND-list of anything convertible into a specification.
    pub fn all<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Specification>,
    {
        Self::All(entries.into_iter().map(Into::into).collect())
    }

    /// Decode a specification from a JSON value.
    ///
    /// Arrays become [`All`](Self::All), objects become
    /// [`Condition`](Self::Condition), everything else (including `null`)
    /// becomes [`Invalid`](Self::Invalid). Never fails.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(entries) => Self::All(entries.iter().map(Self::from_value).collect()),
            Value::Object(object) => Self::Condition(Condition::from_object(object)),
            other => {
                tracing::debug!(shape = %other, "specification is neither an object nor a list");
                Self::Invalid
            }
        }
    }

    /// Evaluate this specification against `record`.
    ///
    /// # Safety Consideration
    ///
    /// Nested lists are evaluated recursively, so stack use grows with
    /// [`depth()`](Self::depth). Specifications decoded by `serde_json` are
    /// bounded by its recursion limit; bound hand-built ones yourself.
    pub fn evaluate(&self, record: &Value) -> bool {
        match self {
            Self::Condition(condition) => condition.evaluate(record),
            Self::All(entries) => entries.iter().all(|entry| entry.evaluate(record)),
            Self::Invalid => false,
        }
    }

    /// Evaluate with full trace for debugging.
    ///
    /// Unlike [`evaluate()`](Self::evaluate), this does NOT short-circuit
    /// `All`: every entry is evaluated and traced.
    /// The `matched` result is still correct.
    #[must_use]
    pub fn evaluate_with_trace(&self, record: &Value) -> SpecTrace {
        match self {
            Self::Condition(condition) => condition.evaluate_with_trace(record),
            Self::All(entries) => {
                let children: Vec<SpecTrace> = entries
                    .iter()
                    .map(|entry| entry.evaluate_with_trace(record))
                    .collect();
                let matched = children.iter().all(SpecTrace::matched);
                SpecTrace::All { matched, children }
            }
            Self::Invalid => SpecTrace::Invalid,
        }
    }

    /// Returns `true` if this is a single condition.
    #[must_use]
    pub fn is_condition(&self) -> bool {
        matches!(self, Self::Condition(_))
    }

    /// Returns `true` if this is an AND-list.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All(_))
    }

    /// Returns `true` if this specification can never match.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Nesting depth: a condition is 1, each enclosing list adds 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Condition(_) | Self::Invalid => 1,
            Self::All(entries) => 1 + entries.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}

impl From<Condition> for Specification {
    fn from(condition: Condition) -> Self {
        Self::Condition(condition)
    }
}

impl From<&Value> for Specification {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Value> for Specification {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl FromIterator<Condition> for Specification {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        Self::all(iter)
    }
}

/// Decodes through [`serde_json::Value`], so only the underlying format can
/// fail; the specification shape itself never does.
impl<'de> Deserialize<'de> for Specification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
