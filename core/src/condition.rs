//! Condition: One typed test against a record
//!
//! A [`Condition`] pairs a target [`Path`] with a [`ConditionKind`] and an
//! optional negation. Evaluation resolves the path, hands the resulting
//! [`MatchingData`] to the kind, then applies `negate`.

use crate::{MatchingData, Path, Segment, SpecTrace};
use serde_json::{Map, Value};

/// What a [`Condition`] checks about the data at its target.
///
/// Closed over the known condition types. Anything else decodes to
/// [`ConditionKind::Unknown`], which never matches.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionKind {
    /// `"prop"`: the value at the target is truthy.
    Prop,

    /// `"path"`: the value at the target is truthy.
    Path,

    /// `"value"`: the value at the target is deep-equal to this value.
    Value(Value),

    /// `"valueOneOf"`: the value at the target is deep-equal to at least one
    /// of these values. Empty never matches.
    ValueOneOf(Vec<Value>),

    /// An unrecognised type tag, or a known tag missing its operand.
    /// Always `false` before negation.
    Unknown(String),
}

impl ConditionKind {
    /// The type tag this kind is written as.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Prop => "prop",
            Self::Path => "path",
            Self::Value(_) => "value",
            Self::ValueOneOf(_) => "valueOneOf",
            Self::Unknown(tag) => tag.as_str(),
        }
    }

    /// Check resolved data against this kind, ignoring negation.
    ///
    /// # INV: None → false
    ///
    /// Absent data is falsy and equal to nothing, so every kind returns
    /// `false` for [`MatchingData::None`].
    #[must_use]
    pub fn matches(&self, data: &MatchingData<'_>) -> bool {
        match self {
            Self::Prop | Self::Path => data.is_truthy(),
            Self::Value(expected) => data.deep_equals(expected),
            Self::ValueOneOf(candidates) => candidates.iter().any(|v| data.deep_equals(v)),
            Self::Unknown(_) => false,
        }
    }
}

/// A single typed test with an optional negation.
///
/// # Example
///
/// ```
/// use patty::Condition;
/// use serde_json::json;
///
/// let record = json!({"a": {"b": {"c": 10}}, "z": "zzz"});
///
/// assert!(Condition::path(["a", "b", "c"]).evaluate(&record));
/// assert!(Condition::value(["z"], "zzz").evaluate(&record));
/// assert!(Condition::value_one_of(["a", "b", "c"], [9, 10]).evaluate(&record));
/// assert!(Condition::prop("name").negated().evaluate(&record));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    kind: ConditionKind,
    target: Option<Path>,
    negate: bool,
}

impl Condition {
    /// Create a condition from its parts.
    ///
    /// A `None` target resolves to [`MatchingData::None`] for every record.
    #[must_use]
    pub fn new(kind: ConditionKind, target: Option<Path>) -> Self {
        Self {
            kind,
            target,
            negate: false,
        }
    }

    /// `prop` condition: the top-level member `key` is truthy.
    #[must_use]
    pub fn prop(key: impl Into<Segment>) -> Self {
        Self::new(ConditionKind::Prop, Some(Path::new([key])))
    }

    /// `path` condition: the value at `path` is truthy.
    #[must_use]
    pub fn path(path: impl Into<Path>) -> Self {
        Self::new(ConditionKind::Path, Some(path.into()))
    }

    /// `value` condition: the value at `path` deep-equals `expected`.
    #[must_use]
    pub fn value(path: impl Into<Path>, expected: impl Into<Value>) -> Self {
        Self::new(ConditionKind::Value(expected.into()), Some(path.into()))
    }

    /// `valueOneOf` condition: the value at `path` deep-equals any candidate.
    #[must_use]
    pub fn value_one_of<I, V>(path: impl Into<Path>, candidates: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let candidates = candidates.into_iter().map(Into::into).collect();
        Self::new(ConditionKind::ValueOneOf(candidates), Some(path.into()))
    }

    /// Invert the result of this condition (builder pattern).
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Decode a condition from a JSON object.
    ///
    /// Total: malformed fields degrade instead of failing.
    ///
    /// - `type` selects the [`ConditionKind`]; unknown or missing → `Unknown`.
    /// - `prop` conditions target `[prop]` and ignore `path`.
    /// - Every other kind uses `path` when it is truthy, else `[prop]`. A
    ///   malformed `path` (or `prop`) leaves the condition without a target.
    /// - `negate` is reduced by truthiness; missing → `false`.
    #[must_use]
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let kind = decode_kind(object);
        let target = decode_target(&kind, object);
        Self {
            kind,
            target,
            negate: object.get("negate").is_some_and(crate::is_truthy),
        }
    }

    /// The kind of test.
    #[must_use]
    pub fn kind(&self) -> &ConditionKind {
        &self.kind
    }

    /// The effective path, if the condition has one.
    #[must_use]
    pub fn target(&self) -> Option<&Path> {
        self.target.as_ref()
    }

    /// Whether the result is inverted.
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negate
    }

    /// Resolve this condition's target against `record`.
    #[must_use]
    pub fn resolve<'a>(&self, record: &'a Value) -> MatchingData<'a> {
        self.target
            .as_ref()
            .map_or(MatchingData::None, |path| path.resolve(record))
    }

    /// Evaluate this condition against `record`.
    ///
    /// Negation is applied after the kind-specific check, so for every
    /// condition `c.negated().evaluate(r) == !c.evaluate(r)`.
    pub fn evaluate(&self, record: &Value) -> bool {
        let data = self.resolve(record);
        let matched = self.kind.matches(&data) != self.negate;
        tracing::trace!(
            kind = self.kind.tag(),
            path = %self.describe_target(),
            negate = self.negate,
            matched,
            "evaluated condition"
        );
        matched
    }

    /// Evaluate with full trace for debugging.
    #[must_use]
    pub fn evaluate_with_trace(&self, record: &Value) -> SpecTrace {
        let data = self.resolve(record);
        SpecTrace::Condition {
            matched: self.kind.matches(&data) != self.negate,
            kind: self.kind.tag().to_string(),
            path: self.describe_target(),
            data: format!("{data:?}"),
            negated: self.negate,
        }
    }

    fn describe_target(&self) -> String {
        self.target
            .as_ref()
            .map_or_else(|| "<none>".to_string(), ToString::to_string)
    }
}

fn decode_kind(object: &Map<String, Value>) -> ConditionKind {
    let Some(tag) = object.get("type").and_then(Value::as_str) else {
        tracing::debug!("condition has no string `type`");
        return ConditionKind::Unknown(String::new());
    };

    match tag {
        "prop" => ConditionKind::Prop,
        "path" => ConditionKind::Path,
        "value" => match object.get("value") {
            Some(expected) => ConditionKind::Value(expected.clone()),
            None => {
                tracing::debug!("`value` condition has no `value` field");
                ConditionKind::Unknown(tag.to_string())
            }
        },
        "valueOneOf" => match object.get("values") {
            Some(Value::Array(candidates)) => ConditionKind::ValueOneOf(candidates.clone()),
            _ => {
                tracing::debug!("`valueOneOf` condition has no `values` array");
                ConditionKind::Unknown(tag.to_string())
            }
        },
        other => {
            tracing::debug!(tag = other, "unknown condition type");
            ConditionKind::Unknown(other.to_string())
        }
    }
}

fn decode_target(kind: &ConditionKind, object: &Map<String, Value>) -> Option<Path> {
    if !matches!(kind, ConditionKind::Prop) {
        // A falsy `path` ("", false, 0, null) counts as missing.
        if let Some(path) = object.get("path").filter(|p| crate::is_truthy(p)) {
            let decoded = Path::from_value(path);
            if decoded.is_none() {
                tracing::debug!(path = %path, "malformed condition path");
            }
            return decoded;
        }
    }

    let prop = object.get("prop").filter(|p| !p.is_null())?;
    let segment = Segment::from_value(prop);
    if segment.is_none() {
        tracing::debug!(prop = %prop, "malformed condition prop");
    }
    segment.map(|s| Path::new([s]))
}
