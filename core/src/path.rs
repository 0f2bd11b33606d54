//! `Path`: Locating a value inside a record by successive descent
//!
//! A path is an ordered list of [`Segment`]s. Resolution walks the record one
//! segment at a time and yields [`MatchingData::None`] the moment a step cannot
//! be taken.

use crate::MatchingData;
use serde_json::Value;
use std::fmt;

/// One step of a [`Path`]: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object member name.
    Key(String),
    /// Zero-based array position.
    Index(usize),
}

impl Segment {
    /// Decode a segment from a JSON value.
    ///
    /// Strings become keys, non-negative integers become indices. Anything
    /// else (negative or fractional numbers, booleans, null, structures) is
    /// not a segment.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Key(s.clone())),
            Value::Number(n) => n
                .as_u64()
                .and_then(|i| usize::try_from(i).ok())
                .map(Self::Index),
            _ => None,
        }
    }

    /// Take this step from `current`.
    ///
    /// A numeric-string key also addresses an array element and an index also
    /// addresses an object member named by its decimal form.
    #[must_use]
    pub fn step<'a>(&self, current: &'a Value) -> Option<&'a Value> {
        match (self, current) {
            (Self::Key(key), Value::Object(map)) => map.get(key),
            (Self::Key(key), Value::Array(items)) => array_index(key).and_then(|i| items.get(i)),
            (Self::Index(i), Value::Array(items)) => items.get(*i),
            (Self::Index(i), Value::Object(map)) => map.get(&i.to_string()),
            _ => None,
        }
    }
}

/// Canonical decimal index: digits only, no sign, no leading zero.
fn array_index(key: &str) -> Option<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if canonical {
        key.parse().ok()
    } else {
        None
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{key:?}"),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// An ordered sequence of [`Segment`]s.
///
/// # Example
///
/// ```
/// use patty::{MatchingData, Path};
/// use serde_json::json;
///
/// let record = json!({"a": {"b": [10, 20]}});
///
/// let path = Path::new(["a", "b"]).then(1);
/// assert_eq!(path.resolve(&record), MatchingData::Value(&json!(20)));
///
/// let missing = Path::new(["a", "nope"]);
/// assert!(missing.resolve(&record).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Build a path from anything that yields segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Append one more segment (builder pattern).
    #[must_use]
    pub fn then(mut self, segment: impl Into<Segment>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Decode a path from a JSON array.
    ///
    /// Returns `None` if `value` is not an array or any element is not a
    /// valid [`Segment`].
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let segments = value
            .as_array()?
            .iter()
            .map(Segment::from_value)
            .collect::<Option<Vec<_>>>()?;
        Some(Self { segments })
    }

    /// The segments of this path.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the empty path, which resolves to the record itself.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Resolve against `record` by sequential descent.
    ///
    /// Never panics; any failed step yields [`MatchingData::None`].
    #[must_use]
    pub fn resolve<'a>(&self, record: &'a Value) -> MatchingData<'a> {
        self.segments
            .iter()
            .try_fold(record, |current, segment| segment.step(current))
            .into()
    }
}

impl<S: Into<Segment>, const N: usize> From<[S; N]> for Path {
    fn from(segments: [S; N]) -> Self {
        Self::new(segments)
    }
}

impl<S: Into<Segment>> From<Vec<S>> for Path {
    fn from(segments: Vec<S>) -> Self {
        Self::new(segments)
    }
}

impl<S: Into<Segment>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{segment}")?;
        }
        f.write_str("]")
    }
}
