//! patty - Declarative predicate matching over nested records
//!
//! Decide whether a JSON-like record satisfies a *specification*: a typed
//! condition, or an AND-list of them, written as plain data.
//!
//! # Architecture
//!
//! - [`Path`]: Where to look: keys and indices resolved by successive descent
//! - [`MatchingData`]: What was found, with an explicit absent marker
//! - [`Condition`]: One typed test (`prop`, `path`, `value`, `valueOneOf`) with optional negation
//! - [`Specification`]: A condition or an AND-list, decoded totally from any shape
//! - [`Matcher`]: A record bound once and checked against many specifications
//!
//! # Key Design Insights
//!
//! 1. **Absent is not null**: a failed path resolution yields [`MatchingData::None`],
//!    which is distinct from a present JSON `null`.
//!
//! 2. **`MatchingData::None` → false**: absent is falsy and deep-equal to nothing, so every
//!    condition kind returns `false` for it before negation.
//!
//! 3. **Total evaluation**: malformed specifications never error or panic; they evaluate
//!    to `false` (or its negation for a negated condition).
//!
//! # Example
//!
//! ```
//! use patty::prelude::*;
//! use serde_json::json;
//!
//! let record = json!({
//!     "a": { "b": { "c": 10 } },
//!     "x": {},
//!     "y": 100,
//!     "z": "zzz"
//! });
//!
//! let matcher = bind(&record);
//!
//! // Specifications are data
//! let spec = Specification::from(json!({ "type": "valueOneOf", "prop": "x", "values": [{}, []] }));
//! assert!(matcher.matches(&spec));
//!
//! // ...or built in code
//! let spec = Specification::all([
//!     Condition::path(["a", "b", "c"]),
//!     Condition::path(["y", "name"]).negated(),
//!     Condition::value(["z"], "zzz"),
//! ]);
//! assert!(matcher.matches(&spec));
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod condition;
mod equality;
mod matcher;
mod matching_data;
mod path;
mod specification;
mod trace;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use condition::{Condition, ConditionKind};
pub use matcher::Matcher;
pub use matching_data::MatchingData;
pub use path::{Path, Segment};
pub use specification::Specification;

// Value semantics
pub use equality::{deep_equal, is_truthy};

// Trace types
pub use trace::SpecTrace;

use serde_json::Value;

/// Bind `record` once and evaluate any number of specifications against it.
///
/// ```
/// use patty::{bind, Specification};
/// use serde_json::json;
///
/// let record = json!({"y": 100});
/// let matcher = bind(&record);
/// assert!(matcher.matches(&Specification::from(json!({"type": "prop", "prop": "y"}))));
/// assert!(matcher.matches(&Specification::from(json!([]))));
/// ```
#[must_use]
pub fn bind(record: &Value) -> Matcher<'_> {
    Matcher::new(record)
}

/// Evaluate `spec` against `record` without binding first.
///
/// ```
/// use patty::{matches, Specification};
/// use serde_json::json;
///
/// let spec = Specification::from(json!({"type": "path", "path": ["x", "y", "z"], "negate": true}));
/// assert!(matches(&spec, &json!({"x": {}})));
/// ```
#[must_use]
pub fn matches(spec: &Specification, record: &Value) -> bool {
    spec.evaluate(record)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use patty::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Entry points
        bind,
        matches,
        // Core types
        Condition,
        ConditionKind,
        Matcher,
        MatchingData,
        Path,
        Segment,
        // Trace types
        SpecTrace,
        Specification,
    };
}
