//! Evaluation trace types for debugging specification behavior.
//!
//! [`SpecTrace`] mirrors [`Specification`](crate::Specification) but captures
//! evaluation results instead of inputs. Use `evaluate_with_trace()` to see
//! what every condition resolved and why the whole specification did or did
//! not match.
//!
//! # Example
//!
//! ```
//! use patty::{Condition, Specification, SpecTrace};
//! use serde_json::json;
//!
//! let spec = Specification::all([
//!     Condition::path(["a", "b"]),
//!     Condition::value(["z"], "zz"),
//! ]);
//! let trace = spec.evaluate_with_trace(&json!({"a": {"b": 1}, "z": "zzz"}));
//!
//! assert!(!trace.matched());
//! if let SpecTrace::All { children, .. } = &trace {
//!     assert!(children[0].matched());
//!     assert!(!children[1].matched());
//! }
//! ```

/// Trace of a specification evaluation.
///
/// In `All`, every child is evaluated (no short-circuit). The `matched`
/// result is still correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecTrace {
    /// A single condition evaluation.
    Condition {
        /// Whether this condition matched, after negation.
        matched: bool,
        /// The condition type tag (e.g. `"valueOneOf"`).
        kind: String,
        /// The effective path, or `"<none>"` when the condition has none.
        path: String,
        /// The resolved `MatchingData` (Debug format).
        data: String,
        /// Whether negation was applied.
        negated: bool,
    },
    /// AND over a list: every child must match.
    All {
        /// Whether all children matched.
        matched: bool,
        /// Trace of each child (all evaluated, no short-circuit).
        children: Vec<SpecTrace>,
    },
    /// A specification of unusable shape. Never matches.
    Invalid,
}

impl SpecTrace {
    /// Get the overall match result.
    #[must_use]
    pub fn matched(&self) -> bool {
        match self {
            Self::Condition { matched, .. } | Self::All { matched, .. } => *matched,
            Self::Invalid => false,
        }
    }

    /// Number of condition leaves in this trace.
    #[must_use]
    pub fn condition_count(&self) -> usize {
        match self {
            Self::Condition { .. } => 1,
            Self::All { children, .. } => children.iter().map(Self::condition_count).sum(),
            Self::Invalid => 0,
        }
    }
}
