//! Matcher: A record bound once, checked against many specifications
//!
//! [`bind`](crate::bind) fixes the record; every call to
//! [`Matcher::matches`] evaluates a specification against it from scratch.

use crate::{SpecTrace, Specification};
use serde_json::Value;

/// A record bound for repeated evaluation.
///
/// Holds a shared borrow of the record, so the record cannot be swapped out
/// or mutated while the matcher is alive. Nothing is cached between calls.
///
/// # Example
///
/// ```
/// use patty::{bind, Condition, Specification};
/// use serde_json::json;
///
/// let record = json!({"state": "get_balance", "slots": {}});
/// let matcher = bind(&record);
///
/// let has_source = Specification::all([
///     Condition::value(["state"], "get_balance"),
///     Condition::path(["slots", "_SOURCE_ACCOUNT_"]),
/// ]);
/// let no_source = Specification::all([
///     Condition::value(["state"], "get_balance"),
///     Condition::path(["slots", "_SOURCE_ACCOUNT_"]).negated(),
/// ]);
///
/// assert!(!matcher.matches(&has_source));
/// assert!(matcher.matches(&no_source));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'r> {
    record: &'r Value,
}

impl<'r> Matcher<'r> {
    /// Bind `record` for evaluation.
    #[must_use]
    pub fn new(record: &'r Value) -> Self {
        Self { record }
    }

    /// The bound record.
    #[must_use]
    pub fn record(&self) -> &'r Value {
        self.record
    }

    /// Evaluate `spec` against the bound record.
    pub fn matches(&self, spec: &Specification) -> bool {
        spec.evaluate(self.record)
    }

    /// Evaluate with full trace for debugging.
    ///
    /// # INV: `trace.matched()` == `matches()` result
    #[must_use]
    pub fn matches_with_trace(&self, spec: &Specification) -> SpecTrace {
        spec.evaluate_with_trace(self.record)
    }
}
