//! Truthiness and structural equality over `serde_json::Value`.

use serde_json::{Number, Value};

/// Boolean coercion of a present value.
///
/// `null`, `false`, zero and the empty string are falsy. Everything else is
/// truthy, including empty arrays and empty objects.
///
/// ```
/// use patty::is_truthy;
/// use serde_json::json;
///
/// assert!(!is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!("")));
/// assert!(is_truthy(&json!({})));
/// assert!(is_truthy(&json!([])));
/// ```
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => number_is_truthy(n),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn number_is_truthy(n: &Number) -> bool {
    if let Some(i) = n.as_i64() {
        i != 0
    } else if let Some(u) = n.as_u64() {
        u != 0
    } else {
        n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan())
    }
}

/// Recursive structural equality.
///
/// Objects compare key-for-key regardless of member order, arrays
/// element-for-element. Numbers compare by numeric value, so `10` equals
/// `10.0`. Values of different kinds are never equal.
///
/// ```
/// use patty::deep_equal;
/// use serde_json::json;
///
/// assert!(deep_equal(&json!({"a": [1, {"b": null}]}), &json!({"a": [1.0, {"b": null}]})));
/// assert!(!deep_equal(&json!(["10"]), &json!(10)));
/// ```
#[must_use]
pub fn deep_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    // Mixed integer/float or out-of-i64 range: compare as f64.
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
