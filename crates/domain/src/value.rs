//! Structural equality for option payloads
//!
//! Option objects are routinely rebuilt (from default-value literals, from
//! storage, from a fresh render) so selection state is matched by shape, never
//! by identity.

use serde_json::Value;

/// Deep structural equality between two form values.
///
/// - Different JSON kinds are never equal.
/// - `null` equals only `null`.
/// - Numbers compare by numeric value, so `1` and `1.0` are equal.
/// - Arrays must match element-wise, in order.
/// - Objects must have the same key count and equal values per key; key order
///   is irrelevant.
pub fn is_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                return x == y;
            }
            if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                return x == y;
            }
            match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            }
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| is_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(key, l)| y.get(key).is_some_and(|r| is_equal(l, r)))
        }
        _ => false,
    }
}

/// True iff some element of `list` deep-equals `obj`.
pub fn contains_object(list: &[Value], obj: &Value) -> bool {
    list.iter().any(|item| is_equal(item, obj))
}
