//! Structural keys for discrete scales.
//!
//! Discrete domains may hold arbitrary serialisable values. Two values map to
//! the same [`CanonicalKey`] when they serialise to the same structure:
//!
//! - object fields are compared regardless of their order;
//! - integral numbers compare equal across integer and float types (`1 == 1.0`);
//! - non-finite floats serialise as `null`.
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use serde::Serialize;
//! use skala::scale::canonicalize;
//!
//! #[derive(Serialize)]
//! struct Fruit {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let mut map = BTreeMap::new();
//! map.insert("name", serde_json::json!("apple"));
//! map.insert("id", serde_json::json!(1.0));
//!
//! assert_eq!(
//!     canonicalize(&Fruit { id: 1, name: "apple" }).unwrap(),
//!     canonicalize(&map).unwrap(),
//! );
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

/// Canonical text form of a serialisable value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialise `key` into its [`CanonicalKey`].
///
/// Fails when `key` cannot be represented as JSON, e.g. a map whose keys are
/// not strings or numbers.
pub fn canonicalize<K: Serialize + ?Sized>(key: &K) -> Result<CanonicalKey, serde_json::Error> {
    let value = serde_json::to_value(key)?;
    let mut out = String::new();
    write_value(&value, &mut out);
    Ok(CanonicalKey(out))
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Number(number) => write_number(number, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (field, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(field, out);
                out.push(':');
                write_value(item, out);
            }
            out.push('}');
        }
        Value::String(text) => write_string(text, out),
        Value::Null | Value::Bool(_) => out.push_str(&value.to_string()),
    }
}

fn write_string(text: &str, out: &mut String) {
    out.push_str(&Value::String(text.to_owned()).to_string());
}

fn write_number(number: &Number, out: &mut String) {
    if number.is_f64() {
        match number.as_f64() {
            // -0.0 and 0.0 are the same key
            Some(float) if float == 0.0 => out.push('0'),
            // Display prints integral floats without a fraction
            Some(float) if float.is_finite() => out.push_str(&float.to_string()),
            _ => out.push_str("null"),
        }
    } else {
        out.push_str(&number.to_string());
    }
}
