//! Field deserializers for answers whose JSON type depends on the widget
//! that produced them. Yes/no buttons emit `true`/`false` on some forms and
//! `0`/`1` on others; the scoring rules only care about the meaning.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Number(f64),
}

/// A yes/no answer. Any non-zero number counts as yes.
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.map(|value| match value {
        Loose::Bool(b) => b,
        Loose::Number(n) => n != 0.0,
    }))
}

/// A coded numeric answer. Booleans map to 1/0.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.map(|value| match value {
        Loose::Bool(b) => f64::from(u8::from(b)),
        Loose::Number(n) => n,
    }))
}

/// Numeric reading of an already-parsed JSON value, with the same rules as
/// [`number`]. Numeric strings are accepted since some widgets store their
/// selected option as text.
pub fn value_as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
