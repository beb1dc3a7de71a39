//! Form and query value coercion

use std::collections::HashMap;

/// Scalar element of a dynamically typed sequence ([`FormValue::Seq`]).
///
/// Only the kinds the coercer can format from sequence position are
/// representable; anything else must be passed as [`SeqValue::Unsupported`]
/// and is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum SeqValue {
    /// Plain string element
    Text(String),
    /// Boolean element, formatted as `true`/`false`
    Bool(bool),
    /// Pre-formatted numeric literal, passed through unchanged
    Number(String),
    /// Element with no coercion rule
    Unsupported,
}

/// A value accepted by the form/query coercer.
///
/// Closed over the types the coercer knows how to flatten into URL-encoded
/// strings. [`FormValue::Unsupported`] values produce no output and no
/// error; dropping them silently is a deliberate leniency policy.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    /// String, appended as-is
    Text(String),
    /// Boolean, formatted as `true`/`false`
    Bool(bool),
    /// Integer, formatted as base-10 decimal
    Int(i64),
    /// Float, formatted as the shortest decimal string that round-trips,
    /// never exponent notation
    Float(f64),
    /// Pre-formatted numeric literal, passed through unchanged.
    ///
    /// Bypasses float formatting for callers that already hold the exact
    /// decimal representation they want on the wire.
    Number(String),
    /// Homogeneous string sequence, multi-valued under one key
    TextList(Vec<String>),
    /// Homogeneous boolean sequence
    BoolList(Vec<bool>),
    /// Homogeneous integer sequence
    IntList(Vec<i64>),
    /// Homogeneous float sequence
    FloatList(Vec<f64>),
    /// Sequence of dynamically typed elements.
    ///
    /// The first element's kind selects the formatting rule for the whole
    /// sequence; elements of any other kind are skipped. An empty sequence
    /// produces no entry.
    Seq(Vec<SeqValue>),
    /// A value with no coercion rule; dropped without error
    Unsupported,
}

/// Flatten a key/value mapping into URL-encoded multi-valued form.
///
/// Values follow the per-kind rules documented on [`FormValue`]. Keys whose
/// value yields nothing are omitted from the output entirely. Output key
/// order is unspecified; value order under a key is insertion order.
pub fn to_url_values(data: &HashMap<String, FormValue>) -> HashMap<String, Vec<String>> {
    let mut values: HashMap<String, Vec<String>> = HashMap::new();
    for (key, value) in data {
        let formatted = coerce_value(value);
        if !formatted.is_empty() {
            values.entry(key.clone()).or_default().extend(formatted);
        }
    }
    values
}

fn coerce_value(value: &FormValue) -> Vec<String> {
    match value {
        FormValue::Text(s) => vec![s.clone()],
        FormValue::Bool(b) => vec![b.to_string()],
        FormValue::Int(i) => vec![i.to_string()],
        FormValue::Float(f) => vec![format_float(*f)],
        FormValue::Number(n) => vec![n.clone()],
        FormValue::TextList(items) => items.clone(),
        FormValue::BoolList(items) => items.iter().map(|b| b.to_string()).collect(),
        FormValue::IntList(items) => items.iter().map(|i| i.to_string()).collect(),
        FormValue::FloatList(items) => items.iter().map(|f| format_float(*f)).collect(),
        FormValue::Seq(items) => coerce_seq(items),
        FormValue::Unsupported => Vec::new(),
    }
}

/// The first element picks the rule; elements of any other kind are skipped.
fn coerce_seq(items: &[SeqValue]) -> Vec<String> {
    match items.first() {
        Some(SeqValue::Text(_)) => items
            .iter()
            .filter_map(|item| match item {
                SeqValue::Text(s) => Some(s.clone()),
                _ => None,
            })
            .collect(),
        Some(SeqValue::Bool(_)) => items
            .iter()
            .filter_map(|item| match item {
                SeqValue::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        Some(SeqValue::Number(_)) => items
            .iter()
            .filter_map(|item| match item {
                SeqValue::Number(n) => Some(n.clone()),
                _ => None,
            })
            .collect(),
        Some(SeqValue::Unsupported) | None => Vec::new(),
    }
}

// Display for floats is the shortest representation that round-trips and
// never switches to exponent notation, matching FormatFloat(v, 'f', -1, 64).
fn format_float(value: f64) -> String {
    value.to_string()
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FormValue {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for FormValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<String>> for FormValue {
    fn from(value: Vec<String>) -> Self {
        Self::TextList(value)
    }
}

impl From<Vec<bool>> for FormValue {
    fn from(value: Vec<bool>) -> Self {
        Self::BoolList(value)
    }
}

impl From<Vec<i64>> for FormValue {
    fn from(value: Vec<i64>) -> Self {
        Self::IntList(value)
    }
}

impl From<Vec<f64>> for FormValue {
    fn from(value: Vec<f64>) -> Self {
        Self::FloatList(value)
    }
}

impl From<Vec<SeqValue>> for FormValue {
    fn from(value: Vec<SeqValue>) -> Self {
        Self::Seq(value)
    }
}
