//! Cell values and value kinds.
//!
//! Every exported cell holds one `Value`. The set of variants is closed so
//! that formatting and parsing can match exhaustively on it.

/// The kind of value a field holds, declared statically per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Text,
    EnumName,
    IntList,
    TextList,
    EnumNameList,
}

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Symbolic name of an enumeration constant.
    EnumName(String),
    IntList(Vec<i64>),
    TextList(Vec<String>),
    EnumNameList(Vec<String>),
}

impl Value {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::EnumName(_) => ValueKind::EnumName,
            Value::IntList(_) => ValueKind::IntList,
            Value::TextList(_) => ValueKind::TextList,
            Value::EnumNameList(_) => ValueKind::EnumNameList,
        }
    }

    /// Wraps an enumeration constant by its symbolic name.
    pub fn enum_name<E: Symbolic>(e: E) -> Value {
        Value::EnumName(e.name().to_string())
    }

    /// Wraps a sequence of enumeration constants by their symbolic names.
    pub fn enum_names<E: Symbolic>(items: &[E]) -> Value {
        Value::EnumNameList(items.iter().map(|e| e.name().to_string()).collect())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Value::IntList(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::TextList(v)
    }
}

/// An enumeration whose constants serialize by symbolic name.
pub trait Symbolic: Copy + Sized + 'static {
    /// Every constant, in declaration order.
    const ALL: &'static [Self];

    /// Returns the symbolic name written to cells.
    fn name(self) -> &'static str;

    /// Looks up a constant by its symbolic name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.name() == name)
    }
}

/// Extraction of a concrete Rust type from a `Value`.
///
/// Returns `None` when the value is of a different kind; lookups built on
/// this never fail loudly.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromValue for Vec<i64> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::IntList(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromValue for Vec<String> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::TextList(v) => Some(v.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Day,
        Dusk,
    }

    impl Symbolic for Light {
        const ALL: &'static [Self] = &[Light::Day, Light::Dusk];

        fn name(self) -> &'static str {
            match self {
                Light::Day => "DAY",
                Light::Dusk => "DUSK",
            }
        }
    }

    #[test]
    fn symbolic_name_lookup() {
        assert_eq!(Light::from_name("DUSK"), Some(Light::Dusk));
        assert_eq!(Light::from_name("dusk"), None);
        assert_eq!(Value::enum_name(Light::Day), Value::EnumName("DAY".into()));
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Value::from(3).kind(), ValueKind::Int);
        assert_eq!(Value::from(0.5).kind(), ValueKind::Float);
        assert_eq!(Value::from("x").kind(), ValueKind::Text);
        assert_eq!(Value::enum_names(&[Light::Day]).kind(), ValueKind::EnumNameList);
    }

    #[test]
    fn from_value_rejects_other_kinds() {
        assert_eq!(i64::from_value(&Value::Int(4)), Some(4));
        assert_eq!(i64::from_value(&Value::Float(4.0)), None);
        assert_eq!(bool::from_value(&Value::Int(1)), None);
        assert_eq!(String::from_value(&Value::EnumName("DAY".into())), None);
        assert_eq!(i32::from_value(&Value::Int(i64::MAX)), None);
    }
}
