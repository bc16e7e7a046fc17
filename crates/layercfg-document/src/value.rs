//! Configuration values and their merge families.

use crate::document::Document;

/// A single configuration value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicit null (`key:` or `key: null`).
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Char(char),
    String(String),
    Sequence(Vec<Value>),
    Section(Document),
}

/// Coarse type classification used to decide merge compatibility.
///
/// Integers and floats share the `Numeric` family, so a user integer is
/// compatible with a default float and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Section,
    Boolean,
    Numeric,
    Character,
    String,
    Sequence,
}

impl Family {
    /// Classify a value. `Null` has no family.
    ///
    /// Arms are listed in the fixed priority order
    /// section, boolean, numeric, character, string, sequence.
    pub fn of(value: &Value) -> Option<Family> {
        match value {
            Value::Section(_) => Some(Family::Section),
            Value::Bool(_) => Some(Family::Boolean),
            Value::Integer(_) | Value::Float(_) => Some(Family::Numeric),
            Value::Char(_) => Some(Family::Character),
            Value::String(_) => Some(Family::String),
            Value::Sequence(_) => Some(Family::Sequence),
            Value::Null => None,
        }
    }

    /// Whether two values resolve to the same family. Null is never compatible.
    pub fn same(a: &Value, b: &Value) -> bool {
        match (Family::of(a), Family::of(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_section(&self) -> bool {
        matches!(self, Value::Section(_))
    }

    pub fn family(&self) -> Option<Family> {
        Family::of(self)
    }

    pub fn as_section(&self) -> Option<&Document> {
        match self {
            Value::Section(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_section_mut(&mut self) -> Option<&mut Document> {
        match self {
            Value::Section(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to a JSON value, keeping section key order.
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Char(c) => serde_json::Value::String(c.to_string()),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Section(doc) => doc.to_json(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Section(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}
