//! Typed accessors over dotted section paths.

use crate::document::Document;
use crate::value::Value;

/// Conversion from a stored value into a concrete Rust type.
///
/// Numeric targets accept any numeric value: floats truncate toward zero when
/// read as integers, and integers that do not fit the target width yield
/// `None`.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

macro_rules! impl_from_value_integer {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Integer(i) => <$ty>::try_from(*i).ok(),
                        Value::Float(f) if f.is_finite() => {
                            // MIN is -2^(n-1) and exact as f64; MAX is not, so
                            // the upper bound is the exclusive 2^(n-1)
                            let truncated = f.trunc();
                            let min = <$ty>::MIN as f64;
                            if truncated >= min && truncated < -min {
                                Some(truncated as $ty)
                            } else {
                                None
                            }
                        }
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_value_integer!(i8, i16, i32, i64);

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        f64::from_value(value).map(|f| f as f32)
    }
}

impl FromValue for char {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Char(c) => Some(*c),
            Value::String(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

/// Read access to a configuration tree by dotted path.
///
/// Implementors only provide [`PathAccess::value`]; every typed accessor is
/// derived from it, so a host type that layers defaults under its own values
/// gets the same fallback for all of them.
pub trait PathAccess {
    /// Value at `path`, if any
    fn value(&self, path: &str) -> Option<&Value>;

    fn contains(&self, path: &str) -> bool {
        self.value(path).is_some()
    }

    fn get_as<T: FromValue>(&self, path: &str) -> Option<T> {
        self.value(path).and_then(T::from_value)
    }

    /// Elements of the sequence at `path` that convert to `T`.
    ///
    /// Elements of another type are skipped; a missing or non-sequence value
    /// gives an empty list.
    fn get_list_as<T: FromValue>(&self, path: &str) -> Vec<T> {
        self.get_list(path)
            .map(|items| items.iter().filter_map(T::from_value).collect())
            .unwrap_or_default()
    }

    fn get_section(&self, path: &str) -> Option<&Document> {
        self.value(path).and_then(Value::as_section)
    }

    fn get_list(&self, path: &str) -> Option<&[Value]> {
        self.value(path).and_then(Value::as_sequence)
    }

    fn get_bool(&self, path: &str) -> Option<bool> {
        self.get_as(path)
    }

    fn get_byte(&self, path: &str) -> Option<i8> {
        self.get_as(path)
    }

    fn get_short(&self, path: &str) -> Option<i16> {
        self.get_as(path)
    }

    fn get_int(&self, path: &str) -> Option<i32> {
        self.get_as(path)
    }

    fn get_long(&self, path: &str) -> Option<i64> {
        self.get_as(path)
    }

    fn get_float(&self, path: &str) -> Option<f32> {
        self.get_as(path)
    }

    fn get_double(&self, path: &str) -> Option<f64> {
        self.get_as(path)
    }

    fn get_char(&self, path: &str) -> Option<char> {
        self.get_as(path)
    }

    fn get_string(&self, path: &str) -> Option<String> {
        self.get_as(path)
    }

    fn get_bool_list(&self, path: &str) -> Vec<bool> {
        self.get_list_as(path)
    }

    fn get_byte_list(&self, path: &str) -> Vec<i8> {
        self.get_list_as(path)
    }

    fn get_short_list(&self, path: &str) -> Vec<i16> {
        self.get_list_as(path)
    }

    fn get_int_list(&self, path: &str) -> Vec<i32> {
        self.get_list_as(path)
    }

    fn get_long_list(&self, path: &str) -> Vec<i64> {
        self.get_list_as(path)
    }

    fn get_float_list(&self, path: &str) -> Vec<f32> {
        self.get_list_as(path)
    }

    fn get_double_list(&self, path: &str) -> Vec<f64> {
        self.get_list_as(path)
    }

    fn get_char_list(&self, path: &str) -> Vec<char> {
        self.get_list_as(path)
    }

    fn get_string_list(&self, path: &str) -> Vec<String> {
        self.get_list_as(path)
    }
}

impl PathAccess for Document {
    fn value(&self, path: &str) -> Option<&Value> {
        self.get_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.set_path("numbers.int", 42);
        doc.set_path("numbers.big", 300);
        doc.set_path("numbers.float", 2.75);
        doc.set_path("text.word", "hello");
        doc.set_path("text.letter", "x");
        doc.set_path("flags.on", true);
        doc.set_path("lists.mixed", vec![Value::from(1), Value::from("two"), Value::from(3.9)]);
        doc
    }

    #[test]
    fn test_scalar_accessors() {
        let doc = sample();
        assert_eq!(doc.get_int("numbers.int"), Some(42));
        assert_eq!(doc.get_double("numbers.int"), Some(42.0));
        assert_eq!(doc.get_bool("flags.on"), Some(true));
        assert_eq!(doc.get_string("text.word"), Some("hello".to_string()));
        assert_eq!(doc.get_char("text.letter"), Some('x'));
        assert_eq!(doc.get_char("text.word"), None);
    }

    #[test]
    fn test_narrowing_out_of_range_is_none() {
        let doc = sample();
        assert_eq!(doc.get_byte("numbers.big"), None);
        assert_eq!(doc.get_short("numbers.big"), Some(300));
    }

    #[test]
    fn test_float_truncates_to_integer() {
        let doc = sample();
        assert_eq!(doc.get_int("numbers.float"), Some(2));
        assert_eq!(doc.get_long("numbers.float"), Some(2));
    }

    #[test]
    fn test_float_bounds_per_width() {
        let mut doc = Document::new();
        doc.set_path("two_pow_63", 9_223_372_036_854_775_808.0_f64);
        doc.set_path("min_long", i64::MIN as f64);
        doc.set_path("byte_edge", 127.9);
        doc.set_path("byte_over", 128.0);

        assert_eq!(doc.get_long("two_pow_63"), None);
        assert_eq!(doc.get_long("min_long"), Some(i64::MIN));
        assert_eq!(doc.get_byte("byte_edge"), Some(127));
        assert_eq!(doc.get_byte("byte_over"), None);
    }

    #[test]
    fn test_string_accessor_rejects_numbers() {
        let doc = sample();
        assert_eq!(doc.get_string("numbers.int"), None);
        assert_eq!(doc.get_bool("text.word"), None);
    }

    #[test]
    fn test_list_accessors_skip_other_types() {
        let doc = sample();
        assert_eq!(doc.get_int_list("lists.mixed"), vec![1, 3]);
        assert_eq!(doc.get_string_list("lists.mixed"), vec!["two".to_string()]);
        assert!(doc.get_int_list("lists.missing").is_empty());
        assert!(doc.get_int_list("numbers.int").is_empty());
    }

    #[test]
    fn test_get_section() {
        let doc = sample();
        let numbers = doc.get_section("numbers").unwrap();
        assert_eq!(numbers.len(), 3);
        assert!(doc.get_section("numbers.int").is_none());
    }
}
