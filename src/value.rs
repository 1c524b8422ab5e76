//! Dynamic values stored in and passed around by arrays

mod array;
pub mod function;
mod macros;
mod number;
mod object;
mod string;

pub use array::Array;
pub use function::Function;
pub use number::Number;
pub use object::Object;
pub use string::SharedString;

use crate::{
    error::ValueError,
    value::macros::{ensure_type, impl_value_conversions, impl_value_from},
};
use indexmap::IndexMap;
use std::fmt::{self, Display};

/// Any value that can live in an array slot or be passed to a callback
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The "no value" marker. Holes read as this when visited, and callbacks
    /// invoked without a receiver context get this as `this`.
    ///
    /// This value serializes as the unit value: `()`
    #[default]
    Undefined,
    /// An explicit empty value, distinct from `undefined`
    ///
    /// This value serializes as `None`
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// A float or integer
    Number(Number),
    /// A string of UTF-8 characters
    String(SharedString),
    /// An ordered list of slots, possibly with holes
    Array(Array),
    /// An ordered key-value mapping
    Object(Object),
    /// A native callable
    Function(Function),
}

#[cfg(test)]
static_assertions::assert_impl_all!(Value: Send, Sync);

impl Value {
    /// Coerce this value to a boolean. Truthy values return true, falsy values
    /// return false.
    pub fn to_bool(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Number(number) => number.to_bool(),
            Self::String(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Function(_) => true,
        }
    }

    /// Coerce this value to a number.
    /// | Type        | Value   | Coercion         |
    /// | ----------- | ------- | ---------------- |
    /// | `undefined` |         | `NaN`            |
    /// | `null`      |         | `0`              |
    /// | `boolean`   | `false` | `0`              |
    /// | `boolean`   | `true`  | `1`              |
    /// | `number`    |         | Itself           |
    /// | `string`    | `""`    | `0`              |
    /// | `string`    |         | Parsed, or `NaN` |
    /// | `array`     |         | `NaN`            |
    /// | `object`    |         | `NaN`            |
    /// | `function`  |         | `NaN`            |
    pub fn to_number(&self) -> Number {
        match self {
            Self::Null | Self::Boolean(false) => 0.into(),
            Self::Boolean(true) => 1.into(),
            Self::Number(number) => *number,
            Self::String(s) => parse_number(s),
            Self::Undefined
            | Self::Array(_)
            | Self::Object(_)
            | Self::Function(_) => Number::NAN,
        }
    }

    /// Coerce this value to an integer, truncating toward zero. `NaN` (and
    /// anything that coerces to it) becomes `0`; infinities are preserved.
    pub fn to_integer(&self) -> f64 {
        self.to_number().to_integer()
    }

    /// Strict equality (`===`). Numbers compare numerically, so `NaN` never
    /// equals anything. Arrays, objects and functions compare by identity.
    pub fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => {
                true
            }
            (Self::Boolean(b1), Self::Boolean(b2)) => b1 == b2,
            (Self::Number(n1), Self::Number(n2)) => n1 == n2,
            (Self::String(s1), Self::String(s2)) => s1 == s2,
            (Self::Array(a1), Self::Array(a2)) => a1.ptr_eq(a2),
            (Self::Object(o1), Self::Object(o2)) => o1.ptr_eq(o2),
            (Self::Function(f1), Self::Function(f2)) => f1.ptr_eq(f2),
            _ => false,
        }
    }

    /// Is this `null` or `undefined`?
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// If this value is an array, get the inner array. Otherwise return a type
    /// error.
    pub fn try_into_array(self) -> Result<Array, ValueError> {
        Ok(ensure_type!(self, Array))
    }

    /// If this value is a function, get the inner function. Otherwise return a
    /// type error.
    pub fn try_into_function(self) -> Result<Function, ValueError> {
        Ok(ensure_type!(self, Function))
    }

    /// Get the type of this value
    pub fn type_(&self) -> ValueType {
        match self {
            Self::Undefined => ValueType::Undefined,
            Self::Null => ValueType::Null,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Number(_) => ValueType::Number,
            Self::String(_) => ValueType::String,
            Self::Array(_) => ValueType::Array,
            Self::Object(_) => ValueType::Object,
            Self::Function(_) => ValueType::Function,
        }
    }

    /// Convert this value into an arbitrary type, using the type's [FromValue]
    /// implementation
    pub fn into_typed<T: FromValue>(self) -> Result<T, ValueError> {
        T::from_value(self)
    }
}

/// Parse a string the way numeric coercion does: surrounding whitespace is
/// ignored, an empty string is zero, and anything unparseable is `NaN`
fn parse_number(s: &str) -> Number {
    let s = s.trim();
    match s {
        "" => 0.into(),
        "Infinity" | "+Infinity" => Number::INFINITY,
        "-Infinity" => (-f64::INFINITY).into(),
        _ => s
            .parse::<i64>()
            .map(Number::Int)
            .or_else(|_| s.parse::<f64>().map(Number::Float))
            // Rust accepts "inf" and "nan", which aren't numeric literals here
            .ok()
            .filter(|_| s.bytes().any(|b| b.is_ascii_digit()))
            .unwrap_or(Number::NAN),
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::String(string) => write!(f, "{string}"),
            Self::Array(array) => write!(f, "{array}"),
            Self::Object(object) => write!(f, "{object}"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Undefined
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` maps to `undefined`
    fn from(value: Option<T>) -> Self {
        value.map(T::into).unwrap_or_default()
    }
}

// Two-way conversions: `From<T> for Value` and `FromValue for T`
impl_value_conversions!(bool, Boolean);
impl_value_conversions!(Number, Number);
impl_value_conversions!(f64, Number);
impl_value_conversions!(i64, Number, from_value: fallible);
impl_value_conversions!(usize, Number, from_value: fallible);
impl_value_conversions!(String, String);
impl_value_conversions!(SharedString, String);
impl_value_conversions!(Array, Array);
impl_value_conversions!(Object, Object);
impl_value_conversions!(Function, Function);

// One-way conversions: `From<T> for Value`
impl_value_from!(i32, Number);
impl_value_from!(u32, Number);
impl_value_from!(f32, Number);
impl_value_from!(&str, String);
impl_value_from!(char, String);
impl_value_from!(Vec<Value>, Array);
impl_value_from!(IndexMap<String, Value>, Object);

/// Possible types for a value
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueType {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Boolean => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
            Self::Function => write!(f, "function"),
        }
    }
}

/// Trait for converting values from [Value] into static types
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    /// `null` and `undefined` map to `None`
    fn from_value(value: Value) -> Result<Self, ValueError> {
        if value.is_nullish() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Value::Undefined, false; "undefined")]
    #[test_case(Value::Null, false; "null")]
    #[test_case(0.into(), false; "zero")]
    #[test_case(f64::NAN.into(), false; "nan")]
    #[test_case("".into(), false; "empty_string")]
    #[test_case("0".into(), true; "zero_string")]
    #[test_case(Array::new().into(), true; "empty_array")]
    fn test_to_bool(value: Value, expected: bool) {
        assert_eq!(value.to_bool(), expected);
    }

    #[test_case(Value::Undefined, 0.0; "undefined")]
    #[test_case(Value::Null, 0.0; "null")]
    #[test_case(true.into(), 1.0; "true")]
    #[test_case(" 2 ".into(), 2.0; "padded_string")]
    #[test_case("-3.9".into(), -3.0; "float_string")]
    #[test_case("abc".into(), 0.0; "garbage_string")]
    #[test_case("inf".into(), 0.0; "rust_only_literal")]
    #[test_case("-Infinity".into(), -f64::INFINITY; "negative_infinity")]
    #[test_case(Array::new().into(), 0.0; "array")]
    fn test_to_integer(value: Value, expected: f64) {
        assert_eq!(value.to_integer(), expected);
    }

    #[test]
    fn test_strict_eq() {
        let array = Array::from([1]);
        assert!(Value::from(1).strict_eq(&1.0.into()));
        assert!(!Value::from(f64::NAN).strict_eq(&f64::NAN.into()));
        assert!(!Value::from(1).strict_eq(&"1".into()));
        assert!(Value::Undefined.strict_eq(&Value::Undefined));
        assert!(!Value::Undefined.strict_eq(&Value::Null));
        assert!(Value::from(array.clone()).strict_eq(&array.clone().into()));
        // Structurally equal but not the same array
        assert!(!Value::from(array).strict_eq(&Array::from([1]).into()));
    }

    #[test]
    fn test_into_typed() {
        assert_eq!(Value::from(3).into_typed::<usize>().unwrap(), 3);
        assert!(Value::from(-3).into_typed::<usize>().is_err());
        assert_eq!(Value::Null.into_typed::<Option<bool>>().unwrap(), None);
        assert!(matches!(
            Value::from("a").into_typed::<Array>(),
            Err(ValueError::Type {
                expected: ValueType::Array,
                actual: ValueType::String
            })
        ));
    }
}
