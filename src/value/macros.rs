//! Macros for implementing conversion traits on various types

/// Implement `From<T>` for `Value`, where `T` is convertible to a particular
/// `Value` variant.
macro_rules! impl_value_from {
    ($type:ty, $variant:ident) => {
        impl From<$type> for $crate::Value {
            fn from(value: $type) -> Self {
                Self::$variant(value.into())
            }
        }
    };
}

/// Narrow a value to a particular variant, or return a type error from the
/// enclosing function
macro_rules! ensure_type {
    ($value:expr, $variant:ident) => {
        match $value {
            $crate::Value::$variant(value) => value,
            value => {
                return Err($crate::error::ValueError::Type {
                    expected: $crate::ValueType::$variant,
                    actual: value.type_(),
                });
            }
        }
    };
}

/// Implement `FromValue` for a type `T`, where `T` is convertible from a
/// particular variant's inner type. `infallible` uses `From`, `fallible` uses
/// `TryFrom`. Either way the conversion fails if the value has the wrong type.
macro_rules! impl_from_value {
    ($type:ty, $variant:ident, infallible) => {
        impl $crate::value::FromValue for $type {
            fn from_value(
                value: $crate::Value,
            ) -> Result<Self, $crate::error::ValueError> {
                let value =
                    $crate::value::macros::ensure_type!(value, $variant);
                Ok(value.into())
            }
        }
    };
    ($type:ty, $variant:ident, fallible) => {
        impl $crate::value::FromValue for $type {
            fn from_value(
                value: $crate::Value,
            ) -> Result<Self, $crate::error::ValueError> {
                let value =
                    $crate::value::macros::ensure_type!(value, $variant);
                value.try_into()
            }
        }
    };
}

/// Implement both directions of conversion between a type and a variant:
/// `From<T> for Value` and `FromValue for T`
macro_rules! impl_value_conversions {
    ($type:ty, $variant:ident) => {
        $crate::value::macros::impl_value_from!($type, $variant);
        $crate::value::macros::impl_from_value!($type, $variant, infallible);
    };
    ($type:ty, $variant:ident, from_value: fallible) => {
        $crate::value::macros::impl_value_from!($type, $variant);
        $crate::value::macros::impl_from_value!($type, $variant, fallible);
    };
}

pub(crate) use ensure_type;
pub(crate) use impl_from_value;
pub(crate) use impl_value_conversions;
pub(crate) use impl_value_from;
