use crate::error::ValueError;
use std::{
    cmp::Ordering,
    f64,
    fmt::{self, Display},
    ops::{Add, Div, Mul, Neg, Rem, Sub},
};

/// A numeric value. Integers are kept exact as long as arithmetic on them
/// doesn't overflow; anything else falls back to a float.
#[derive(Copy, Clone, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Not a Number
    pub const NAN: Self = Self::Float(f64::NAN);
    pub const INFINITY: Self = Self::Float(f64::INFINITY);

    /// Zero and NaN are falsy, everything else is truthy
    pub fn to_bool(self) -> bool {
        match self {
            Number::Int(i) => i != 0,
            Number::Float(f) => f != 0.0 && !f.is_nan(),
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }

    /// Truncate toward zero. NaN becomes 0, infinities are preserved.
    pub fn to_integer(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) if f.is_nan() => 0.0,
            Number::Float(f) => f.trunc(),
        }
    }

    /// Apply a float operation, used when at least one side isn't an int or
    /// the int operation overflowed
    fn float_op(self, rhs: Self, op: impl Fn(f64, f64) -> f64) -> Self {
        op(self.to_f64(), rhs.to_f64()).into()
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(n) if n.is_infinite() => {
                let sign = if n.is_sign_negative() { "-" } else { "" };
                write!(f, "{sign}Infinity")
            }
            Number::Float(n) if n.is_nan() => write!(f, "NaN"),
            // Negative zero prints without its sign
            Number::Float(n) if *n == 0.0 => write!(f, "0"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(l0), Self::Int(r0)) => l0 == r0,
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(l0), Self::Int(r0)) => l0.partial_cmp(r0),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Number::Int(i) => {
                i.checked_neg().map(Number::Int).unwrap_or((-(i as f64)).into())
            }
            Number::Float(f) => (-f).into(),
        }
    }
}

/// Implement an arithmetic operator that stays in integer space when both
/// sides are ints and the checked op succeeds
macro_rules! impl_number_op {
    ($trait:ident, $func:ident, $checked:ident, $op:tt) => {
        impl $trait for Number {
            type Output = Self;

            fn $func(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    (Number::Int(lhs), Number::Int(rhs)) => lhs
                        .$checked(rhs)
                        .map(Number::Int)
                        .unwrap_or_else(|| {
                            self.float_op(Number::Int(rhs), |a, b| a $op b)
                        }),
                    _ => self.float_op(rhs, |a, b| a $op b),
                }
            }
        }
    };
}

impl_number_op!(Add, add, checked_add, +);
impl_number_op!(Sub, sub, checked_sub, -);
impl_number_op!(Mul, mul, checked_mul, *);

impl Div for Number {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            // Only stay in int space if the division is exact
            (Number::Int(lhs), Number::Int(rhs))
                if rhs != 0 && lhs.checked_rem(rhs) == Some(0) =>
            {
                lhs.checked_div(rhs)
                    .map(Number::Int)
                    .unwrap_or_else(|| self.float_op(Number::Int(rhs), |a, b| a / b))
            }
            _ => self.float_op(rhs, |a, b| a / b),
        }
    }
}

impl Rem for Number {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Number::Int(lhs), Number::Int(rhs)) if rhs != 0 => lhs
                .checked_rem(rhs)
                .map(Number::Int)
                .unwrap_or(Number::Int(0)),
            _ => self.float_op(rhs, |a, b| a % b),
        }
    }
}

macro_rules! impl_number_from_int {
    ($($type:ty),*) => {
        $(
            impl From<$type> for Number {
                fn from(value: $type) -> Self {
                    Self::Int(value.into())
                }
            }
        )*
    };
}

impl_number_from_int!(i8, u8, i16, u16, i32, u32, i64);

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        i64::try_from(value)
            .map(Self::Int)
            .unwrap_or(Self::Float(value as f64))
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        number.to_f64()
    }
}

impl TryFrom<Number> for i64 {
    type Error = ValueError;

    fn try_from(number: Number) -> Result<Self, Self::Error> {
        match number {
            Number::Int(i) => Ok(i),
            Number::Float(f)
                if f.fract() == 0.0
                    && f >= i64::MIN as f64
                    && f <= i64::MAX as f64 =>
            {
                Ok(f as i64)
            }
            Number::Float(f) => Err(ValueError::Range {
                number: f,
                target: "i64",
            }),
        }
    }
}

impl TryFrom<Number> for usize {
    type Error = ValueError;

    fn try_from(number: Number) -> Result<Self, Self::Error> {
        let int = i64::try_from(number)?;
        usize::try_from(int).map_err(|_| ValueError::Range {
            number: number.to_f64(),
            target: "usize",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Number::Int(2), Number::Int(3), Number::Int(5); "int")]
    #[test_case(Number::Int(2), Number::Float(0.5), Number::Float(2.5); "mixed")]
    #[test_case(Number::Int(i64::MAX), Number::Int(1), Number::Float(i64::MAX as f64 + 1.0); "overflow")]
    fn test_add(lhs: Number, rhs: Number, expected: Number) {
        assert_eq!(lhs + rhs, expected);
    }

    #[test]
    fn test_div() {
        assert!(matches!(Number::Int(6) / Number::Int(3), Number::Int(2)));
        assert_eq!(Number::Int(1) / Number::Int(2), Number::Float(0.5));
        assert_eq!(Number::Int(1) / Number::Int(0), Number::INFINITY);
    }

    #[test_case(Number::Float(f64::NAN), 0.0; "nan")]
    #[test_case(Number::Float(-2.7), -2.0; "negative")]
    #[test_case(Number::INFINITY, f64::INFINITY; "infinity")]
    fn test_to_integer(number: Number, expected: f64) {
        assert_eq!(number.to_integer(), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Float(3.0).to_string(), "3");
        assert_eq!(Number::Float(-f64::INFINITY).to_string(), "-Infinity");
        assert_eq!(Number::NAN.to_string(), "NaN");
        assert_eq!(Number::Float(-0.0).to_string(), "0");
    }
}
