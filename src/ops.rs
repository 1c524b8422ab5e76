//! Typed implementations of the array methods. Each submodule adds an
//! `impl Array` block for one family of operations.

mod convert;
mod flatten;
mod iter;
mod mutate;
mod search;
mod traverse;

pub use flatten::{Depth, FlattenStrategy};
pub use iter::{Entries, Keys, Values};

use crate::{error::Result, Array, Value};
use std::ops::ControlFlow;

/// How a traversal treats holes
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Holes {
    /// Don't invoke the visitor for holes at all
    Skip,
    /// Invoke the visitor with `undefined` in place of the hole
    Visit,
}

impl Array {
    /// Visit slots in the given order. The caller snapshots the length by
    /// building the index iterator up front; each slot is re-read right before
    /// it's visited, so changes made by earlier visits are observed. An index
    /// that has fallen off the end since the snapshot reads as a hole.
    ///
    /// Return the index and element that the visitor broke on, if any.
    fn visit(
        &self,
        indexes: impl Iterator<Item = usize>,
        holes: Holes,
        mut visitor: impl FnMut(usize, Value) -> Result<ControlFlow<()>>,
    ) -> Result<Option<(usize, Value)>> {
        for index in indexes {
            let element = match (self.get(index), holes) {
                (Some(element), _) => element,
                (None, Holes::Visit) => Value::Undefined,
                (None, Holes::Skip) => continue,
            };
            if visitor(index, element.clone())?.is_break() {
                return Ok(Some((index, element)));
            }
        }
        Ok(None)
    }

    /// Build the `(element, index, array)` argument list passed to traversal
    /// callbacks
    fn callback_args(&self, element: Value, index: usize) -> [Value; 3] {
        [element, index.into(), self.clone().into()]
    }
}

/// Resolve an index that may be relative to the end of the array. Negative
/// values count back from `len` and clamp at 0; values past the end clamp to
/// `len`.
fn relative_index(index: i64, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs().try_into().unwrap_or(usize::MAX))
    } else {
        usize::try_from(index).map_or(len, |index| index.min(len))
    }
}

/// Convert a coerced integer (see [Value::to_integer]) to an `i64`,
/// saturating infinities
pub(crate) fn saturating_integer(value: &Value) -> i64 {
    // Float-to-int casts saturate, and NaN has already been mapped to 0
    value.to_integer() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 5, 0; "zero")]
    #[test_case(3, 5, 3; "in_bounds")]
    #[test_case(9, 5, 5; "past_end")]
    #[test_case(-2, 5, 3; "negative")]
    #[test_case(-9, 5, 0; "negative_past_start")]
    #[test_case(i64::MIN, 5, 0; "min")]
    fn test_relative_index(index: i64, len: usize, expected: usize) {
        assert_eq!(relative_index(index, len), expected);
    }

    #[test]
    fn test_saturating_integer() {
        assert_eq!(saturating_integer(&f64::INFINITY.into()), i64::MAX);
        assert_eq!(saturating_integer(&(-f64::INFINITY).into()), i64::MIN);
        assert_eq!(saturating_integer(&"x".into()), 0);
        assert_eq!(saturating_integer(&2.9.into()), 2);
    }
}
