//! Hole-visiting searches: `find`, `findIndex` and `includes`

use crate::{
    error::Result,
    ops::{relative_index, Holes},
    Array, Function, Value,
};
use std::ops::ControlFlow;

impl Array {
    /// `Array.prototype.find`. Holes are visited as `undefined`. The length is
    /// fixed when the call starts: elements pushed by the callback aren't
    /// visited, but changes to slots within the original length are.
    ///
    /// Return `None` if no element matched. The dynamic `find` maps that to
    /// `undefined`.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/find
    pub fn find(
        &self,
        callback: &Function,
        this_arg: &Value,
    ) -> Result<Option<Value>> {
        let found = self.find_entry(callback, this_arg)?;
        Ok(found.map(|(_, element)| element))
    }

    /// `Array.prototype.findIndex`, with the same traversal as [Self::find].
    /// Return `None` if no element matched. The dynamic `findIndex` maps that
    /// to `-1`.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/findIndex
    pub fn find_index(
        &self,
        callback: &Function,
        this_arg: &Value,
    ) -> Result<Option<usize>> {
        let found = self.find_entry(callback, this_arg)?;
        Ok(found.map(|(index, _)| index))
    }

    fn find_entry(
        &self,
        callback: &Function,
        this_arg: &Value,
    ) -> Result<Option<(usize, Value)>> {
        self.visit(0..self.len(), Holes::Visit, |index, element| {
            let matched = callback
                .call(this_arg, &self.callback_args(element, index))?
                .to_bool();
            Ok(if matched {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            })
        })
    }

    /// `Array.prototype.includes`, using strict equality. Holes compare as
    /// `undefined`, and since `NaN` is never strictly equal to itself it is
    /// never found. A negative `from_index` counts back from the end.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/includes
    pub fn includes(&self, value: &Value, from_index: i64) -> bool {
        let len = self.len();
        (relative_index(from_index, len)..len)
            .any(|index| self.get_or_undefined(index).strict_eq(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;
    use test_case::test_case;

    fn greater_than(threshold: i64) -> Function {
        Function::new(move |_: &Value, n: Number| n > Number::from(threshold))
    }

    #[test]
    fn test_find() {
        let array = Array::from([1, 2, 3, 4]);
        let found = array.find(&greater_than(2), &Value::Undefined).unwrap();
        assert_eq!(found, Some(3.into()));
        let index = array
            .find_index(&greater_than(2), &Value::Undefined)
            .unwrap();
        assert_eq!(index, Some(2));
    }

    #[test]
    fn test_find_no_match() {
        let array = Array::from([1, 2, 3]);
        let found = array.find(&greater_than(3), &Value::Undefined).unwrap();
        assert_eq!(found, None);
        let index = array
            .find_index(&greater_than(3), &Value::Undefined)
            .unwrap();
        assert_eq!(index, None);
    }

    #[test]
    fn test_find_visits_holes() {
        let array = Array::from_slots([Some(1.into()), None, Some(3.into())]);
        let is_undefined =
            Function::new(|_: &Value, element: Value| element == Value::Undefined);
        let index = array.find_index(&is_undefined, &Value::Undefined).unwrap();
        assert_eq!(index, Some(1));
        let found = array.find(&is_undefined, &Value::Undefined).unwrap();
        assert_eq!(found, Some(Value::Undefined));
    }

    #[test]
    fn test_find_length_snapshot() {
        let array = Array::from([1, 2]);
        // Append a match on every call, and overwrite the slot after the
        // current one. The overwrite is observed, the appends are not.
        let callback = Function::new(
            |_: &Value, (element, index, array): (Value, usize, Array)| {
                array.push([100]);
                if index == 0 {
                    array.set(1, 50);
                }
                element == Value::from(50) || element == Value::from(100)
            },
        );
        let found = array.find(&callback, &Value::Undefined).unwrap();
        assert_eq!(found, Some(50.into()));

        let array = Array::from([1, 2]);
        let callback = Function::new(
            |_: &Value, (element, _, array): (Value, usize, Array)| {
                array.push([100]);
                element == Value::from(100)
            },
        );
        let found = array.find(&callback, &Value::Undefined).unwrap();
        assert_eq!(found, None);
        assert_eq!(array.len(), 4);
    }

    #[test_case(2.into(), 0, true; "present")]
    #[test_case(5.into(), 0, false; "absent")]
    #[test_case("2".into(), 0, false; "strict")]
    #[test_case(2.into(), 2, false; "before_from_index")]
    #[test_case(3.into(), -1, true; "negative_from_index")]
    #[test_case(1.into(), -10, true; "clamped_from_index")]
    #[test_case(1.into(), 3, false; "from_index_past_end")]
    #[test_case(f64::NAN.into(), 0, false; "nan")]
    fn test_includes(value: Value, from_index: i64, expected: bool) {
        let array = Array::from([Value::from(1), 2.into(), 3.into()]);
        assert_eq!(array.includes(&value, from_index), expected);
    }

    #[test]
    fn test_includes_hole_is_undefined() {
        let array = Array::with_holes(2);
        assert!(array.includes(&Value::Undefined, 0));
        assert!(!array.includes(&Value::Null, 0));
    }

    /// `includes(v)` agrees with `findIndex(x => x === v) !== -1`
    #[test_case(1.into(); "number")]
    #[test_case("a".into(); "string")]
    #[test_case(Value::Undefined; "undefined")]
    #[test_case(Value::Null; "null")]
    fn test_includes_matches_find_index(needle: Value) {
        let array = Array::from_slots([
            Some(1.into()),
            None,
            Some("a".into()),
            Some(Value::Boolean(false)),
        ]);
        let target = needle.clone();
        let strict_eq = Function::new(move |_: &Value, element: Value| {
            element.strict_eq(&target)
        });
        let index = array.find_index(&strict_eq, &Value::Undefined).unwrap();
        assert_eq!(array.includes(&needle, 0), index.is_some());
    }
}
