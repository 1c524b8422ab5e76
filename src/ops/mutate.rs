//! In-place mutation: `push`, `unshift`, `shift`, `pop` and `fill`

use crate::{ops::relative_index, Array, Value};
use log::trace;

impl Array {
    /// `Array.prototype.push`. Append each item in order and return the new
    /// length.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/push
    pub fn push<I, T>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let items = collect_slots(items);
        self.with_inner(|slots| {
            let before = slots.len();
            slots.extend(items);
            trace!("push: {before} -> {} slots", slots.len());
            slots.len()
        })
    }

    /// `Array.prototype.unshift`. Insert all items at the front in a single
    /// batch, preserving their order: unshifting `a, b` onto `[x]` gives
    /// `[a, b, x]`. Return the new length.
    ///
    /// See [Self::unshift_each] for the one-at-a-time alternative.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/unshift
    pub fn unshift<I, T>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let items = collect_slots(items);
        self.with_inner(|slots| {
            let before = slots.len();
            slots.splice(0..0, items);
            trace!("unshift: {before} -> {} slots", slots.len());
            slots.len()
        })
    }

    /// Insert items at the front one at a time, as if `unshift` were called
    /// once per item. Each item lands in front of the previous one, so the
    /// items end up reversed: unshifting `a, b` onto `[x]` gives `[b, a, x]`.
    /// Return the new length.
    pub fn unshift_each<I, T>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let items = collect_slots(items);
        self.with_inner(|slots| {
            let before = slots.len();
            for item in items {
                slots.insert(0, item);
            }
            trace!("unshift_each: {before} -> {} slots", slots.len());
            slots.len()
        })
    }

    /// `Array.prototype.shift`. Remove the first slot and return its value, or
    /// `undefined` if it was a hole or the array is empty.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/shift
    pub fn shift(&self) -> Value {
        self.with_inner(|slots| {
            if slots.is_empty() {
                Value::Undefined
            } else {
                slots.remove(0).unwrap_or_default()
            }
        })
    }

    /// `Array.prototype.pop`. Remove the last slot and return its value, or
    /// `undefined` if the array is empty. A trailing hole is removed like any
    /// other slot and reads as `undefined`; the element before it is left in
    /// place.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/pop
    pub fn pop(&self) -> Value {
        self.with_inner(|slots| slots.pop().flatten().unwrap_or_default())
    }

    /// `Array.prototype.fill`. Overwrite every slot in `[start, end)`,
    /// including holes, with `value`. Bounds are resolved relative to the
    /// length: negative values count back from the end (clamped at 0) and
    /// values past the end clamp to the length. A missing `start` is 0 and a
    /// missing `end` is the length. If `start >= end` nothing changes.
    ///
    /// Return a handle to this array.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/fill
    pub fn fill(
        &self,
        value: impl Into<Value>,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Array {
        let value = value.into();
        self.with_inner(|slots| {
            let len = slots.len();
            let start = start.map_or(0, |start| relative_index(start, len));
            let end = end.map_or(len, |end| relative_index(end, len));
            trace!("fill: [{start}, {end}) of {len} slots");
            if start < end {
                slots[start..end].fill(Some(value));
            }
        });
        self.clone()
    }
}

/// Drain the caller's items before the write lock is taken. The iterator may
/// read from the array being mutated.
fn collect_slots<I, T>(items: I) -> Vec<Option<Value>>
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    items.into_iter().map(|item| Some(item.into())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_push() {
        let array = Array::from([1]);
        assert_eq!(array.push([2, 3]), 3);
        assert_eq!(array.push(Vec::<Value>::new()), 3);
        assert_eq!(array, Array::from([1, 2, 3]));
    }

    /// Batch and one-at-a-time unshift intentionally disagree on order
    #[test]
    fn test_unshift() {
        let batch = Array::from(["x"]);
        assert_eq!(batch.unshift(["a", "b"]), 3);
        assert_eq!(batch, Array::from(["a", "b", "x"]));

        let each = Array::from(["x"]);
        assert_eq!(each.unshift_each(["a", "b"]), 3);
        assert_eq!(each, Array::from(["b", "a", "x"]));

        // With a single item they agree
        let batch = Array::from(["x"]);
        let each = Array::from(["x"]);
        batch.unshift(["a"]);
        each.unshift_each(["a"]);
        assert_eq!(batch, each);
    }

    #[test]
    fn test_unshift_nested_array() {
        // An array item is inserted as a single element, not spread
        let array = Array::from([3]);
        array.unshift([Value::from(Array::from([1, 2]))]);
        assert_eq!(array.len(), 2);
        assert_eq!(array.get(0), Some(Array::from([1, 2]).into()));
    }

    /// Items may be read lazily from the array being mutated
    #[test]
    fn test_insert_own_values() {
        let array = Array::from([1, 2]);
        assert_eq!(array.push(array.values()), 4);
        assert_eq!(array, Array::from([1, 2, 1, 2]));

        let array = Array::from([1, 2]);
        assert_eq!(array.unshift(array.values()), 4);
        assert_eq!(array, Array::from([1, 2, 1, 2]));

        let array = Array::from([1, 2]);
        assert_eq!(array.unshift_each(array.values()), 4);
        assert_eq!(array, Array::from([2, 1, 1, 2]));
    }

    #[test]
    fn test_shift() {
        let array = Array::from_slots([None, Some(2.into())]);
        assert_eq!(array.shift(), Value::Undefined);
        assert_eq!(array.len(), 1);
        assert_eq!(array.shift(), 2.into());
        assert_eq!(array.shift(), Value::Undefined);
        assert!(array.is_empty());
    }

    #[test]
    fn test_pop() {
        let array = Array::from([1, 2]);
        assert_eq!(array.pop(), 2.into());
        assert_eq!(array.pop(), 1.into());
        assert_eq!(array.pop(), Value::Undefined);
        assert!(array.is_empty());
    }

    #[test]
    fn test_pop_trailing_hole() {
        let array = Array::from_slots([Some(1.into()), None]);
        assert_eq!(array.pop(), Value::Undefined);
        assert_eq!(array, Array::from([1]));
    }

    /// Popping and pushing back the popped value restores the array
    #[test_case(&[1]; "single")]
    #[test_case(&[1, 2, 3]; "several")]
    fn test_pop_push_roundtrip(elements: &[i32]) {
        let array = Array::from(elements.to_vec());
        let popped = array.pop();
        array.push([popped]);
        assert_eq!(array, Array::from(elements.to_vec()));
    }

    #[test_case(None, None, &[0, 0, 0, 0, 0]; "whole")]
    #[test_case(Some(-2), Some(5), &[1, 2, 3, 0, 0]; "negative_start")]
    #[test_case(Some(1), Some(-1), &[1, 0, 0, 0, 5]; "negative_end")]
    #[test_case(Some(3), Some(2), &[1, 2, 3, 4, 5]; "start_after_end")]
    #[test_case(Some(-10), Some(2), &[0, 0, 3, 4, 5]; "clamped_start")]
    #[test_case(Some(4), Some(99), &[1, 2, 3, 4, 0]; "clamped_end")]
    #[test_case(Some(0), Some(0), &[1, 2, 3, 4, 5]; "empty_range")]
    fn test_fill(start: Option<i64>, end: Option<i64>, expected: &[i32]) {
        let array = Array::from([1, 2, 3, 4, 5]);
        let filled = array.fill(0, start, end);
        assert!(filled.ptr_eq(&array));
        assert_eq!(array, Array::from(expected.to_vec()));
    }

    #[test]
    fn test_fill_holes() {
        let array = Array::with_holes(3);
        array.fill("x", Some(1), None);
        assert!(array.is_hole(0));
        assert_eq!(array, Array::from_slots([None, Some("x".into()), Some("x".into())]));
    }
}
