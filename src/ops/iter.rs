//! Lazy iterators: `entries`, `values` and `keys`

use crate::{Array, Value};
use std::iter::FusedIterator;

impl Array {
    /// `Array.prototype.entries`: a lazy iterator of `(index, value)` pairs.
    /// The length is captured now; values are read as the iterator advances.
    /// Holes yield `undefined`.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/entries
    pub fn entries(&self) -> Entries {
        Entries(Cursor::new(self))
    }

    /// `Array.prototype.values`. Same traversal as [Self::entries], yielding
    /// only values.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/values
    pub fn values(&self) -> Values {
        Values(Cursor::new(self))
    }

    /// `Array.prototype.keys`. Same traversal as [Self::entries], yielding
    /// only indexes.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/keys
    pub fn keys(&self) -> Keys {
        Keys(Cursor::new(self))
    }
}

/// Position within an array, bounded by the length at creation
#[derive(Clone, Debug)]
struct Cursor {
    array: Array,
    next: usize,
    len: usize,
}

impl Cursor {
    fn new(array: &Array) -> Self {
        Self {
            array: array.clone(),
            next: 0,
            len: array.len(),
        }
    }

    fn advance(&mut self) -> Option<usize> {
        if self.next < self.len {
            self.next += 1;
            Some(self.next - 1)
        } else {
            None
        }
    }

    fn remaining(&self) -> usize {
        self.len - self.next
    }
}

/// Iterator returned by [Array::entries]
#[derive(Clone, Debug)]
pub struct Entries(Cursor);

impl Iterator for Entries {
    type Item = (usize, Value);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.0.advance()?;
        Some((index, self.0.array.get_or_undefined(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.remaining(), Some(self.0.remaining()))
    }
}

impl ExactSizeIterator for Entries {}
impl FusedIterator for Entries {}

/// Iterator returned by [Array::values]
#[derive(Clone, Debug)]
pub struct Values(Cursor);

impl Iterator for Values {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.0.advance()?;
        Some(self.0.array.get_or_undefined(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.remaining(), Some(self.0.remaining()))
    }
}

impl ExactSizeIterator for Values {}
impl FusedIterator for Values {}

/// Iterator returned by [Array::keys]
#[derive(Clone, Debug)]
pub struct Keys(Cursor);

impl Iterator for Keys {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.remaining(), Some(self.0.remaining()))
    }
}

impl ExactSizeIterator for Keys {}
impl FusedIterator for Keys {}
