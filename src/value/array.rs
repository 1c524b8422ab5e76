use crate::value::Value;
use parking_lot::RwLock;
use std::{
    fmt::{self, Display},
    sync::Arc,
};

/// A shared, growable sequence of slots. Each slot either holds a value or is
/// a hole (an index within bounds that was never assigned, or was deleted).
///
/// Arrays have reference semantics: cloning an `Array` gives another handle to
/// the same storage, so a mutation through one handle is visible through all
/// of them. This is what lets a callback mutate the array it's iterating.
/// The storage lock is only held for the duration of a single read or write,
/// never across a callback invocation.
#[derive(Clone, Debug, Default)]
pub struct Array(Arc<RwLock<Vec<Option<Value>>>>);

impl Array {
    /// Create an empty array
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an array of `len` holes
    pub fn with_holes(len: usize) -> Self {
        Self::from_slots(std::iter::repeat_n(None, len))
    }

    /// Create an array from slots, where `None` is a hole
    pub fn from_slots(slots: impl IntoIterator<Item = Option<Value>>) -> Self {
        Self(Arc::new(RwLock::new(slots.into_iter().collect())))
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Get the value at an index. Return `None` if the slot is a hole or out
    /// of bounds.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.read().get(index).cloned().flatten()
    }

    /// Get the value at an index, reading holes and out-of-bounds indexes as
    /// `undefined`
    pub fn get_or_undefined(&self, index: usize) -> Value {
        self.get(index).unwrap_or_default()
    }

    /// Is the slot at this index a hole? Out-of-bounds indexes are not holes.
    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.0.read().get(index), Some(None))
    }

    /// Assign a value to an index. If the index is past the end, the array is
    /// grown and every new slot before it is a hole.
    pub fn set(&self, index: usize, value: impl Into<Value>) {
        let value = value.into();
        self.with_inner(|slots| {
            if index >= slots.len() {
                slots.resize(index + 1, None);
            }
            slots[index] = Some(value);
        })
    }

    /// Turn the slot at an index into a hole, without changing the length
    pub fn delete(&self, index: usize) {
        self.with_inner(|slots| {
            if let Some(slot) = slots.get_mut(index) {
                *slot = None;
            }
        })
    }

    /// Copy out every slot
    pub fn slots(&self) -> Vec<Option<Value>> {
        self.0.read().clone()
    }

    /// Copy out every value, reading holes as `undefined`
    pub fn to_vec(&self) -> Vec<Value> {
        self.0
            .read()
            .iter()
            .map(|slot| slot.clone().unwrap_or_default())
            .collect()
    }

    /// Do these two handles point to the same storage?
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared storage, used to track identity while cloning
    pub(crate) fn id(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }

    /// Run a mutation against the slots under the write lock. The closure must
    /// not call back into user code.
    pub(crate) fn with_inner<T>(
        &self,
        f: impl FnOnce(&mut Vec<Option<Value>>) -> T,
    ) -> T {
        f(&mut self.0.write())
    }
}

impl PartialEq for Array {
    /// Structural equality: same length, holes in the same positions, and
    /// equal values everywhere else. Compares snapshots, so no lock is held
    /// while nested arrays are compared.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.slots() == other.slots()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Array {
    fn from(value: Vec<T>) -> Self {
        Self::from_slots(value.into_iter().map(|element| Some(element.into())))
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Array {
    fn from(value: [T; N]) -> Self {
        Self::from_slots(value.into_iter().map(|element| Some(element.into())))
    }
}

impl From<Array> for Vec<Value> {
    fn from(array: Array) -> Self {
        array.to_vec()
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(element) => write!(f, "{element}")?,
                None => write!(f, "<empty>")?,
            }
        }
        write!(f, "]")?;
        Ok(())
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self::from_slots(iter.into_iter().map(Some))
    }
}

impl FromIterator<Option<Value>> for Array {
    fn from_iter<T: IntoIterator<Item = Option<Value>>>(iter: T) -> Self {
        Self::from_slots(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_past_end() {
        let array = Array::from([1]);
        array.set(3, 4);
        assert_eq!(array.len(), 4);
        assert!(array.is_hole(1));
        assert!(array.is_hole(2));
        assert!(!array.is_hole(4));
        assert_eq!(array.get(3), Some(4.into()));
    }

    #[test]
    fn test_shared_storage() {
        let array = Array::from([1, 2]);
        let alias = array.clone();
        alias.delete(0);
        assert!(array.is_hole(0));
        assert_eq!(array.get_or_undefined(0), Value::Undefined);
        assert!(array.ptr_eq(&alias));
        assert!(!array.ptr_eq(&Array::from([Value::Undefined, 2.into()])));
    }

    #[test]
    fn test_eq_nested() {
        let array = Array::from([1]);
        let outer = Array::from([array.clone()]);
        array.push([0]);
        assert_eq!(outer, Array::from([Array::from([1, 0])]));
        assert_eq!(array, array.clone());
        assert_ne!(array, Array::from([1]));
    }

    #[test]
    fn test_display() {
        let array =
            Array::from_slots([Some(1.into()), None, Some("a".into())]);
        assert_eq!(array.to_string(), "[1, <empty>, a]");
    }
}
