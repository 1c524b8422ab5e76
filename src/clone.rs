//! Pluggable cloning of values stored into new arrays by `map` and `filter`

use crate::{Array, Object, Value};
use std::{collections::HashMap, fmt::Debug};

/// Strategy for copying a value into a newly built array
pub trait ValueCloner: Debug + Send + Sync {
    fn clone_value(&self, value: &Value) -> Value;
}

/// Copy the handle only. Arrays in the output share storage with the input.
#[derive(Copy, Clone, Debug, Default)]
pub struct ShallowClone;

impl ValueCloner for ShallowClone {
    fn clone_value(&self, value: &Value) -> Value {
        value.clone()
    }
}

/// Recursively copy arrays and objects so the output shares no array storage
/// with the input. Aliasing within the value is preserved: an array reachable
/// along two paths is copied once, and cycles are reproduced in the copy.
#[derive(Copy, Clone, Debug, Default)]
pub struct DeepClone;

impl ValueCloner for DeepClone {
    fn clone_value(&self, value: &Value) -> Value {
        deep_clone(value, &mut HashMap::new())
    }
}

/// `copies` maps the identity of each source array to its copy
fn deep_clone(value: &Value, copies: &mut HashMap<usize, Array>) -> Value {
    match value {
        Value::Array(array) => {
            if let Some(copy) = copies.get(&array.id()) {
                return copy.clone().into();
            }
            // Register the (empty) copy before descending so cycles resolve
            let copy = Array::new();
            copies.insert(array.id(), copy.clone());
            let slots: Vec<_> = array
                .slots()
                .iter()
                .map(|slot| {
                    slot.as_ref().map(|element| deep_clone(element, copies))
                })
                .collect();
            copy.with_inner(|inner| *inner = slots);
            copy.into()
        }
        Value::Object(object) => object
            .iter()
            .map(|(key, value)| (key.to_owned(), deep_clone(value, copies)))
            .collect::<Object>()
            .into(),
        _ => value.clone(),
    }
}
