//! Conversions between arrays and other values: `join`, `concat`,
//! `Array.isArray` and `Array.from`

use crate::{error::Result, Array, Function, Value};

impl Array {
    /// `Array.prototype.join`. `undefined`, `null` and holes become empty
    /// strings, and nested arrays are joined with `,`.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/join
    pub fn join(&self, separator: &str) -> String {
        self.slots()
            .iter()
            .map(|slot| match slot {
                None | Some(Value::Undefined | Value::Null) => String::new(),
                Some(Value::Array(inner)) => inner.join(","),
                Some(element) => element.to_string(),
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// `Array.prototype.concat`. Build a new array from this array's slots
    /// followed by each item. Array items are spread one level (keeping their
    /// holes); anything else is appended as a single element.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/concat
    pub fn concat(&self, items: impl IntoIterator<Item = Value>) -> Array {
        let mut slots = self.slots();
        for item in items {
            match item {
                Value::Array(array) => slots.extend(array.slots()),
                item => slots.push(Some(item)),
            }
        }
        Array::from_slots(slots)
    }

    /// `Array.isArray`
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/isArray
    pub fn is_array(value: &Value) -> bool {
        matches!(value, Value::Array(_))
    }

    /// `Array.from`. An array source is copied with holes read as `undefined`,
    /// a string is split into characters, and any other value produces an
    /// empty array. If given, `map_fn` is called with `(element, index)` for
    /// each element and its output is stored instead.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/from
    pub fn from_source(
        source: &Value,
        map_fn: Option<&Function>,
        this_arg: &Value,
    ) -> Result<Array> {
        let elements: Vec<Value> = match source {
            Value::Array(array) => array.to_vec(),
            Value::String(string) => string.chars().map(Value::from).collect(),
            _ => Vec::new(),
        };
        match map_fn {
            Some(map_fn) => elements
                .into_iter()
                .enumerate()
                .map(|(index, element)| {
                    map_fn.call(this_arg, &[element, index.into()])
                })
                .collect(),
            None => Ok(elements.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Number, Object};

    #[test]
    fn test_join() {
        let array = Array::from_slots([
            Some(1.into()),
            None,
            Some(Value::Null),
            Some(Array::from([2, 3]).into()),
            Some("a".into()),
            Some(2.5.into()),
        ]);
        assert_eq!(array.join(","), "1,,,2,3,a,2.5");
        assert_eq!(array.join(" - "), "1 -  -  - 2,3 - a - 2.5");
        assert_eq!(Array::new().join(","), "");
        assert_eq!(Array::from([-0.0, 0.5]).join(","), "0,0.5");
    }

    #[test]
    fn test_concat() {
        let array = Array::from([1]);
        let other = Array::from_slots([Some(2.into()), None]);
        let nested = Array::from([Value::from(Array::from([3]))]);
        let concatenated =
            array.concat([other.into(), nested.into(), 4.into()]);
        assert_eq!(
            concatenated,
            Array::from_slots([
                Some(1.into()),
                Some(2.into()),
                None,
                Some(Array::from([3]).into()),
                Some(4.into()),
            ])
        );
        // Receiver is untouched
        assert_eq!(array, Array::from([1]));
    }

    #[test]
    fn test_is_array() {
        assert!(Array::is_array(&Array::new().into()));
        assert!(!Array::is_array(&Object::new().into()));
        assert!(!Array::is_array(&Value::Undefined));
    }

    #[test]
    fn test_from_source() {
        let sparse = Array::from_slots([Some(1.into()), None]);
        let copy =
            Array::from_source(&sparse.clone().into(), None, &Value::Undefined)
                .unwrap();
        assert_eq!(copy, Array::from([Value::from(1), Value::Undefined]));
        assert!(!copy.ptr_eq(&sparse));

        let chars =
            Array::from_source(&"hé".into(), None, &Value::Undefined).unwrap();
        assert_eq!(chars, Array::from(["h", "é"]));

        let empty =
            Array::from_source(&5.into(), None, &Value::Undefined).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_source_map_fn() {
        let add_index = Function::new(|_: &Value, (n, index): (Number, usize)| {
            n + Number::from(index)
        });
        let mapped = Array::from_source(
            &Array::from([10, 10, 10]).into(),
            Some(&add_index),
            &Value::Undefined,
        )
        .unwrap();
        assert_eq!(mapped, Array::from([10, 11, 12]));
    }
}
