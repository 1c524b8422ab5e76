use crate::value::Value;
use indexmap::IndexMap;
use std::{
    fmt::{self, Display},
    ops::Deref as _,
    sync::Arc,
};

/// An ordered string-keyed map of values. Unlike [Array](super::Array),
/// objects are copy-on-write: mutating an object that has other handles
/// detaches it from them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object(Arc<IndexMap<String, Value>>);

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value from the object by key, or undefined if not present
    pub fn get(&self, key: &str) -> Value {
        self.0.get(key).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert a key, replacing any existing value while keeping its position
    pub fn insert(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let (key, value) = (key.into(), value.into());
        self.with_inner(|map| {
            map.insert(key, value);
        })
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Do these two handles point to the same map?
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Mutate the map, in place if this is the only handle and on a copy
    /// otherwise
    fn with_inner(mut self, f: impl FnOnce(&mut IndexMap<String, Value>)) -> Self {
        if let Some(map) = Arc::get_mut(&mut self.0) {
            f(map);
            self
        } else {
            let mut map = self.0.deref().clone();
            f(&mut map);
            Self(map.into())
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")?;
        Ok(())
    }
}

impl From<IndexMap<String, Value>> for Object {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self(map.into())
    }
}

impl From<Object> for IndexMap<String, Value> {
    fn from(object: Object) -> Self {
        Arc::unwrap_or_clone(object.0)
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(Arc::new(iter.into_iter().collect()))
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        Arc::unwrap_or_clone(self.0).into_iter()
    }
}
