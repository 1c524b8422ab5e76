#![forbid(unsafe_code)]
#![deny(clippy::all)]

pub mod clone;
pub mod error;
mod ops;
#[cfg(feature = "serde")]
mod serde;
mod stdlib;
mod value;

pub use crate::{
    error::{Error, ValueError},
    ops::{Depth, Entries, FlattenStrategy, Keys, Values},
    stdlib::Prototype,
    value::{
        function, Array, FromValue, Function, Number, Object, SharedString,
        Value, ValueType,
    },
};

use crate::{
    clone::{ShallowClone, ValueCloner},
    error::Result,
};
use log::debug;
use std::sync::Arc;

/// How `unshift` inserts multiple items at the front of an array
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UnshiftMode {
    /// Insert all items at once, preserving their argument order
    #[default]
    Batch,
    /// Insert items one at a time, so the last argument ends up first
    EachItem,
}

/// The entrypoint for dynamically invoking array methods by name. A realm
/// holds the method table along with the configuration that decides how
/// methods behave where more than one behavior is reasonable.
///
/// The method table is built once and shared between clones, so cloning a
/// realm to tweak its configuration is cheap.
#[derive(Clone, Debug)]
pub struct Realm {
    prototype: Arc<Prototype>,
    flatten_strategy: FlattenStrategy,
    unshift_mode: UnshiftMode,
    /// Applied to each element stored into the output of `map`, `filter` and
    /// `flatMap`
    cloner: Arc<dyn ValueCloner>,
}

#[cfg(test)]
static_assertions::assert_impl_all!(Realm: Send, Sync);

impl Realm {
    /// Initialize a realm with the default configuration: recursive
    /// flattening, batched `unshift` and shallow cloning
    pub fn new() -> Self {
        Self {
            prototype: Arc::new(stdlib::prototype()),
            flatten_strategy: FlattenStrategy::default(),
            unshift_mode: UnshiftMode::default(),
            cloner: Arc::new(ShallowClone),
        }
    }

    /// Use the given strategy for `flat` and `flatMap`
    pub fn with_flatten_strategy(mut self, strategy: FlattenStrategy) -> Self {
        self.flatten_strategy = strategy;
        self
    }

    /// Use the given insertion mode for `unshift`
    pub fn with_unshift_mode(mut self, mode: UnshiftMode) -> Self {
        self.unshift_mode = mode;
        self
    }

    /// Use the given cloner for elements stored by `map`, `filter` and
    /// `flatMap`
    pub fn with_cloner(mut self, cloner: impl ValueCloner + 'static) -> Self {
        self.cloner = Arc::new(cloner);
        self
    }

    pub fn flatten_strategy(&self) -> FlattenStrategy {
        self.flatten_strategy
    }

    pub fn unshift_mode(&self) -> UnshiftMode {
        self.unshift_mode
    }

    pub fn cloner(&self) -> &dyn ValueCloner {
        self.cloner.as_ref()
    }

    /// Every method that can be invoked on an array
    pub fn prototype(&self) -> &Prototype {
        &self.prototype
    }

    /// Invoke an array method by name.
    ///
    /// ```
    /// use arraykit::{Array, Realm, Value};
    ///
    /// let realm = Realm::new();
    /// let array = Array::from([1, 2, 3]);
    /// let length = realm
    ///     .invoke(&array.clone().into(), "push", &[4.into()])
    ///     .unwrap();
    /// assert_eq!(length, Value::from(4));
    /// assert_eq!(array.len(), 4);
    /// ```
    ///
    /// ## Errors
    ///
    /// Fail without touching the receiver if the method isn't defined, the
    /// receiver is `null`/`undefined` or some other non-array, or a required
    /// callback argument isn't a function. Errors thrown by callbacks
    /// propagate as [Error::Thrown], with any mutations made before the
    /// error left in place.
    pub fn invoke(
        &self,
        receiver: &Value,
        method: &str,
        args: &[Value],
    ) -> Result<Value> {
        let (name, method) =
            self.prototype.get(method).ok_or_else(|| Error::UnknownMethod {
                name: method.to_owned(),
            })?;
        let array = match receiver {
            Value::Array(array) => array,
            Value::Undefined | Value::Null => {
                return Err(Error::InvalidReceiver {
                    method: name,
                    receiver: receiver.type_(),
                })
            }
            _ => {
                return Err(ValueError::Type {
                    expected: ValueType::Array,
                    actual: receiver.type_(),
                }
                .into())
            }
        };
        debug!("Invoking Array.prototype.{name} with {} args", args.len());
        method(self, array, args)
    }

    /// `Array.isArray(value)`
    pub fn is_array(&self, value: &Value) -> bool {
        Array::is_array(value)
    }

    /// `Array.from(source, mapFn, thisArg)`
    pub fn array_from(&self, args: &[Value]) -> Result<Value> {
        stdlib::from(args)
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}
