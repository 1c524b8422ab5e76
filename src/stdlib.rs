//! Dynamically dispatched array methods. Each method is a native function
//! registered under its conventional camelCase name, taking an untyped
//! receiver and argument list.

mod array;

pub(crate) use array::{from, prototype};

use crate::{
    error::{Error, Result},
    Array, Function, Realm, Value,
};
use indexmap::IndexMap;

/// A native method: the realm it's invoked in, the receiving array, and the
/// untyped arguments
pub(crate) type NativeMethod = fn(&Realm, &Array, &[Value]) -> Result<Value>;

/// A table of methods that can be invoked on a particular type
#[derive(Clone, Debug, Default)]
pub struct Prototype {
    methods: IndexMap<&'static str, NativeMethod>,
}

impl Prototype {
    /// Declare a method. Declaring the same name twice is a bug
    fn declare(&mut self, name: &'static str, method: NativeMethod) {
        if self.methods.insert(name, method).is_some() {
            panic!("Method {name} declared twice");
        }
    }

    /// Look up a method by name, returning its static name along with it
    pub(crate) fn get(&self, name: &str) -> Option<(&'static str, NativeMethod)> {
        self.methods
            .get_key_value(name)
            .map(|(name, method)| (*name, *method))
    }

    /// Names of every declared method, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.keys().copied()
    }
}

/// Get an argument by position. A missing argument reads as `undefined`.
fn arg(args: &[Value], index: usize) -> Value {
    args.get(index).cloned().unwrap_or_default()
}

/// Get every argument from a position onward
fn rest(args: &[Value], index: usize) -> Vec<Value> {
    args.get(index..).unwrap_or_default().to_vec()
}

/// Get a callback argument, failing before any element is visited if it's
/// missing or not callable
fn callback(method: &'static str, args: &[Value], index: usize) -> Result<Function> {
    match arg(args, index) {
        Value::Function(function) => Ok(function),
        other => Err(Error::InvalidCallback {
            method,
            actual: other.type_(),
        }),
    }
}

/// Get an optional relative index argument. `undefined` means "not given";
/// anything else is coerced to an integer.
fn index_arg(args: &[Value], index: usize) -> Option<i64> {
    match arg(args, index) {
        Value::Undefined => None,
        value => Some(crate::ops::saturating_integer(&value)),
    }
}
