//! Callable values. Every callback handed to an array method is a [Function]
//! wrapping a native Rust closure.

use crate::{
    error::Error,
    value::{FromValue, SharedString, Value},
};
use std::{
    fmt::{self, Debug, Display},
    sync::Arc,
};

/// The type-erased form of a native closure: receiver context plus positional
/// arguments in, value out
type NativeFn = dyn Fn(&Value, &[Value]) -> Result<Value, Error> + Send + Sync;

/// A callable value. Cloning is cheap and preserves identity.
#[derive(Clone)]
pub struct Function {
    name: Option<SharedString>,
    function: Arc<NativeFn>,
}

impl Function {
    /// Wrap an infallible closure. The closure receives the receiver context
    /// (`this`) and its arguments, converted to static types via [FromArgs].
    /// A missing argument is read as `undefined`.
    ///
    /// ```
    /// use arraykit::{Function, Number, Value};
    ///
    /// let double = Function::new(|_: &Value, n: Number| n + n);
    /// ```
    pub fn new<F, Args, Out>(f: F) -> Self
    where
        F: 'static + Fn(&Value, Args) -> Out + Send + Sync,
        Args: FromArgs,
        Out: Into<Value>,
    {
        Self::try_new(move |this: &Value, args: Args| {
            Ok::<_, Error>(f(this, args))
        })
    }

    /// Wrap a fallible closure. An error returned from the closure aborts
    /// whatever operation is invoking it.
    pub fn try_new<F, Args, Out, Err>(f: F) -> Self
    where
        F: 'static + Fn(&Value, Args) -> Result<Out, Err> + Send + Sync,
        Args: FromArgs,
        Out: Into<Value>,
        Err: Into<Error>,
    {
        // Wrap the lambda with logic to convert input/output/error, and box it
        let function = move |this: &Value, args: &[Value]| -> Result<Value, Error> {
            let args = Args::from_args(args)?;
            let output = f(this, args).map_err(Err::into)?;
            Ok(output.into())
        };
        Self {
            name: None,
            function: Arc::new(function),
        }
    }

    /// Attach a name, used only for display
    pub fn named(mut self, name: impl Into<SharedString>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Call this function with a receiver context and positional arguments
    pub fn call(&self, this: &Value, args: &[Value]) -> Result<Value, Error> {
        (self.function)(this, args)
    }

    /// Are these the same function? Functions have no structural equality.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.function, &other.function)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.name().unwrap_or("(anonymous)"))
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("function", &"...")
            .finish()
    }
}

/// Convert a positional argument list into static types
pub trait FromArgs: Sized {
    fn from_args(args: &[Value]) -> Result<Self, Error>;
}

/// A recursive macro to pull a static number of arguments out of the arg array,
/// converting each one according to its FromValue impl
macro_rules! convert_args {
    // Entrypoint - pass the array of arguments to convert, and a list of the
    // static types of each argument
    ($args:expr, ($($arg_types:ident,)*)) => {
        convert_args!(@step $args, 0usize, (), ($($arg_types,)*))
    };
    // Recursive step - Pop the next arg type off the front of a list, then
    // generate an expression to pull the corresponding arg out of the array
    // and convert it
    (@step
        $args:expr, // Untyped arg array
        $index:expr, // Index of the *next* arg to convert
        ($($acc:expr,)*), // Args that have been converted so far
        // Types of args that have yet to be converted
        ($first:ident, $($rest:ident,)*)
    ) => {
        convert_args!(@step
            $args,
            $index + 1,
            ($($acc,)* get_arg::<$first>($args, $index)?,),
            ($($rest,)*)
        )
    };
    // Base case - all args have been converted
    (@step $args:expr, $_index:expr, ($($acc:expr,)*), ()) => {
        ($($acc,)*)
    };
}

/// Generate an implementation of FromArgs for a fixed number of arguments
macro_rules! impl_from_args {
    ($($arg_types:ident),*) => {
        impl<$($arg_types,)*> FromArgs for ($($arg_types,)*)
            where $($arg_types: FromValue,)*
        {
            fn from_args(args: &[Value]) -> Result<Self, Error> {
                Ok(convert_args!(args, ($($arg_types,)*)))
            }
        }
    };
}

impl_from_args!(T0);
impl_from_args!(T0, T1);
impl_from_args!(T0, T1, T2);
impl_from_args!(T0, T1, T2, T3);
impl_from_args!(T0, T1, T2, T3, T4);

impl FromArgs for () {
    fn from_args(_: &[Value]) -> Result<Self, Error> {
        Ok(())
    }
}

/// A single argument doesn't need a tuple wrapper
impl<T0: FromValue> FromArgs for T0 {
    fn from_args(args: &[Value]) -> Result<Self, Error> {
        get_arg(args, 0)
    }
}

/// Get a particular arg from the array and convert it to a static type
fn get_arg<T: FromValue>(args: &[Value], index: usize) -> Result<T, Error> {
    let value = args.get(index).cloned().unwrap_or_default();
    Ok(T::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Array, Number};

    #[test]
    fn test_convert_args() {
        let f = Function::new(|_: &Value, (a, b, c): (Number, usize, Array)| {
            a + Number::from(b) + Number::from(c.len())
        });
        let output = f
            .call(&Value::Undefined, &[1.into(), 2.into(), Array::from([0, 0]).into()])
            .unwrap();
        assert_eq!(output, 5.into());
    }

    #[test]
    fn test_missing_arg_is_undefined() {
        let f = Function::new(|_: &Value, (a, b): (Value, Value)| {
            matches!((a, b), (Value::Number(_), Value::Undefined))
        });
        assert_eq!(f.call(&Value::Undefined, &[1.into()]).unwrap(), true.into());
    }

    #[test]
    fn test_wrong_arg_type() {
        let f = Function::new(|_: &Value, n: Number| n);
        let error = f.call(&Value::Undefined, &["a".into()]).unwrap_err();
        assert!(matches!(error, Error::Value(_)));
    }

    #[test]
    fn test_identity() {
        let f = Function::new(|_: &Value, ()| ()).named("noop");
        let g = Function::new(|_: &Value, ()| ());
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
        assert_eq!(f.to_string(), "[Function: noop]");
        assert_eq!(g.to_string(), "[Function: (anonymous)]");
    }
}
