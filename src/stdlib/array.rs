//! The `Array` prototype and the `Array.from` static

use crate::{
    error::{Error, Result},
    ops::Depth,
    stdlib::{arg, callback, index_arg, rest, Prototype},
    Array, Realm, UnshiftMode, Value,
};

/// Define all prototype functions for the `Array` type
pub fn prototype() -> Prototype {
    let mut prototype = Prototype::default();
    // Traversal
    prototype.declare("forEach", for_each);
    prototype.declare("map", map);
    prototype.declare("filter", filter);
    prototype.declare("reduce", reduce);
    prototype.declare("reduceRight", reduce_right);
    prototype.declare("every", every);
    prototype.declare("some", some);
    // Search
    prototype.declare("find", find);
    prototype.declare("findIndex", find_index);
    prototype.declare("includes", includes);
    // Mutation
    prototype.declare("push", push);
    prototype.declare("unshift", unshift);
    prototype.declare("shift", shift);
    prototype.declare("pop", pop);
    prototype.declare("fill", fill);
    // Flattening
    prototype.declare("flat", flat);
    prototype.declare("flatMap", flat_map);
    // Conversion
    prototype.declare("concat", concat);
    prototype.declare("join", join);
    prototype.declare("toString", to_string);
    prototype
}

/// `Array.prototype.forEach(callback, thisArg)`
fn for_each(_: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let callback = callback("forEach", args, 0)?;
    this.for_each(&callback, &arg(args, 1))?;
    Ok(Value::Undefined)
}

/// `Array.prototype.map(callback, thisArg)`
fn map(realm: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let callback = callback("map", args, 0)?;
    let mapped = this.map_with(&callback, &arg(args, 1), realm.cloner())?;
    Ok(mapped.into())
}

/// `Array.prototype.filter(callback, thisArg)`
fn filter(realm: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let callback = callback("filter", args, 0)?;
    let filtered =
        this.filter_with(&callback, &arg(args, 1), realm.cloner())?;
    Ok(filtered.into())
}

/// `Array.prototype.reduce(callback, initialValue)`
fn reduce(_: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let callback = callback("reduce", args, 0)?;
    this.reduce(&callback, arg(args, 1))
}

/// `Array.prototype.reduceRight(callback, initialValue)`
fn reduce_right(_: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let callback = callback("reduceRight", args, 0)?;
    this.reduce_right(&callback, arg(args, 1))
}

/// `Array.prototype.every(callback, thisArg)`
fn every(_: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let callback = callback("every", args, 0)?;
    Ok(this.every(&callback, &arg(args, 1))?.into())
}

/// `Array.prototype.some(callback, thisArg)`
fn some(_: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let callback = callback("some", args, 0)?;
    Ok(this.some(&callback, &arg(args, 1))?.into())
}

/// `Array.prototype.find(callback, thisArg)`
fn find(_: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let callback = callback("find", args, 0)?;
    Ok(this.find(&callback, &arg(args, 1))?.into())
}

/// `Array.prototype.findIndex(callback, thisArg)`
fn find_index(_: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let callback = callback("findIndex", args, 0)?;
    let index = this.find_index(&callback, &arg(args, 1))?;
    Ok(index.map_or(Value::from(-1), Value::from))
}

/// `Array.prototype.includes(valueToFind, fromIndex)`
fn includes(_: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let from_index = index_arg(args, 1).unwrap_or(0);
    Ok(this.includes(&arg(args, 0), from_index).into())
}

/// `Array.prototype.push(...items)`
fn push(_: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    Ok(this.push(args.iter().cloned()).into())
}

/// `Array.prototype.unshift(...items)`, batched or one at a time depending on
/// the realm's [UnshiftMode]
fn unshift(realm: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let items = args.iter().cloned();
    let len = match realm.unshift_mode() {
        UnshiftMode::Batch => this.unshift(items),
        UnshiftMode::EachItem => this.unshift_each(items),
    };
    Ok(len.into())
}

/// `Array.prototype.shift()`
fn shift(_: &Realm, this: &Array, _: &[Value]) -> Result<Value> {
    Ok(this.shift())
}

/// `Array.prototype.pop()`
fn pop(_: &Realm, this: &Array, _: &[Value]) -> Result<Value> {
    Ok(this.pop())
}

/// `Array.prototype.fill(value, start, end)`. Bounds that aren't numbers are
/// coerced rather than rejected: `null` and unparseable strings become 0.
fn fill(_: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let filled = this.fill(arg(args, 0), index_arg(args, 1), index_arg(args, 2));
    Ok(filled.into())
}

/// `Array.prototype.flat(depth)`
fn flat(realm: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let depth = Depth::from_value(&arg(args, 0));
    Ok(this.flat_with(depth, realm.flatten_strategy()).into())
}

/// `Array.prototype.flatMap(callback, thisArg)`
fn flat_map(realm: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let callback = callback("flatMap", args, 0)?;
    let mapped = this.map_with(&callback, &arg(args, 1), realm.cloner())?;
    Ok(mapped
        .flat_with(Depth::Finite(1), realm.flatten_strategy())
        .into())
}

/// `Array.prototype.concat(...items)`
fn concat(_: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    Ok(this.concat(rest(args, 0)).into())
}

/// `Array.prototype.join(separator)`
fn join(_: &Realm, this: &Array, args: &[Value]) -> Result<Value> {
    let joined = match arg(args, 0) {
        Value::Undefined => this.join(","),
        separator => this.join(&separator.to_string()),
    };
    Ok(joined.into())
}

/// `Array.prototype.toString()`
fn to_string(_: &Realm, this: &Array, _: &[Value]) -> Result<Value> {
    Ok(this.join(",").into())
}

/// `Array.from(source, mapFn, thisArg)`. A `mapFn` that is neither
/// `undefined` nor a function is rejected before anything is copied.
pub fn from(args: &[Value]) -> Result<Value> {
    let map_fn = match arg(args, 1) {
        Value::Undefined => None,
        Value::Function(function) => Some(function),
        other => {
            return Err(Error::InvalidCallback {
                method: "from",
                actual: other.type_(),
            })
        }
    };
    let array = Array::from_source(&arg(args, 0), map_fn.as_ref(), &arg(args, 2))?;
    Ok(array.into())
}
