//! Hole-skipping traversals: `forEach`, `map`, `filter`, `every`, `some`,
//! `reduce` and `reduceRight`

use crate::{
    clone::{ShallowClone, ValueCloner},
    error::Result,
    ops::Holes,
    Array, Function, Value,
};
use std::{mem, ops::ControlFlow};

impl Array {
    /// `Array.prototype.forEach`
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/forEach
    pub fn for_each(&self, callback: &Function, this_arg: &Value) -> Result<()> {
        self.visit(0..self.len(), Holes::Skip, |index, element| {
            callback.call(this_arg, &self.callback_args(element, index))?;
            Ok(ControlFlow::Continue(()))
        })?;
        Ok(())
    }

    /// `Array.prototype.map`, except that holes produce no slot in the output.
    /// The output is dense and may be shorter than this array.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/map
    pub fn map(&self, callback: &Function, this_arg: &Value) -> Result<Array> {
        self.map_with(callback, this_arg, &ShallowClone)
    }

    /// [Self::map], passing each callback output through `cloner` before it's
    /// stored
    pub fn map_with(
        &self,
        callback: &Function,
        this_arg: &Value,
        cloner: &dyn ValueCloner,
    ) -> Result<Array> {
        let mut mapped = Vec::new();
        self.visit(0..self.len(), Holes::Skip, |index, element| {
            let output =
                callback.call(this_arg, &self.callback_args(element, index))?;
            mapped.push(cloner.clone_value(&output));
            Ok(ControlFlow::Continue(()))
        })?;
        Ok(mapped.into_iter().collect())
    }

    /// `Array.prototype.filter`
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/filter
    pub fn filter(&self, callback: &Function, this_arg: &Value) -> Result<Array> {
        self.filter_with(callback, this_arg, &ShallowClone)
    }

    /// [Self::filter], passing each kept element through `cloner` before it's
    /// stored
    pub fn filter_with(
        &self,
        callback: &Function,
        this_arg: &Value,
        cloner: &dyn ValueCloner,
    ) -> Result<Array> {
        let mut kept = Vec::new();
        self.visit(0..self.len(), Holes::Skip, |index, element| {
            let keep = callback
                .call(this_arg, &self.callback_args(element.clone(), index))?
                .to_bool();
            if keep {
                kept.push(cloner.clone_value(&element));
            }
            Ok(ControlFlow::Continue(()))
        })?;
        Ok(kept.into_iter().collect())
    }

    /// `Array.prototype.every`. Stops at the first falsy callback result.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/every
    pub fn every(&self, callback: &Function, this_arg: &Value) -> Result<bool> {
        let failed = self.visit(0..self.len(), Holes::Skip, |index, element| {
            let passed = callback
                .call(this_arg, &self.callback_args(element, index))?
                .to_bool();
            Ok(if passed {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            })
        })?;
        Ok(failed.is_none())
    }

    /// `Array.prototype.some`. Stops at the first truthy callback result.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/some
    pub fn some(&self, callback: &Function, this_arg: &Value) -> Result<bool> {
        let found = self.visit(0..self.len(), Holes::Skip, |index, element| {
            let passed = callback
                .call(this_arg, &self.callback_args(element, index))?
                .to_bool();
            Ok(if passed {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            })
        })?;
        Ok(found.is_some())
    }

    /// `Array.prototype.reduce`. The initial value is required; the first
    /// element is never used as an implicit seed. The callback receives
    /// `(accumulator, element, index, array)` and an `undefined` receiver.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/reduce
    pub fn reduce(&self, callback: &Function, initial: Value) -> Result<Value> {
        self.fold(0..self.len(), callback, initial)
    }

    /// `Array.prototype.reduceRight`: [Self::reduce], visiting from the last
    /// index down
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/reduceRight
    pub fn reduce_right(
        &self,
        callback: &Function,
        initial: Value,
    ) -> Result<Value> {
        self.fold((0..self.len()).rev(), callback, initial)
    }

    fn fold(
        &self,
        indexes: impl Iterator<Item = usize>,
        callback: &Function,
        initial: Value,
    ) -> Result<Value> {
        let mut accumulator = initial;
        self.visit(indexes, Holes::Skip, |index, element| {
            let [element, index, array] = self.callback_args(element, index);
            accumulator = callback.call(
                &Value::Undefined,
                &[mem::take(&mut accumulator), element, index, array],
            )?;
            Ok(ControlFlow::Continue(()))
        })?;
        Ok(accumulator)
    }
}
