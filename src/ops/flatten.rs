//! Flattening nested arrays: `flat` and `flatMap`

use crate::{error::Result, Array, Function, Value};
use log::debug;

/// How many levels of nesting to collapse
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Depth {
    /// Collapse exactly this many levels. `0` leaves nesting untouched.
    Finite(usize),
    /// Collapse every level, no matter how deep
    Unbounded,
}

impl Depth {
    /// Coerce a dynamic depth argument. `undefined` is the default depth of 1,
    /// positive infinity is unbounded, and anything else is truncated to an
    /// integer. Negative and non-numeric depths flatten nothing.
    pub fn from_value(value: &Value) -> Self {
        if let Value::Undefined = value {
            return Self::default();
        }
        let depth = value.to_integer();
        if depth == f64::INFINITY {
            Self::Unbounded
        } else if depth <= 0.0 {
            Self::Finite(0)
        } else {
            // Saturates for absurdly large depths, which is equivalent
            Self::Finite(depth as usize)
        }
    }

    /// Get the depth one level down, or `None` if this depth doesn't permit
    /// descending any further
    fn descend(self) -> Option<Self> {
        match self {
            Self::Finite(0) => None,
            Self::Finite(depth) => Some(Self::Finite(depth - 1)),
            Self::Unbounded => Some(Self::Unbounded),
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Self::Finite(1)
    }
}

impl From<usize> for Depth {
    fn from(depth: usize) -> Self {
        Self::Finite(depth)
    }
}

/// Algorithm used to flatten. Both produce identical output; they differ only
/// in whether nesting is tracked on the call stack or on a heap-allocated work
/// stack.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FlattenStrategy {
    /// Recurse into each nested array
    #[default]
    Recursive,
    /// Drive an explicit work stack, then reverse the output
    Stack,
}

impl Array {
    /// `Array.prototype.flat`, using the recursive strategy. Holes are dropped
    /// at every level, including the top level when `depth` is 0.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/flat
    pub fn flat(&self, depth: impl Into<Depth>) -> Array {
        self.flat_with(depth, FlattenStrategy::default())
    }

    /// `Array.prototype.flat` with an explicit strategy
    pub fn flat_with(
        &self,
        depth: impl Into<Depth>,
        strategy: FlattenStrategy,
    ) -> Array {
        let depth = depth.into();
        let slots = self.slots();
        debug!(
            "Flattening {} slots to depth {depth:?} using {strategy:?}",
            slots.len()
        );
        let flattened = match strategy {
            FlattenStrategy::Recursive => {
                let mut flattened = Vec::new();
                flatten_recursive(slots, depth, &mut flattened);
                flattened
            }
            FlattenStrategy::Stack => flatten_stack(slots, depth),
        };
        flattened.into_iter().collect()
    }

    /// `Array.prototype.flatMap`: [Self::map] followed by a one-level
    /// [Self::flat]. Holes in this array are never passed to the callback.
    /// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/flatMap
    pub fn flat_map(&self, callback: &Function, this_arg: &Value) -> Result<Array> {
        Ok(self.map(callback, this_arg)?.flat(Depth::Finite(1)))
    }
}

/// Append each value in `slots` to `flattened`, splicing in the contents of
/// nested arrays while `depth` permits
fn flatten_recursive(
    slots: Vec<Option<Value>>,
    depth: Depth,
    flattened: &mut Vec<Value>,
) {
    for element in slots.into_iter().flatten() {
        match (element, depth.descend()) {
            (Value::Array(inner), Some(next)) => {
                flatten_recursive(inner.slots(), next, flattened)
            }
            (element, _) => flattened.push(element),
        }
    }
}

/// Flatten using a work stack. Popping from the back of the stack yields the
/// *last* remaining element first, so the output is built in reverse and
/// flipped at the end. Each stack entry carries the depth still available to
/// it.
fn flatten_stack(slots: Vec<Option<Value>>, depth: Depth) -> Vec<Value> {
    let mut stack: Vec<(Value, Depth)> = slots
        .into_iter()
        .flatten()
        .map(|element| (element, depth))
        .collect();
    let mut flattened = Vec::new();
    while let Some((element, depth)) = stack.pop() {
        match (element, depth.descend()) {
            (Value::Array(inner), Some(next)) => stack.extend(
                inner
                    .slots()
                    .into_iter()
                    .flatten()
                    .map(|element| (element, next)),
            ),
            (element, _) => flattened.push(element),
        }
    }
    flattened.reverse();
    flattened
}
