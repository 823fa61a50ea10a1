//! Variable bindings.
//!
//! A `State` maps names to integers. Lookup always sees the most recent
//! binding of a name. Rebinding overwrites in place, so the state stays the
//! size of the set of distinct names no matter how many assignments a loop
//! performs.
//!
//! Bindings remember the order in which each name was first bound. Declared
//! variables come first, in declaration order, so dumps of a final state are
//! deterministic.

use std::fmt;

use imp_ir::Name;
use rustc_hash::FxHashMap;

use crate::errors::{unbound_name, EvalResult};

/// Read-only view used by expression evaluation.
pub type Environment = State;

/// Variable bindings threaded through statement execution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    /// Bindings in first-binding order.
    bindings: Vec<(Name, i64)>,
    /// Index into `bindings` for each name.
    slots: FxHashMap<Name, usize>,
}

impl State {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The state a program starts from: every declared name bound to 0.
    ///
    /// A name declared twice keeps its first position.
    pub fn initial(vars: &[Name]) -> Self {
        let mut state = State {
            bindings: Vec::with_capacity(vars.len()),
            slots: FxHashMap::default(),
        };
        for var in vars {
            state.bind(var, 0);
        }
        state
    }

    /// Look up the current value of `name`.
    #[inline]
    pub fn lookup(&self, name: &Name) -> EvalResult<i64> {
        self.get(name.as_str()).ok_or_else(|| unbound_name(name))
    }

    /// Current value of `name`, if bound.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.slots.get(name).map(|&slot| self.bindings[slot].1)
    }

    /// Bind `name` to `value`. Every later lookup of `name` sees `value`.
    #[inline]
    pub fn bind(&mut self, name: &Name, value: i64) {
        if let Some(&slot) = self.slots.get(name) {
            self.bindings[slot].1 = value;
        } else {
            self.slots.insert(name.clone(), self.bindings.len());
            self.bindings.push((name.clone(), value));
        }
    }

    /// Number of distinct bound names.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in first-binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, i64)> {
        self.bindings.iter().map(|(name, value)| (name, *value))
    }
}

/// One `name = value` line per binding.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}
