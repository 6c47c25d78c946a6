use std::collections::BTreeMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Integer},
};

/// Current bindings of a program run, from variable name to value.
///
/// Each name is bound at most once; assigning again overwrites the old value.
/// Iteration order is by name, so reports built from [`Self::entries`] are
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    variables: BTreeMap<String, Integer>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn assign(&mut self, name: &str, value: Integer) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Returns the current value of `name`, if it has one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Integer> {
        self.variables.get(name).copied()
    }

    /// Returns the current value of `name`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if `name` was never
    /// assigned. `line` is only used for the error.
    pub fn resolve(&self, name: &str, line: usize) -> EvalResult<Integer> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Iterates over every bound name exactly once, in name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Integer)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_fails_for_unassigned_names() {
        let table = SymbolTable::new();
        assert_eq!(table.resolve("x", 3),
                   Err(RuntimeError::UndefinedVariable { name: "x".to_string(),
                                                         line: 3, }));
    }

    #[test]
    fn latest_assignment_wins() {
        let mut table = SymbolTable::new();
        table.assign("x", 1);
        table.assign("x", 2);
        assert_eq!(table.resolve("x", 1), Ok(2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn entries_lists_each_name_once_in_order() {
        let mut table = SymbolTable::new();
        table.assign("b", 2);
        table.assign("a", 1);
        table.assign("b", 3);
        let entries: Vec<_> = table.entries().collect();
        assert_eq!(entries, [("a", 1), ("b", 3)]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut table = SymbolTable::new();
        table.assign("x", 1);
        assert_eq!(table.get("X"), None);
        assert!(!table.is_empty());
    }
}
