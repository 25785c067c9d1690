use crate::error::{EvalError, Result};
use log::debug;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: f64,
}

/// Append-only, capacity bounded table of variables.
///
/// Names are stored upper-cased and looked up case-insensitively. The index
/// handed out when a variable is created never changes for the lifetime of
/// the table.
#[derive(Debug, Clone)]
pub struct VariableTable {
    entries: Vec<Variable>,
    index: HashMap<String, usize>,
    capacity: usize,
}

impl VariableTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of an existing variable.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.index.get(&name.to_ascii_uppercase()).copied()
    }

    /// Current value of a variable, if it exists.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.find(name).map(|id| self.entries[id].value)
    }

    /// Returns the index of `name`, creating it with value zero when absent.
    pub fn get_or_create(&mut self, name: &str) -> Result<usize> {
        match self.find(name) {
            Some(id) => Ok(id),
            None => self.insert(name, 0.0),
        }
    }

    /// Stores `value` under `name`, creating the variable if needed.
    pub fn assign(&mut self, name: &str, value: f64) -> Result<usize> {
        match self.find(name) {
            Some(id) => {
                self.entries[id].value = value;
                Ok(id)
            }
            None => self.insert(name, value),
        }
    }

    /// Overwrites the value at `id`. Returns `false` when no such entry exists.
    pub fn set(&mut self, id: usize, value: f64) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.value = value;
                true
            }
            None => false,
        }
    }

    /// Name and value at a stable index, for walking the table in creation order.
    pub fn get(&self, id: usize) -> Option<(&str, f64)> {
        self.entries
            .get(id)
            .map(|entry| (entry.name.as_str(), entry.value))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.entries.iter()
    }

    fn insert(&mut self, name: &str, value: f64) -> Result<usize> {
        if self.entries.len() >= self.capacity {
            return Err(EvalError::VariableSpaceFull);
        }

        let mut stored = String::new();
        stored
            .try_reserve_exact(name.len())
            .map_err(|_| EvalError::HeapFull)?;
        stored.extend(name.chars().map(|c| c.to_ascii_uppercase()));

        let id = self.entries.len();
        debug!("Creating variable {stored} at index {id}");
        self.index.insert(stored.clone(), id);
        self.entries.push(Variable {
            name: stored,
            value,
        });
        Ok(id)
    }
}

impl Default for VariableTable {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_VARIABLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_starts_at_zero() {
        let mut table = VariableTable::new(8);
        let id = table.get_or_create("rate").unwrap();

        assert_eq!(id, 0);
        assert_eq!(table.get(id), Some(("RATE", 0.0)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut table = VariableTable::new(8);
        let id = table.assign("Rate", 2.5).unwrap();

        assert_eq!(table.get_or_create("RATE").unwrap(), id);
        assert_eq!(table.get_or_create("rate").unwrap(), id);
        assert_eq!(table.value("rAtE"), Some(2.5));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_indices_are_stable() {
        let mut table = VariableTable::new(8);
        let a = table.get_or_create("a").unwrap();
        let b = table.get_or_create("b").unwrap();
        table.assign("a", 7.0).unwrap();
        let c = table.get_or_create("c").unwrap();

        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(table.get(0), Some(("A", 7.0)));
        assert_eq!(table.get(3), None);
        let names: Vec<&str> = table.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut table = VariableTable::new(2);
        assert_eq!(table.capacity(), 2);
        table.get_or_create("x").unwrap();
        table.get_or_create("y").unwrap();

        assert_eq!(table.get_or_create("z"), Err(EvalError::VariableSpaceFull));
        assert_eq!(table.assign("z", 1.0), Err(EvalError::VariableSpaceFull));
        // existing names still resolve once full
        assert_eq!(table.assign("x", 3.0), Ok(0));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_set_by_index() {
        let mut table = VariableTable::new(2);
        let id = table.get_or_create("x").unwrap();

        assert!(table.set(id, 4.0));
        assert!(!table.set(5, 4.0));
        assert_eq!(table.value("x"), Some(4.0));
        assert_eq!(table.value("missing"), None);
    }
}
