use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The maximum number of distinct variables one evaluation run can hold.
pub const MAX_VARIABLES: usize = 128;

/// The variable store: a mapping from variable name to current value.
///
/// Keys are unique and insertion order is preserved, so iterating the store
/// is stable. Entries are kept in a vector of pairs and looked up with a
/// linear scan; with at most [`MAX_VARIABLES`] entries that is never the
/// bottleneck. The store is created fresh at the start of one evaluation
/// run, mutated in place by assignments, and discarded when the run ends.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: Vec<(String, i64)>,
}

impl SymbolTable {
    /// Creates an empty variable store.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Looks up a variable by name.
    ///
    /// # Returns
    /// The current value, or `None` if the name was never assigned.
    ///
    /// # Example
    /// ```
    /// use minilang::interpreter::evaluator::symbol_table::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// table.set("x", 10, 1).unwrap();
    ///
    /// assert_eq!(table.get("x"), Some(10));
    /// assert_eq!(table.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| *value)
    }

    /// Inserts or updates a variable.
    ///
    /// An existing entry is updated in place; a new name is appended, which
    /// keeps iteration in insertion order. Updating never fails, only the
    /// insertion of a distinct name beyond [`MAX_VARIABLES`] does. A failed
    /// insertion leaves the store unchanged.
    ///
    /// # Errors
    /// [`RuntimeError::VariableStoreOverflow`] when the store already holds
    /// [`MAX_VARIABLES`] distinct names and `name` is not one of them.
    ///
    /// # Example
    /// ```
    /// use minilang::interpreter::evaluator::symbol_table::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// table.set("x", 1, 1).unwrap();
    /// table.set("x", 2, 2).unwrap();
    ///
    /// // Update-in-place, not a duplicate entry.
    /// assert_eq!(table.get("x"), Some(2));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn set(&mut self, name: &str, value: i64, line: usize) -> EvalResult<()> {
        for (entry_name, entry_value) in &mut self.entries {
            if entry_name == name {
                *entry_value = value;
                return Ok(());
            }
        }

        if self.entries.len() >= MAX_VARIABLES {
            return Err(RuntimeError::VariableStoreOverflow { capacity: MAX_VARIABLES,
                                                             line });
        }

        self.entries.push((name.to_string(), value));
        Ok(())
    }

    /// The number of distinct variables currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
