/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine: expression evaluation, statement
/// execution, and the output sink for `print`.
pub mod core;

/// The variable store.
///
/// An ordered name-to-integer mapping with a fixed capacity bound, owned by
/// one evaluation run.
pub mod symbol_table;
