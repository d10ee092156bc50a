/// Expression parsing.
///
/// Contains the recursive descent rules for expressions: literals, variable
/// references, parenthesized groups, and binary operations.
pub mod core;

/// Statement parsing.
///
/// Implements the statement grammar (`let`, `print`, parenthesized and bare
/// expressions) and the entry point that turns a token sequence into a
/// program.
pub mod statement;
