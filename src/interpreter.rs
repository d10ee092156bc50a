/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the statement list, evaluates expressions,
/// performs integer arithmetic, manages the variable store, and produces
/// program output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions and executes statements in source order.
/// - Owns the variable store for the duration of one run.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each corresponding to a meaningful language element such as a number,
/// identifier, operator, delimiter, or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles integer literals, identifiers, keywords, and punctuation.
/// - Reports lexical errors for characters outside the language's alphabet.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs a statement list representing the syntactic structure of the
/// program. Parsing is recursive descent with one token of lookahead and no
/// backtracking.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, reporting errors with line info.
/// - Preserves source order in the resulting statement list.
pub mod parser;
