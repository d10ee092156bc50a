use std::fmt::Write as _;

/// An abstract syntax tree node representing an expression.
///
/// `Expr` covers everything that evaluates to an integer: literals, variable
/// references, and binary operations. Each variant carries the source line it
/// was parsed from so that runtime errors can point back at the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use minilang::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
///
/// A program is an ordered list of statements, executed in source order.
/// Statements and expressions are distinct types: an expression can never
/// appear where a statement list is expected, and a statement can never be
/// used as an operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable binding using `let`, overwriting any existing binding of
    /// the same name.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `print` statement emitting one integer followed by a line break.
    Print {
        /// The expression to output.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A standalone expression evaluated for its effects; the result is
    /// discarded.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
///
/// All four operators bind with equal strength and group to the right; there
/// is no precedence between them. That grouping is a property of the parser,
/// not of this type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), truncating toward zero
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// Renders a program as an indented tree, one node per line.
///
/// Each nesting level indents by two spaces. A bare expression statement is
/// rendered as the expression itself, so a program consisting of `5 + 3;`
/// starts directly with its `BinaryOp(+)` node.
///
/// # Examples
/// ```
/// use minilang::{ast::dump_program, interpreter::{lexer::tokenize, parser::statement::parse_program}};
///
/// let tokens = tokenize("let x = 1 + 2;").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(dump_program(&program),
///            "Assign(x)\n  BinaryOp(+)\n    Number(1)\n    Number(2)\n");
/// ```
#[must_use]
pub fn dump_program(program: &[Statement]) -> String {
    let mut out = String::new();
    for statement in program {
        write_statement(&mut out, statement, 0);
    }
    out
}

fn write_statement(out: &mut String, statement: &Statement, indent: usize) {
    match statement {
        Statement::Assignment { name, value, .. } => {
            let _ = writeln!(out, "{}Assign({name})", "  ".repeat(indent));
            write_expr(out, value, indent + 1);
        },
        Statement::Print { expr, .. } => {
            let _ = writeln!(out, "{}Print", "  ".repeat(indent));
            write_expr(out, expr, indent + 1);
        },
        Statement::Expression { expr, .. } => write_expr(out, expr, indent),
    }
}

fn write_expr(out: &mut String, expr: &Expr, indent: usize) {
    let padding = "  ".repeat(indent);
    match expr {
        Expr::Literal { value, .. } => {
            let _ = writeln!(out, "{padding}Number({value})");
        },
        Expr::Variable { name, .. } => {
            let _ = writeln!(out, "{padding}Var({name})");
        },
        Expr::BinaryOp { op, left, right, .. } => {
            let _ = writeln!(out, "{padding}BinaryOp({op})");
            write_expr(out, left, indent + 1);
            write_expr(out, right, indent + 1);
        },
    }
}
