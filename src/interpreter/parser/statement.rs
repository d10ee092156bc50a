use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses an entire token sequence into a program.
///
/// Statements are parsed one after another and appended in source order
/// until the end-of-input marker is reached. The cursor only ever moves
/// forward; there is no backtracking and no error recovery. The first error
/// aborts parsing and no partial program is returned.
///
/// # Parameters
/// - `tokens`: The full token sequence produced by the lexer, terminated by
///   [`Token::Eof`].
///
/// # Returns
/// The statements of the program, in source order.
///
/// # Examples
/// ```
/// use minilang::interpreter::{lexer::tokenize, parser::statement::parse_program};
///
/// let tokens = tokenize("let x = 1; print(x);").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut program = Vec::new();

    while let Some((token, _)) = iter.peek() {
        if matches!(token, Token::Eof) {
            break;
        }
        program.push(parse_statement(&mut iter)?);
    }

    Ok(program)
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable binding (`let <identifier> = <expr> ;`),
/// - a print statement (`print <expr> ;`),
/// - a parenthesized expression (`( <expr> )`),
/// - an expression used as a statement, with an optional trailing `;`.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_let_statement(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_print_statement(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_parenthesized_statement(tokens)? {
        return Ok(statement);
    }

    let current_line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens)?;

    // The trailing semicolon of a bare expression statement is optional.
    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }

    Ok(Statement::Expression { expr,
                               line: current_line })
}

/// Parses a variable binding statement.
///
/// A binding has the form `let <identifier> = <expression> ;`.
///
/// If the next token is not `let`, this function returns `Ok(None)` and does
/// not consume any input.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the token after `let` is not an identifier,
/// - `=` or the terminating `;` is missing,
/// - the expression is malformed,
/// - input ends unexpectedly.
fn parse_let_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Let, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let name = parse_identifier(tokens)?;

        match tokens.next() {
            Some((Token::Equals, _)) => {},
            Some((tok, l)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected '=', found {tok}"),
                                                         line:  *l, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }

        let value = parse_expression(tokens)?;
        expect_semicolon(tokens, line)?;

        return Ok(Some(Statement::Assignment { name, value, line }));
    }

    Ok(None)
}

/// Parses a print statement.
///
/// A print statement has the form `print <expression> ;`. The parentheses
/// usually written around the operand, as in `print(x);`, belong to the
/// expression grammar rather than to the statement.
///
/// If the next token is not `print`, returns `Ok(None)` without consuming
/// input.
fn parse_print_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Print, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let expr = parse_expression(tokens)?;
        expect_semicolon(tokens, line)?;

        return Ok(Some(Statement::Print { expr, line }));
    }

    Ok(None)
}

/// Parses a parenthesized expression at statement position.
///
/// The statement form `( <expression> )` consumes its own closing `)` and
/// nothing more. In particular it does not consume a following `;` and does
/// not continue into trailing binary operators, so `(2 + 3) * 4` at
/// statement position is two statements, the second of which fails to
/// parse. This matches the historical behavior of the language.
///
/// If the next token is not `(`, returns `Ok(None)` without consuming
/// input.
fn parse_parenthesized_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LParen, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let expr = parse_expression(tokens)?;

        match tokens.next() {
            Some((Token::RParen, _)) => {},
            _ => return Err(ParseError::ExpectedClosingParen { line }),
        }

        return Ok(Some(Statement::Expression { expr, line }));
    }

    Ok(None)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Ident`.
fn parse_identifier<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Ident(s), _)) => Ok(s.clone()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {tok}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes the statement-terminating `;`.
fn expect_semicolon<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Semicolon, _)) => Ok(()),
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected ';', found {tok}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
