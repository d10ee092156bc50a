use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// The grammar is `expr := primary (OP expr)*`: after a primary operand, if
/// an operator follows, the entire remainder of the expression is parsed
/// recursively as the right operand. All four operators therefore bind with
/// equal strength and group to the right, so `5 - 3 - 2` parses as
/// `5 - (3 - 2)`. There is no precedence between `+ - * /`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Propagates any error from primary parsing, including unexpected tokens
/// and unbalanced parentheses.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_primary(tokens)?;

    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
        {
            let line = *line;
            tokens.next();

            let right = parse_expression(tokens)?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Parses a primary operand.
///
/// Grammar: `primary := NUMBER | IDENT | '(' expr ')'`
///
/// A parenthesized group recurses into the full expression rule and consumes
/// its own matching `)`.
///
/// # Errors
/// - `UnexpectedToken` if the next token cannot start an operand.
/// - `ExpectedClosingParen` if a group is not closed.
/// - `UnexpectedEndOfInput` at the end marker or on an exhausted iterator.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), line)) => Ok(Expr::Literal { value: *value,
                                                                 line:  *line, }),
        Some((Token::Ident(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                line: *line, }),
        Some((Token::LParen, line)) => {
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { line: *line }),
            }
        },
        Some((Token::Eof, line)) => Err(ParseError::UnexpectedEndOfInput { line: *line }),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Maps an operator token to its binary operator, or `None` for any other
/// token.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
