use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `let`
    #[token("let")]
    Let,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `total`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End-of-input marker, appended exactly once after the source is
    /// exhausted. The parser relies on it to detect the end of the sequence.
    Eof,

    /// Line breaks bump the line counter and are never emitted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "NUMBER({value})"),
            Self::Let => write!(f, "LET"),
            Self::Print => write!(f, "PRINT"),
            Self::Ident(name) => write!(f, "IDENT({name})"),
            Self::Plus => write!(f, "PLUS"),
            Self::Minus => write!(f, "MINUS"),
            Self::Star => write!(f, "MULT"),
            Self::Slash => write!(f, "DIV"),
            Self::Equals => write!(f, "EQUAL"),
            Self::Semicolon => write!(f, "SEMICOLON"),
            Self::LParen => write!(f, "LPAREN"),
            Self::RParen => write!(f, "RPAREN"),
            Self::Eof => write!(f, "EOF"),
            // Skipped during lexing, so these never reach a token sequence.
            Self::NewLine => write!(f, "NEWLINE"),
            Self::Ignored => write!(f, "WHITESPACE"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits in 64 bits.
/// - `None`: If the digit run overflows, which surfaces as a lexical error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Converts a source text into its token sequence.
///
/// Scans left to right, skipping whitespace. Every token is paired with the
/// 1-based source line it starts on. After the source is exhausted, exactly
/// one [`Token::Eof`] is appended, always last. The function is pure: the
/// same source always produces the same sequence, and nothing is mutated
/// after production.
///
/// # Errors
/// - [`ParseError::LiteralTooLarge`] if a digit run does not fit in an
///   `i64`.
/// - [`ParseError::UnknownCharacter`] for any character outside the
///   language's alphabet.
///
/// # Examples
/// ```
/// use minilang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
///
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
/// assert_eq!(kinds,
///            vec![Token::Number(1), Token::Plus, Token::Number(2), Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            let line = lexer.extras.line;

            // The only token rule that can fail on digits is the integer
            // callback, and it fails only on overflow.
            if slice.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { line });
            }
            return Err(ParseError::UnknownCharacter { character: slice.chars().next().unwrap_or_default(),
                                                      line });
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    Ok(tokens)
}

/// Renders a token sequence as a human-readable dump, one token per line.
///
/// # Examples
/// ```
/// use minilang::interpreter::lexer::{dump_tokens, tokenize};
///
/// let tokens = tokenize("print x;").unwrap();
/// assert_eq!(dump_tokens(&tokens), "PRINT\nIDENT(x)\nSEMICOLON\nEOF\n");
/// ```
#[must_use]
pub fn dump_tokens(tokens: &[(Token, usize)]) -> String {
    let mut out = String::new();
    for (token, _) in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}
