use logos::Logos;

/// Represents a lexical token in one line of input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in an expression.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    ///
    /// The lexer greedily consumes the maximal prefix that parses as a
    /// decimal floating-point number. No sign is consumed; a leading `-` is
    /// always an operator token, so negative literals only arise through
    /// binary subtraction.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Operator tokens: one of `+`, `-`, `*`, `/` or `^`.
    #[regex(r"[+\-*/^]", symbol)]
    Operator(char),
    /// Parenthesis tokens: `(` or `)`.
    #[regex(r"[()]", symbol)]
    Paren(char),
}

/// Converts one line of text into its token sequence.
///
/// Tokens are produced in left-to-right input order. Characters that match no
/// token pattern (letters, commas, and so on) are silently dropped rather
/// than reported; validation happens later, when the converter and evaluator
/// look at the token structure.
///
/// # Parameters
/// - `line`: The raw input text.
///
/// # Returns
/// The tokens recognized in `line`, possibly empty.
///
/// # Examples
/// ```
/// use shunt::pipeline::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 + 3");
/// assert_eq!(tokens,
///            vec![Token::Number(2.0), Token::Operator('+'), Token::Number(3.0)]);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token> {
    Token::lexer(line).filter_map(Result::ok).collect()
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Extracts the single-character symbol of an operator or parenthesis token.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(char)`: The matched symbol.
/// - `None`: If the slice is empty (never the case for a matched token).
fn symbol(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}
