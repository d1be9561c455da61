use crate::{error::EvalError, pipeline::lexer::Token};

/// Returns the binding strength of an operator symbol.
///
/// `^` binds tightest, then `*` and `/`, then `+` and `-`. Symbols outside
/// the operator set rank below everything.
///
/// # Parameters
/// - `op`: The operator symbol.
///
/// # Returns
/// The precedence level, higher meaning tighter binding.
#[must_use]
pub const fn precedence(op: char) -> u8 {
    match op {
        '^' => 3,
        '*' | '/' => 2,
        '+' | '-' => 1,
        _ => 0,
    }
}

/// Reorders an infix token sequence into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm: a single left-to-right pass over the
/// input with an explicit operator stack. Numbers are emitted immediately.
/// An operator first pops every stacked operator of equal or higher
/// precedence, making all operators left-associative for equal precedence.
/// That includes `^`: `2 ^ 3 ^ 2` converts as `(2 ^ 3) ^ 2`, a deliberate
/// departure from the usual right-associative mathematical convention.
///
/// Parentheses are consumed, never emitted: `(` is stacked, `)` pops
/// operators until the matching `(` is found and discarded. The output
/// therefore contains only `Number` and `Operator` tokens.
///
/// # Parameters
/// - `tokens`: The infix token sequence, as produced by the lexer.
///
/// # Returns
/// The same tokens in postfix order.
///
/// # Errors
/// Returns `MalformedExpression` when a `)` has no matching `(`, or when a
/// `(` is still on the stack after all input was consumed.
///
/// # Examples
/// ```
/// use shunt::pipeline::{converter::convert, lexer::tokenize};
///
/// let postfix = convert(&tokenize("2 + 3 * 4")).unwrap();
/// // 2 3 4 * +
/// assert_eq!(postfix.len(), 5);
/// ```
pub fn convert(tokens: &[Token]) -> Result<Vec<Token>, EvalError> {
    let mut postfix = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => postfix.push(*token),

            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = operators.last() {
                    if precedence(top) < precedence(*op) {
                        break;
                    }
                    postfix.push(Token::Operator(top));
                    operators.pop();
                }
                operators.push(*token);
            },

            Token::Paren('(') => operators.push(*token),

            Token::Paren(_) => loop {
                // Only operators and `(` are ever stacked, so the first
                // parenthesis found is the matching one.
                match operators.pop() {
                    Some(Token::Paren(_)) => break,
                    Some(op) => postfix.push(op),
                    None => {
                        return Err(EvalError::MalformedExpression { details:
                                       "found ')' without a matching '('".to_string() });
                    },
                }
            },
        }
    }

    while let Some(token) = operators.pop() {
        if matches!(token, Token::Paren(_)) {
            return Err(EvalError::MalformedExpression { details:
                           "found '(' that was never closed".to_string() });
        }
        postfix.push(token);
    }

    Ok(postfix)
}
