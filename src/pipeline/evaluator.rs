use crate::{error::EvalError, pipeline::lexer::Token};

/// Applies a binary operator to two operands.
///
/// The right operand of `/` is checked against exactly `0.0`; no epsilon
/// tolerance is applied. `^` uses standard floating-point power semantics,
/// including fractional and negative exponents.
///
/// # Parameters
/// - `a`: Left operand.
/// - `b`: Right operand.
/// - `op`: The operator symbol.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// Returns `DivisionByZero` when dividing by exactly zero, and
/// `UnknownOperator` for any symbol outside `+`, `-`, `*`, `/` and `^`.
///
/// # Examples
/// ```
/// use shunt::pipeline::evaluator::apply_operator;
///
/// assert_eq!(apply_operator(2.0, 3.0, '^').unwrap(), 8.0);
/// assert!(apply_operator(1.0, 0.0, '/').is_err());
/// ```
pub fn apply_operator(a: f64, b: f64, op: char) -> Result<f64, EvalError> {
    match op {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' => Ok(a * b),
        '/' => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a / b)
        },
        '^' => Ok(a.powf(b)),
        _ => Err(EvalError::UnknownOperator { symbol: op }),
    }
}

/// Reduces a postfix token sequence to a single numeric result.
///
/// Numbers are pushed onto an explicit value stack; each operator pops the
/// two most recent values (`b` first, then `a`) and pushes
/// `apply_operator(a, b, op)`. The stack is local to this call and must hold
/// exactly one value once all tokens are consumed.
///
/// The converter never emits parentheses, but postfix input can originate
/// from any token sequence, so a stray `Paren` token is rejected here as
/// well.
///
/// # Parameters
/// - `postfix`: The token sequence in postfix order.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// Returns `MalformedExpression` when an operator finds fewer than two
/// operands, when operands are left over at the end, or when the sequence
/// produces no value at all (including empty input). Errors from
/// `apply_operator` pass through unchanged.
pub fn evaluate(postfix: &[Token]) -> Result<f64, EvalError> {
    let mut values: Vec<f64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(value) => values.push(*value),

            Token::Operator(op) => {
                let Some(b) = values.pop() else {
                    return Err(missing_operand(*op));
                };
                let Some(a) = values.pop() else {
                    return Err(missing_operand(*op));
                };
                values.push(apply_operator(a, b, *op)?);
            },

            Token::Paren(paren) => {
                return Err(EvalError::MalformedExpression { details:
                               format!("stray parenthesis '{paren}' in postfix input") });
            },
        }
    }

    match values.as_slice() {
        [result] => Ok(*result),
        [] => Err(EvalError::MalformedExpression { details:
                      "expression produced no value".to_string() }),
        _ => Err(EvalError::MalformedExpression { details:
                     "operands left over without an operator".to_string() }),
    }
}

fn missing_operand(op: char) -> EvalError {
    EvalError::MalformedExpression { details: format!("operator '{op}' is missing an operand") }
}
