//! # shunt
//!
//! shunt is an interactive infix calculator written in Rust.
//! It tokenizes a line of arithmetic, reorders it into postfix (Reverse
//! Polish) form with the shunting-yard algorithm, and reduces the postfix
//! sequence to a single number.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::pipeline::{converter::convert, evaluator::evaluate, lexer::tokenize};

/// Provides the unified error type for the evaluation pipeline.
///
/// This module defines all errors that can be raised while converting or
/// evaluating an expression. It standardizes error reporting and carries
/// enough detail to explain a failure to the user.
///
/// # Responsibilities
/// - Defines the `EvalError` enum covering every failure mode.
/// - Attaches the offending symbol or a description where useful.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the lex, convert, and evaluate stages.
///
/// This module ties together the lexer, the infix-to-postfix converter, and
/// the postfix evaluator. The three stages form a linear pipeline with one
/// entry point per line of input.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, converter, and evaluator.
/// - Defines the token type shared by all three stages.
/// - Manages the flow of data and errors between stages.
pub mod pipeline;

pub use error::EvalError;

/// Evaluates one line of infix arithmetic and returns the numeric result.
///
/// The line is tokenized, converted to postfix order, and reduced on a value
/// stack. Each call is independent; no state survives between lines.
///
/// # Errors
/// Returns an error if the expression divides by zero, applies an operator
/// outside the supported set, or is structurally malformed (unbalanced
/// parentheses, missing operands, or an empty line).
///
/// # Examples
/// ```
/// use shunt::evaluate_expression;
///
/// // Multiplication binds tighter than addition.
/// let result = evaluate_expression("2 + 3 * 4");
/// assert_eq!(result.unwrap(), 14.0);
///
/// // Division by zero is reported instead of producing an infinity.
/// let result = evaluate_expression("5 / 0");
/// assert!(result.is_err());
/// ```
pub fn evaluate_expression(line: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(line);
    let postfix = convert(&tokens)?;
    evaluate(&postfix)
}
