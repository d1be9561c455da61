/// The lexer module tokenizes one line of input for further processing.
///
/// The lexer (tokenizer) reads the raw text and produces a stream of tokens:
/// numeric literals, operator symbols, and parentheses. This is the first
/// stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Greedily consumes decimal floating-point literals.
/// - Skips whitespace and silently drops unrecognized characters.
pub mod lexer;

/// The converter module reorders infix tokens into postfix order.
///
/// The converter runs the shunting-yard algorithm over the token stream
/// produced by the lexer, using an explicit operator stack to respect
/// precedence and parentheses. Its output contains only number and operator
/// tokens.
///
/// # Responsibilities
/// - Emits numbers immediately and operators in precedence order.
/// - Matches parentheses, consuming them without emitting them.
/// - Reports unbalanced parentheses as explicit errors.
pub mod converter;

/// The evaluator module reduces a postfix token sequence to one number.
///
/// The evaluator walks the converter's output left to right, pushing numbers
/// onto a value stack and applying each operator to the top two values. It is
/// the final stage of the pipeline.
///
/// # Responsibilities
/// - Applies the arithmetic operators `+`, `-`, `*`, `/`, and `^`.
/// - Reports division by zero and unknown operator symbols.
/// - Rejects malformed postfix input instead of underflowing the stack.
pub mod evaluator;
