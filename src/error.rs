#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// The right operand of a division was exactly zero.
    DivisionByZero,
    /// An operator symbol outside the supported set reached the evaluator.
    UnknownOperator {
        /// The symbol that was not recognized.
        symbol: char,
    },
    /// The expression was structurally invalid: unbalanced parentheses,
    /// missing operands, or no value produced at all.
    MalformedExpression {
        /// Details describing what made the expression malformed.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::UnknownOperator { symbol } => {
                write!(f, "Unknown operator '{symbol}'.")
            },

            Self::MalformedExpression { details } => {
                write!(f, "Malformed expression: {details}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
