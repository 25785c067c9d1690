//! Arithmetic formula evaluation with variables, chained assignment and a
//! fixed set of single argument functions.
//!
//! ```rust
//! use formulix_rs::{EvalError, Evaluator};
//!
//! let mut evaluator = Evaluator::new();
//! assert_eq!(evaluator.evaluate("a = 5^2").value, 25.0);
//! assert_eq!(evaluator.evaluate("A + sqrt(16)").value, 29.0);
//!
//! let result = evaluator.evaluate("1/0");
//! assert_eq!(result.error, Some(EvalError::DivisionByZero));
//! assert_eq!(result.message(), "error: division by zero.");
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod functions;
pub mod parser;
mod tokens;
pub mod variables;

pub use config::EvaluatorConfig;
pub use error::{error_message, EvalError, DEFAULT_RETURN};
pub use parser::{Cursor, Evaluation, Evaluator};
pub use variables::{Variable, VariableTable};

/// Evaluates `formula` on a fresh evaluator.
pub fn evaluate_expression(formula: &str) -> Result<f64, EvalError> {
    Evaluator::new().evaluate(formula).into_result()
}
