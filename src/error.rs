use std::fmt;
use thiserror::Error;

/// Value reported alongside any error.
pub const DEFAULT_RETURN: f64 = 0.0;

/// Every way a formula can fail. The first failure detected ends the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EvalError {
    InvalidOperand,
    UnmatchedOpenParenthesis,
    UnmatchedCloseParenthesis,
    InvalidOperator,
    DivisionByZero,
    /// Kept for code compatibility; name resolution never produces it.
    UnknownFunction,
    VariableExpected,
    VariableSpaceFull,
    VariableNameTooLong,
    HeapFull,
    ParameterOutOfRange,
}

const UNKNOWN_CODE_MESSAGE: &str = "internal error:  Unknown error code.";

impl EvalError {
    pub const ALL: [EvalError; 11] = [
        EvalError::InvalidOperand,
        EvalError::UnmatchedOpenParenthesis,
        EvalError::UnmatchedCloseParenthesis,
        EvalError::InvalidOperator,
        EvalError::DivisionByZero,
        EvalError::UnknownFunction,
        EvalError::VariableExpected,
        EvalError::VariableSpaceFull,
        EvalError::VariableNameTooLong,
        EvalError::HeapFull,
        EvalError::ParameterOutOfRange,
    ];

    /// Stable numeric code. Zero is reserved for "no error".
    pub fn code(self) -> i32 {
        match self {
            EvalError::InvalidOperand => 1,
            EvalError::UnmatchedOpenParenthesis => 2,
            EvalError::UnmatchedCloseParenthesis => 3,
            EvalError::InvalidOperator => 4,
            EvalError::DivisionByZero => 5,
            EvalError::UnknownFunction => 6,
            EvalError::VariableExpected => 7,
            EvalError::VariableSpaceFull => 8,
            EvalError::VariableNameTooLong => 9,
            EvalError::HeapFull => 10,
            EvalError::ParameterOutOfRange => 11,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.code() == code)
    }

    /// The fixed, human readable message for this error.
    pub fn message(self) -> &'static str {
        match self {
            EvalError::InvalidOperand => "error: invalid operand.",
            EvalError::UnmatchedOpenParenthesis => "error: unmatched left parenthesis.",
            EvalError::UnmatchedCloseParenthesis => "error: unmatched right parenthesis.",
            EvalError::InvalidOperator => "error: invalid operator.",
            EvalError::DivisionByZero => "error: division by zero.",
            EvalError::UnknownFunction => "error: unknown function.",
            EvalError::VariableExpected => "error: variable expected.",
            EvalError::VariableSpaceFull => "error: variable space full.",
            EvalError::VariableNameTooLong => "error: variable name too long.",
            EvalError::HeapFull => "error: heap space full.",
            EvalError::ParameterOutOfRange => "error: function parameter is out of range.",
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Message lookup by numeric code, as reported by [`crate::Evaluation::error_code`].
///
/// `0` maps to an empty string; codes outside the taxonomy map to an
/// internal-error message instead of failing.
pub fn error_message(code: i32) -> &'static str {
    if code == 0 {
        return "";
    }
    EvalError::from_code(code).map_or(UNKNOWN_CODE_MESSAGE, EvalError::message)
}

pub type Result<T> = std::result::Result<T, EvalError>;
