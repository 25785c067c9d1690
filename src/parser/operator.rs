use crate::error::{EvalError, Result};

/// Operator kinds, declared from lowest to highest precedence.
///
/// The line markers and parentheses carry no arithmetic; they only take part
/// in the ordering so the recursion knows when to hand control back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    EndLine,
    BeginLine,
    CloseParenthesis,
    OpenParenthesis,
    Assignment,
    Add,
    Subtract,
    Multiply,
    Divide,
    RaisePower,
}

impl Operator {
    /// Maps an operator character; `None` is end of input.
    pub fn from_byte(byte: Option<u8>) -> Option<Self> {
        let op = match byte {
            None => Operator::EndLine,
            Some(b'+') => Operator::Add,
            Some(b'-') => Operator::Subtract,
            Some(b'*') => Operator::Multiply,
            Some(b'/') => Operator::Divide,
            Some(b'^') => Operator::RaisePower,
            Some(b')') => Operator::CloseParenthesis,
            Some(b'=') => Operator::Assignment,
            Some(_) => return None,
        };
        Some(op)
    }

    /// Whether an operator read at this level should be applied here rather
    /// than returned to the enclosing call waiting on `pending`.
    ///
    /// Assignment uses `>=` so chains associate to the right; everything else
    /// uses `>` and associates to the left.
    pub fn binds_over(self, pending: Operator) -> bool {
        match self {
            Operator::Assignment => self >= pending,
            _ => self > pending,
        }
    }

    pub fn apply(self, left: f64, right: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Operator::RaisePower => Ok(left.powf(right)),
            _ => Err(EvalError::InvalidOperator),
        }
    }
}
