pub mod constants;

use crate::error::{EvalError, Result};

pub use constants::lookup_constant;

/// The built-in single argument functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Exp,
    Log,
    Log10,
    Abs,
    Acos,
    Asin,
    Atan,
    Sqrt,
    Int,
}

impl Function {
    /// Resolves an upper-cased identifier to a function.
    pub fn lookup(name: &str) -> Option<Self> {
        let function = match name {
            "SIN" => Function::Sin,
            "COS" => Function::Cos,
            "TAN" => Function::Tan,
            "EXP" => Function::Exp,
            "LOG" => Function::Log,
            "LOG10" => Function::Log10,
            "ACOS" => Function::Acos,
            "ASIN" => Function::Asin,
            "ATAN" => Function::Atan,
            "ABS" => Function::Abs,
            "SQRT" => Function::Sqrt,
            "INT" => Function::Int,
            _ => return None,
        };
        Some(function)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "SIN",
            Function::Cos => "COS",
            Function::Tan => "TAN",
            Function::Exp => "EXP",
            Function::Log => "LOG",
            Function::Log10 => "LOG10",
            Function::Abs => "ABS",
            Function::Acos => "ACOS",
            Function::Asin => "ASIN",
            Function::Atan => "ATAN",
            Function::Sqrt => "SQRT",
            Function::Int => "INT",
        }
    }

    /// Whether `x` is inside the accepted domain.
    ///
    /// `acos` and `asin` reject `1.0` while accepting `-1.0`.
    pub fn accepts(&self, x: f64) -> bool {
        match self {
            Function::Log | Function::Log10 | Function::Sqrt => x > 0.0,
            Function::Acos | Function::Asin => (-1.0..1.0).contains(&x),
            _ => true,
        }
    }

    /// Applies the function, checking the argument's domain first.
    pub fn apply(&self, x: f64) -> Result<f64> {
        if !self.accepts(x) {
            return Err(EvalError::ParameterOutOfRange);
        }

        let value = match self {
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Tan => x.tan(),
            Function::Exp => x.exp(),
            Function::Log => x.ln(),
            Function::Log10 => x.log10(),
            Function::Abs => x.abs(),
            Function::Acos => x.acos(),
            Function::Asin => x.asin(),
            Function::Atan => x.atan(),
            Function::Sqrt => x.sqrt(),
            // toward zero: int(-1.2) is -1
            Function::Int => {
                if x < 0.0 {
                    x.ceil()
                } else {
                    x.floor()
                }
            }
        };
        Ok(value)
    }
}
