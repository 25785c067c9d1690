//! Single pass evaluation: scanning, precedence resolution and arithmetic
//! happen together while walking the formula once, without building a tree.
//!
//! [`Pass::parse_formula`] parses one value and then keeps applying operators
//! for as long as they bind tighter than the operator its caller is waiting
//! on. The operator that stops it is returned so the caller can make the same
//! decision one level up.

use crate::config::EvaluatorConfig;
use crate::error::{error_message, EvalError, Result, DEFAULT_RETURN};
use crate::functions::{lookup_constant, Function};
use crate::parser::{Cursor, Operand, Operator};
use crate::variables::VariableTable;
use log::{debug, trace};

/// Outcome of evaluating one formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// The result, or [`DEFAULT_RETURN`] when `error` is set.
    pub value: f64,
    pub error: Option<EvalError>,
    /// Byte offset where parsing stopped: the failure point, or the end of
    /// the consumed expression.
    pub position: usize,
}

impl Evaluation {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Numeric error code, `0` when the formula evaluated cleanly.
    pub fn error_code(&self) -> i32 {
        self.error.map_or(0, EvalError::code)
    }

    pub fn message(&self) -> &'static str {
        error_message(self.error_code())
    }

    pub fn into_result(self) -> Result<f64> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.value),
        }
    }
}

/// Formula evaluator owning its variables.
///
/// Each instance is independent; callers that evaluate concurrently should
/// each hold their own.
#[derive(Debug, Clone)]
pub struct Evaluator {
    variables: VariableTable,
    config: EvaluatorConfig,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_config(EvaluatorConfig::default())
    }

    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self {
            variables: VariableTable::new(config.max_variables),
            config,
        }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Current value of a variable (case-insensitive).
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.value(name)
    }

    /// Name and value of the variable created at `index`.
    pub fn list_variable(&self, index: usize) -> Option<(&str, f64)> {
        self.variables.get(index)
    }

    pub fn get_or_create_variable(&mut self, name: &str) -> Result<usize> {
        self.variables.get_or_create(name)
    }

    pub fn assign_variable(&mut self, name: &str, value: f64) -> Result<usize> {
        self.variables.assign(name, value)
    }

    /// Evaluates a complete formula.
    pub fn evaluate(&mut self, formula: &str) -> Evaluation {
        let mut cursor = Cursor::new(formula);
        self.evaluate_from(&mut cursor)
    }

    /// Evaluates the formula starting at `cursor`, leaving the cursor where
    /// parsing stopped.
    pub fn evaluate_from(&mut self, cursor: &mut Cursor<'_>) -> Evaluation {
        debug!("Evaluating formula: {}", cursor.remaining());

        let mut pass = Pass {
            cursor: *cursor,
            variables: &mut self.variables,
            max_name_length: self.config.max_name_length,
            depth: 0,
        };
        let outcome = pass.parse_formula(Operator::BeginLine);
        *cursor = pass.cursor;
        let position = cursor.position();

        match outcome {
            Ok((value, _)) => {
                debug!("Result: {value}");
                Evaluation {
                    value,
                    error: None,
                    position,
                }
            }
            Err(error) => {
                debug!("{error} (position {position})");
                Evaluation {
                    value: DEFAULT_RETURN,
                    error: Some(error),
                    position,
                }
            }
        }
    }
}

/// State of one evaluation pass.
struct Pass<'t, 'a> {
    cursor: Cursor<'a>,
    variables: &'t mut VariableTable,
    max_name_length: usize,
    depth: i32,
}

impl Pass<'_, '_> {
    /// Parses a value plus every operator that binds tighter than `pending`.
    /// Returns the accumulated value and the operator that ended it.
    fn parse_formula(&mut self, pending: Operator) -> Result<(f64, Operator)> {
        let (mut value, target) = self.parse_value()?;
        let mut current = self.cursor.operator()?;

        while current.binds_over(pending) {
            trace!("apply {current:?} over {pending:?}");
            current = match current {
                // Only a top-level ')' gets here; it repeats until the depth underflows.
                Operator::CloseParenthesis => {
                    self.depth -= 1;
                    if self.depth < 0 {
                        return Err(EvalError::UnmatchedCloseParenthesis);
                    }
                    current
                }
                Operator::Assignment => {
                    let id = target.ok_or(EvalError::VariableExpected)?;
                    // A failing right-hand side still poisons the target.
                    let (rhs, next) = match self.parse_formula(current) {
                        Ok(outcome) => outcome,
                        Err(error) => {
                            self.variables.set(id, DEFAULT_RETURN);
                            return Err(error);
                        }
                    };
                    self.variables.set(id, rhs);
                    value = rhs;
                    next
                }
                op => {
                    let (rhs, next) = self.parse_formula(op)?;
                    value = op.apply(value, rhs)?;
                    next
                }
            };
        }

        Ok((value, current))
    }

    /// One optionally signed value. The index is set when the value was read
    /// from a variable, making it a valid assignment target.
    fn parse_value(&mut self) -> Result<(f64, Option<usize>)> {
        self.cursor.skip_whitespace();
        let negative = self.cursor.sign();

        let (value, target) = match self.cursor.operand(self.max_name_length)? {
            Operand::Group => (self.parse_group()?, None),
            Operand::Number(number) => (number, None),
            Operand::Name(name) => self.resolve(&name)?,
        };

        Ok((if negative { -value } else { value }, target))
    }

    /// Body of a parenthesised group whose `(` was just consumed.
    fn parse_group(&mut self) -> Result<f64> {
        self.depth += 1;
        let (value, stop) = self.parse_formula(Operator::OpenParenthesis)?;
        if stop != Operator::CloseParenthesis {
            return Err(EvalError::UnmatchedOpenParenthesis);
        }
        Ok(value)
    }

    /// Constants first, then functions, then variables (created on first use).
    fn resolve(&mut self, name: &str) -> Result<(f64, Option<usize>)> {
        if let Some(value) = lookup_constant(name) {
            return Ok((value, None));
        }

        if let Some(function) = Function::lookup(name) {
            self.cursor.skip_whitespace();
            if !self.cursor.eat(b'(') {
                return Err(EvalError::InvalidOperand);
            }
            let argument = self.parse_group()?;
            let value = function.apply(argument)?;
            trace!("{}({argument}) = {value}", function.name());
            return Ok((value, None));
        }

        let id = self.variables.get_or_create(name)?;
        let value = self
            .variables
            .get(id)
            .map_or(DEFAULT_RETURN, |(_, value)| value);
        Ok((value, Some(id)))
    }
}
