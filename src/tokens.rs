//! Evaluating formulas embedded in a whitespace separated token stream.
//!
//! Each helper pulls the next token off the cursor, evaluates it as a
//! complete formula and returns only the number. Errors are dropped, leaving
//! the default value of zero.

use crate::parser::{Cursor, Evaluator};
use log::debug;

impl Evaluator {
    /// Evaluates the next whitespace-delimited token as a formula.
    pub fn evaluate_leading_token(&mut self, cursor: &mut Cursor<'_>) -> f64 {
        let token = cursor.take_token();
        let result = self.evaluate(token);
        if let Some(error) = result.error {
            debug!("Discarding error for token '{token}': {error}");
        }
        result.value
    }

    /// Like [`Evaluator::evaluate_leading_token`], truncated toward zero.
    pub fn evaluate_leading_token_i32(&mut self, cursor: &mut Cursor<'_>) -> i32 {
        self.evaluate_leading_token(cursor) as i32
    }

    pub fn evaluate_leading_token_i64(&mut self, cursor: &mut Cursor<'_>) -> i64 {
        self.evaluate_leading_token(cursor) as i64
    }
}
