mod evaluator;
mod operator;
mod scanner;

pub use evaluator::{Evaluation, Evaluator};
pub use operator::Operator;
pub use scanner::{Cursor, Operand};
