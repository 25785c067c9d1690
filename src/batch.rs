//! Parallel evaluation of independent scripts.
//!
//! A script is a list of formula lines evaluated in order against one
//! private [`Evaluator`], so variables assigned on one line are visible to
//! the next. Different scripts never share state and run on the rayon pool.

use crate::config::EvaluatorConfig;
use crate::parser::{Evaluation, Evaluator};
use crate::variables::Variable;
use log::debug;
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptOutcome {
    /// One entry per line, in order.
    pub lines: Vec<Evaluation>,
    /// Variables left behind, in creation order.
    pub variables: Vec<Variable>,
}

impl ScriptOutcome {
    /// Value of the last line, if the script had any.
    pub fn last_value(&self) -> Option<f64> {
        self.lines.last().map(|line| line.value)
    }

    pub fn failed_lines(&self) -> impl Iterator<Item = (usize, &Evaluation)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_ok())
    }
}

/// Runs a single script on a fresh evaluator.
pub fn evaluate_script<S: AsRef<str>>(lines: &[S], config: EvaluatorConfig) -> ScriptOutcome {
    let mut evaluator = Evaluator::with_config(config);
    let lines = lines
        .iter()
        .map(|line| evaluator.evaluate(line.as_ref()))
        .collect();

    ScriptOutcome {
        lines,
        variables: evaluator.variables().iter().cloned().collect(),
    }
}

/// Runs every script in parallel. Outcomes are returned in input order.
pub fn evaluate_scripts<S>(scripts: &[Vec<S>], config: EvaluatorConfig) -> Vec<ScriptOutcome>
where
    S: AsRef<str> + Sync,
{
    debug!("Evaluating {} scripts", scripts.len());
    scripts
        .par_iter()
        .map(|script| evaluate_script(script, config))
        .collect()
}
