//! The committed history of a running calculation.
//!
//! A [`Calculation`] is the ordered list of operands and operators the user
//! has committed since the last full reset. Evaluation is a strict
//! left-to-right fold without precedence:
//!
//! ```text
//! 30:30 - 10:15 - 15   =>   (30:30 - 10:15) - 00:15   =>   20:00
//! ```
//!
//! ## Fold rules
//!
//! - An operand with no pending operator replaces the running total.
//! - An operand with a pending operator is combined into the running total
//!   and clears the operator.
//! - An operator becomes the pending operator. `=` is skipped.
//! - A trailing operator with nothing after it leaves the total unchanged.

use super::duration::Duration;
use super::operator::{Operation, Operator};
use super::time_value::{TimeFormat, TimeValue};
use std::fmt;
use tracing::debug;

/// One entry of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationPart {
    Value(TimeValue),
    Operator(Operator),
}

impl fmt::Display for CalculationPart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalculationPart::Value(value) => write!(f, "{}", value),
            CalculationPart::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculation {
    parts: Vec<CalculationPart>,
}

impl Calculation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_value(&mut self, value: TimeValue) {
        self.parts.push(CalculationPart::Value(value));
    }

    pub fn push_operator(&mut self, operator: Operator) {
        self.parts.push(CalculationPart::Operator(operator));
    }

    pub fn parts(&self) -> &[CalculationPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Folds the entries left to right into a single duration.
    pub fn calculate(&self) -> Duration {
        let mut current = Duration::zero();
        let mut pending: Option<Operation> = None;

        for part in &self.parts {
            match part {
                CalculationPart::Operator(operator) => {
                    if operator.op != Operation::Equals {
                        pending = Some(operator.op);
                    }
                }
                CalculationPart::Value(time_value) => {
                    current = match pending.take() {
                        None => time_value.value,
                        Some(op) => apply(current, op, time_value.value),
                    };
                }
            }
        }

        debug!(parts = self.parts.len(), result = %current, "calculation evaluated");
        current
    }

    /// Re-tags every operand with `time_format`, see
    /// [`TimeValue::change_time_format`].
    pub fn change_time_format(&mut self, time_format: TimeFormat) {
        for part in self.parts.iter_mut() {
            if let CalculationPart::Value(value) = part {
                value.change_time_format(time_format);
            }
        }
    }
}

fn apply(left: Duration, op: Operation, right: Duration) -> Duration {
    match op {
        Operation::Add => left + right,
        Operation::Subtract => left - right,
        Operation::Equals => left,
    }
}

impl fmt::Display for Calculation {
    /// Space-joined entries, e.g. `05:50 + 03:30 +`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered: Vec<String> = self.parts.iter().map(|part| part.to_string()).collect();
        write!(f, "{}", rendered.join(" "))
    }
}
