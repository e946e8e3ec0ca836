//! A running-value calculator that records every operation it applies.
//!
//! Each operation uses its own fixed formula (see [`Operation::apply`]), so the
//! history is the source of truth: [`Calculator::undo_last_operation`] drops the
//! newest entry and replays the rest from zero.

use std::fmt;

use log::{debug, warn};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Compute the value that follows `current` when this operation is applied
    /// with `operand`. Nothing is mutated, so a failed step leaves no trace.
    ///
    /// - add: `current + operand + 20`
    /// - subtract: `current - operand / 10`
    /// - multiply: `current ^ operand / operand`, operand must be non-zero and a
    ///   finite `current` must give a finite result
    /// - divide: `current / operand * 2`, operand must be a positive integer
    pub fn apply(self, current: f64, operand: f64) -> Result<f64, CalculatorError> {
        match self {
            Operation::Add => Ok(current + (operand + 20.0)),
            Operation::Subtract => Ok(current - operand / 10.0),
            Operation::Multiply => {
                if operand == 0.0 {
                    return Err(CalculatorError::ZeroMultiplier);
                }
                let next = current.powf(operand) / operand;
                // an already non-finite value is carried along like the other operations do
                if current.is_finite() && !next.is_finite() {
                    return Err(CalculatorError::NonFiniteResult {
                        operation: self,
                        current,
                        operand,
                    });
                }
                Ok(next)
            }
            Operation::Divide => {
                if operand <= 0.0 || operand.fract() != 0.0 {
                    return Err(CalculatorError::InvalidDivisor(operand));
                }
                Ok(current / operand * 2.0)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    #[error("cannot multiply with an operand of zero")]
    ZeroMultiplier,
    #[error("divisor must be a positive integer, got {0}")]
    InvalidDivisor(f64),
    #[error("{operation} {operand} on {current} does not give a finite real number")]
    NonFiniteResult {
        operation: Operation,
        current: f64,
        operand: f64,
    },
    #[error("no operation to undo")]
    NothingToUndo,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    current_number: f64,
    previous_operations: Vec<(f64, Operation)>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_number(&self) -> f64 {
        self.current_number
    }

    /// Operand and kind of every applied operation, oldest first.
    pub fn previous_operations(&self) -> &[(f64, Operation)] {
        &self.previous_operations
    }

    pub fn add(&mut self, a: f64) -> Result<f64, CalculatorError> {
        self.perform(Operation::Add, a)
    }

    pub fn subtract(&mut self, a: f64) -> Result<f64, CalculatorError> {
        self.perform(Operation::Subtract, a)
    }

    pub fn multiply(&mut self, a: f64) -> Result<f64, CalculatorError> {
        self.perform(Operation::Multiply, a)
    }

    pub fn divide(&mut self, a: f64) -> Result<f64, CalculatorError> {
        self.perform(Operation::Divide, a)
    }

    /// Remove the newest history entry and restore the value from before it.
    ///
    /// Returns the undone entry.
    pub fn undo_last_operation(&mut self) -> Result<(f64, Operation), CalculatorError> {
        let last = *self
            .previous_operations
            .last()
            .ok_or(CalculatorError::NothingToUndo)?;
        let kept = self.previous_operations.len() - 1;
        let restored = Self::replay(&self.previous_operations[..kept])?;

        self.previous_operations.pop();
        self.current_number = restored;
        debug!(
            "undid {} {}: {} restored, {} operations left",
            last.1,
            last.0,
            restored,
            self.previous_operations.len()
        );
        Ok(last)
    }

    fn perform(&mut self, operation: Operation, operand: f64) -> Result<f64, CalculatorError> {
        let next = operation.apply(self.current_number, operand).inspect_err(|err| {
            warn!("rejected {operation} {operand}: {err}");
        })?;
        self.previous_operations.push((operand, operation));
        debug!("{operation} {operand}: {} -> {next}", self.current_number);
        self.current_number = next;
        Ok(next)
    }

    fn replay(history: &[(f64, Operation)]) -> Result<f64, CalculatorError> {
        history
            .iter()
            .try_fold(0.0, |current, &(operand, operation)| operation.apply(current, operand))
    }
}
