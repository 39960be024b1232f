use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

/// Accumulating integer calculator
///
/// Every operation mutates the held number in place. Arithmetic wraps on
/// overflow (two's complement).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    number: i32,
}

impl Calculator {
    pub fn new(number: i32) -> Self {
        Self { number }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn add(&mut self, operand: i32) {
        self.number = self.number.wrapping_add(operand);
    }

    pub fn minus(&mut self, operand: i32) {
        self.number = self.number.wrapping_sub(operand);
    }

    pub fn multiply(&mut self, operand: i32) {
        self.number = self.number.wrapping_mul(operand);
    }

    /// Truncating division; the number is left untouched on error
    pub fn divide(&mut self, operand: i32) -> Result<(), CalculatorError> {
        if operand == 0 {
            return Err(CalculatorError::DivisionByZero);
        }
        self.number = self.number.wrapping_div(operand);
        Ok(())
    }
}
