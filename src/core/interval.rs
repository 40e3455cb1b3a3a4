// src/core/interval.rs

use std::fmt;

use crate::core::error::QuadError;

/// A validated integration interval [a, b] with a < b.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    pub fn new(a: f64, b: f64) -> Result<Self, QuadError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(QuadError::invalid_interval(format!(
                "integration bounds must be finite numbers (got a = {}, b = {})",
                a, b
            )));
        }
        if a >= b {
            return Err(QuadError::invalid_interval(format!(
                "the lower bound must be less than the upper bound (got a = {}, b = {})",
                a, b
            )));
        }
        Ok(Self { a, b })
    }

    pub fn lower(self) -> f64 {
        self.a
    }

    pub fn upper(self) -> f64 {
        self.b
    }

    pub fn width(self) -> f64 {
        self.b - self.a
    }

    /// Step width h = (b - a) / n for n subdivisions.
    pub fn step(self, n: usize) -> Result<f64, QuadError> {
        if n == 0 {
            return Err(QuadError::invalid_interval(
                "the number of subdivisions must be positive",
            ));
        }
        Ok((self.b - self.a) / n as f64)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.a, self.b)
    }
}
