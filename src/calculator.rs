//! Chainable calculator over the precise primitives
//!
//! A [`Calculator`] owns a single `f64` accumulator. Mutating methods apply
//! their transform and hand the same instance back, so operations chain in
//! call order:
//!
//! ```
//! use precise_math::Calculator;
//!
//! let total = Calculator::new(10.0).add(5.0).multiply(2.0).result();
//! assert_eq!(total, 30.0);
//! ```
//!
//! Fallible operations validate their precondition before touching the
//! accumulator, so a caught error leaves the chain resumable with its value
//! intact.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::formatting::{self, FormatOptions, DEFAULT_DECIMALS};
use crate::precise::{self, CalcError, CalcResult, Precision};

/// Fluent wrapper around the precise arithmetic primitives
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    value: f64,
}

impl Calculator {
    /// Create a calculator with the given starting value.
    pub fn new(initial: f64) -> Self {
        Self { value: initial }
    }

    /// Add `n` to the accumulator.
    pub fn add(&mut self, n: f64) -> &mut Self {
        self.value = precise::add(self.value, n);
        self
    }

    /// Subtract `n` from the accumulator.
    pub fn subtract(&mut self, n: f64) -> &mut Self {
        self.value = precise::subtract(self.value, n);
        self
    }

    /// Multiply the accumulator by `n`.
    pub fn multiply(&mut self, n: f64) -> &mut Self {
        self.value = precise::multiply(self.value, n);
        self
    }

    /// Divide the accumulator by `n`, rounding the quotient to the default
    /// precision. Fails with [`CalcError::DivisionByZero`] when `n` is zero,
    /// leaving the accumulator unchanged.
    pub fn divide(&mut self, n: f64) -> CalcResult<&mut Self> {
        self.value = precise::divide(self.value, n)?;
        Ok(self)
    }

    /// Divide the accumulator by `n`, rounding the quotient to `precision`
    /// decimal places.
    pub fn divide_with(&mut self, n: f64, precision: Precision) -> CalcResult<&mut Self> {
        self.value = precise::divide_with(self.value, n, precision)?;
        Ok(self)
    }

    /// Raise the accumulator to `exponent`.
    pub fn power(&mut self, exponent: f64) -> &mut Self {
        self.value = self.value.powf(exponent);
        self
    }

    /// Replace the accumulator with its square root. Fails with
    /// [`CalcError::NegativeOperand`] when the accumulator is negative,
    /// leaving it unchanged.
    pub fn sqrt(&mut self) -> CalcResult<&mut Self> {
        if self.value < 0.0 {
            return Err(CalcError::NegativeOperand(self.value));
        }
        self.value = self.value.sqrt();
        Ok(self)
    }

    /// Replace the accumulator with its absolute value.
    pub fn abs(&mut self) -> &mut Self {
        self.value = self.value.abs();
        self
    }

    /// Round the accumulator to `places` decimal places, half away from
    /// zero.
    pub fn round(&mut self, places: Precision) -> &mut Self {
        self.rescale(places, f64::round)
    }

    /// Round the accumulator up to `places` decimal places.
    pub fn ceil(&mut self, places: Precision) -> &mut Self {
        self.rescale(places, f64::ceil)
    }

    /// Round the accumulator down to `places` decimal places.
    pub fn floor(&mut self, places: Precision) -> &mut Self {
        self.rescale(places, f64::floor)
    }

    // Scaling goes through the precise multiply so that e.g. ceil of 2.1 at
    // two places stays 2.1 instead of picking up a phantom 0.01.
    fn rescale(&mut self, places: Precision, op: fn(f64) -> f64) -> &mut Self {
        let factor = 10f64.powi(places as i32);
        self.value = op(precise::multiply(self.value, factor)) / factor;
        self
    }

    /// Read the accumulator.
    pub fn result(&self) -> f64 {
        self.value
    }

    /// Render the accumulator as fixed-decimal text, optionally stripping
    /// trailing fractional zeros.
    pub fn format(&self, decimals: Precision, trim_trailing_zeros: bool) -> String {
        let mut options = FormatOptions::new().with_decimals(decimals);
        if trim_trailing_zeros {
            options = options.trim_trailing_zeros();
        }
        formatting::format_number(self.value, &options)
    }

    /// Render the accumulator with the integer part comma-grouped.
    pub fn to_thousands(&self) -> String {
        formatting::format_thousands(self.value)
    }

    /// Render the accumulator in scientific notation.
    pub fn to_scientific(&self) -> String {
        formatting::format_scientific(self.value)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f64> for Calculator {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(DEFAULT_DECIMALS, false))
    }
}
