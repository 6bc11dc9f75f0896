//! Scaled arithmetic primitives
//!
//! The four binary operators move decimal operands into an integer domain by
//! a power-of-ten factor derived from their decimal-place counts, compute
//! there, and rescale. This makes `0.1 + 0.2` come out as `0.3` rather than
//! `0.30000000000000004`.

use thiserror::Error;

use crate::operator::Operator;

/// Precision type for tracking decimal places
pub type Precision = u32;

/// Default number of decimal places a quotient is rounded to
pub const DEFAULT_DIVIDE_PRECISION: Precision = 10;

/// Errors that can occur during calculation
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalcError {
    /// Divisor was exactly zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Operator token outside the `+ - * /` alphabet
    #[error("Unsupported operator: {0:?}")]
    UnsupportedOperator(char),
    /// Square root requested for a negative value
    #[error("Square root of negative value: {0}")]
    NegativeOperand(f64),
}

/// Result type for calculation operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Count the digits after the decimal point in the shortest round-tripping
/// decimal rendering of `value`. Integers yield 0.
///
/// This is pinned to the host float-to-string canonicalization (`Display`
/// for `f64`), which prints the shortest representation that parses back to
/// the same bits. Extreme magnitudes whose scale factor would overflow are
/// outside the supported range.
pub fn decimal_places(value: f64) -> Precision {
    let text = value.to_string();
    match text.split_once('.') {
        Some((_, fraction)) => fraction.len() as Precision,
        None => 0,
    }
}

/// Power-of-ten scale factor for a decimal-place count.
fn pow10(places: Precision) -> f64 {
    10f64.powi(places as i32)
}

/// Add two decimal values without binary representation error.
///
/// Both operands are scaled by 10^max(da, db) and rounded to integers
/// before the sum; the rounding step absorbs the residual error introduced
/// by the scaling multiplication itself.
pub fn add(a: f64, b: f64) -> f64 {
    let factor = pow10(decimal_places(a).max(decimal_places(b)));
    ((a * factor).round() + (b * factor).round()) / factor
}

/// Subtract `b` from `a` without binary representation error.
pub fn subtract(a: f64, b: f64) -> f64 {
    let factor = pow10(decimal_places(a).max(decimal_places(b)));
    ((a * factor).round() - (b * factor).round()) / factor
}

/// Multiply two decimal values without binary representation error.
///
/// The scale factor combines both operands' decimal places, but only `a` is
/// pre-scaled; `b` participates unscaled so the intermediate stays within
/// the safe integer range for typical inputs.
pub fn multiply(a: f64, b: f64) -> f64 {
    let factor = pow10(decimal_places(a) + decimal_places(b));
    (a * factor * b).round() / factor
}

/// Divide `a` by `b`, rounding the quotient to [`DEFAULT_DIVIDE_PRECISION`]
/// decimal places.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    divide_with(a, b, DEFAULT_DIVIDE_PRECISION)
}

/// Divide `a` by `b`, rounding the quotient to `precision` decimal places.
///
/// Division is not decimal-scaled like the other operators; the plain
/// floating-point quotient is rounded half away from zero at `precision`
/// places. Fails with [`CalcError::DivisionByZero`] before any computation
/// when `b` is exactly zero.
pub fn divide_with(a: f64, b: f64, precision: Precision) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    let factor = pow10(precision);
    Ok((a / b * factor).round() / factor)
}

/// Apply `op` to `a` and `b` using the precise primitives.
pub fn calculate(a: f64, op: Operator, b: f64) -> CalcResult<f64> {
    calculate_with(a, op, b, DEFAULT_DIVIDE_PRECISION)
}

/// Apply `op` to `a` and `b`; `precision` reaches only the division arm.
pub fn calculate_with(a: f64, op: Operator, b: f64, precision: Precision) -> CalcResult<f64> {
    match op {
        Operator::Add => Ok(add(a, b)),
        Operator::Subtract => Ok(subtract(a, b)),
        Operator::Multiply => Ok(multiply(a, b)),
        Operator::Divide => divide_with(a, b, precision),
    }
}
