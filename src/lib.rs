//! Decimal-safe arithmetic over native floating point
//!
//! This crate neutralizes binary floating-point representation error for
//! operands expressible with a small number of base-10 decimal digits, by
//! temporarily working in an integer-scaled domain. It provides the four
//! scaled arithmetic primitives, an operator dispatcher, a chainable
//! [`Calculator`], and fixed-decimal output formatting.
//!
//! ```
//! use precise_math::{add, Calculator};
//!
//! assert_eq!(add(0.1, 0.2), 0.3);
//! assert_eq!(Calculator::new(10.0).add(5.0).multiply(2.0).result(), 30.0);
//! ```
//!
//! Operands are interpreted through their shortest round-tripping decimal
//! rendering. Values with more than about 15 combined significant decimal
//! digits, or magnitudes whose power-of-ten scale factor is not
//! representable, are outside the supported range and give unspecified
//! results.

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod calculator;
pub mod formatting;
pub mod operator;
pub mod precise;

// Re-export main types
pub use calculator::Calculator;
pub use formatting::{
    format_fixed, format_number, format_scientific, format_thousands, format_trimmed,
    FormatOptions, DEFAULT_DECIMALS,
};
pub use operator::Operator;
pub use precise::{
    add, calculate, calculate_with, decimal_places, divide, divide_with, multiply, subtract,
    CalcError, CalcResult, Precision, DEFAULT_DIVIDE_PRECISION,
};
