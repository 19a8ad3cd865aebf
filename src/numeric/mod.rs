// ============================================================================
// Numeric Module
// Complex numbers over f64 with a closed algebra against real scalars
// ============================================================================
//
// This module provides:
// - Complex: value type with the full complex/real operator matrix
// - ComplexReader: streaming reader for the `re im marker` text format
// - ParseError: error types for text input
//
// Design principles:
// - Plain IEEE-754 arithmetic, no range checks or NaN guards
// - Binary operators return new values, compound forms mutate in place
// - Division only by a real divisor
// - Narrowing to f64 (magnitude) is always explicit

mod complex;
mod errors;
mod text;

pub use complex::Complex;
pub use errors::{ParseError, ParseResult, Part};
pub use text::ComplexReader;
