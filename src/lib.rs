// ============================================================================
// Complex Algebra Library
// Complex number value type with arithmetic against itself and real scalars
// ============================================================================

//! # Complex Algebra
//!
//! A small complex number type over `f64`.
//!
//! ## Features
//!
//! - **Operator matrix** for `Complex ⊗ Complex`, `Complex ⊗ f64` and `f64 ⊗ Complex`
//! - **Compound assignment** with chainable in-place variants
//! - **Magnitude** and an explicit narrowing conversion to `f64`
//! - **Text format**: writes `3-2i`, reads `3 -2 i`
//!
//! ## Example
//!
//! ```rust
//! use complex_algebra::prelude::*;
//!
//! let a = Complex::new(1.0, 2.0);
//! let b = Complex::new(3.0, -5.0);
//!
//! assert_eq!(a * b, Complex::new(13.0, 1.0));
//! assert_eq!(2.0 - a, Complex::new(1.0, -2.0));
//! assert_eq!((a * 3.0 / 3.0).to_string(), "1+2i");
//!
//! let parsed: Complex = "3 -2 i".parse().unwrap();
//! assert_eq!(parsed.to_string(), "3-2i");
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{Complex, ComplexReader, ParseError, ParseResult, Part};
}
