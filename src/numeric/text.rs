// ============================================================================
// Text Format
// Output as a merged literal, input as three whitespace-separated tokens
// ============================================================================
//
// Output:  `<re><sign><im>i`, e.g. `3-2i`, `3+2i`, `3+0i`
// Input:   `<re> <im> <marker>`, e.g. `3 -2 i` (marker is read and discarded)
//
// The two formats are not symmetric: output cannot be read back by the
// input routines.

use super::complex::Complex;
use super::errors::{ParseError, ParseResult, Part};
use std::collections::VecDeque;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Complex {
    /// `+` is written unless the imaginary part compares less than zero, so
    /// `-0.0` and NaN both get one (`1+-0i`, `1+NaNi`).
    ///
    /// A precision (`{:.2}`) applies to both parts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im() < 0.0 { "" } else { "+" };

        match f.precision() {
            Some(p) => write!(f, "{:.*}{}{:.*}i", p, self.re(), sign, p, self.im()),
            None => write!(f, "{}{}{}i", self.re(), sign, self.im()),
        }
    }
}

// ============================================================================
// Token Parsing
// ============================================================================

fn parse_part(token: Option<&str>, part: Part) -> ParseResult<f64> {
    let token = token.ok_or(ParseError::MissingToken(part))?;
    token.parse().map_err(|_| ParseError::InvalidNumber(part))
}

impl FromStr for Complex {
    type Err = ParseError;

    /// Parse exactly three whitespace-separated tokens: real part,
    /// imaginary part, marker.
    ///
    /// # Examples
    /// - "3 -2 i" -> 3-2i
    /// - "1.5\t0 j" -> 1.5+0i
    /// - "3-2i" -> `InvalidNumber(Real)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        let re = parse_part(tokens.next(), Part::Real)?;
        let im = parse_part(tokens.next(), Part::Imaginary)?;
        tokens.next().ok_or(ParseError::MissingToken(Part::Marker))?;

        if tokens.next().is_some() {
            return Err(ParseError::TrailingInput);
        }

        Ok(Complex::new(re, im))
    }
}

// ============================================================================
// Stream Reader
// ============================================================================

/// Reads complex numbers in `re im marker` form from a buffered source.
///
/// Tokens may be split across lines. Every successful read consumes exactly
/// three tokens and leaves the rest for the next one. A failed read consumes
/// tokens up to and including the offending one.
///
/// As an iterator it stops after the first error, the way a stream stays in
/// its failed state.
///
/// # Example
/// ```
/// use complex_algebra::numeric::{Complex, ComplexReader};
///
/// let input = "3 -2 i\n0.5 1\ni";
/// let values: Vec<Complex> = ComplexReader::new(input.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(values, vec![Complex::new(3.0, -2.0), Complex::new(0.5, 1.0)]);
/// ```
#[derive(Debug)]
pub struct ComplexReader<R> {
    inner: R,
    pending: VecDeque<String>,
    line: String,
    failed: bool,
}

impl<R: BufRead> ComplexReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
            line: String::new(),
            failed: false,
        }
    }

    /// Give back the underlying reader. Tokens already buffered from the
    /// current line are dropped.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn next_token(&mut self) -> ParseResult<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.inner.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }

        Ok(self.pending.pop_front())
    }

    /// Read the next value.
    ///
    /// Returns `Ok(None)` at end of input when no token of a new value has
    /// been consumed.
    ///
    /// # Errors
    /// - `MissingToken` if input ends part way through a value
    /// - `InvalidNumber` if the real or imaginary token is not a number
    /// - `Io` if the underlying reader fails
    pub fn read_complex(&mut self) -> ParseResult<Option<Complex>> {
        let result = self.read_fields();
        if let Err(err) = &result {
            tracing::debug!("Failed to read complex number: {}", err);
        }
        result
    }

    fn read_fields(&mut self) -> ParseResult<Option<Complex>> {
        let re = match self.next_token()? {
            Some(token) => parse_part(Some(&token), Part::Real)?,
            None => return Ok(None),
        };

        let token = self.next_token()?;
        let im = parse_part(token.as_deref(), Part::Imaginary)?;

        self.next_token()?
            .ok_or(ParseError::MissingToken(Part::Marker))?;

        let value = Complex::new(re, im);
        tracing::trace!("Read complex number {}", value);
        Ok(Some(value))
    }
}

impl<R: BufRead> Iterator for ComplexReader<R> {
    type Item = ParseResult<Complex>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.read_complex() {
            Ok(value) => value.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            },
        }
    }
}

impl Complex {
    /// Read the next value from `reader` into `self`.
    ///
    /// On failure `self` is left unchanged. End of input counts as a
    /// missing real part.
    pub fn read_from<R: BufRead>(
        &mut self,
        reader: &mut ComplexReader<R>,
    ) -> ParseResult<&mut Self> {
        let value = reader
            .read_complex()?
            .ok_or(ParseError::MissingToken(Part::Real))?;
        Ok(self.assign(value))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};
    use std::io;

    fn same(a: Complex, b: Complex) -> bool {
        a.re().to_bits() == b.re().to_bits() && a.im().to_bits() == b.im().to_bits()
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(3.0, -2.0).to_string(), "3-2i");
        assert_eq!(Complex::new(3.0, 2.0).to_string(), "3+2i");
        assert_eq!(Complex::new(3.0, 0.0).to_string(), "3+0i");
        assert_eq!(Complex::ZERO.to_string(), "0+0i");
        assert_eq!(Complex::new(-1.5, 0.25).to_string(), "-1.5+0.25i");
    }

    #[test]
    fn test_display_special_values() {
        assert_eq!(Complex::new(1.0, -0.0).to_string(), "1+-0i");
        assert_eq!(Complex::new(1.0, f64::NAN).to_string(), "1+NaNi");
        assert_eq!(Complex::new(f64::INFINITY, f64::NEG_INFINITY).to_string(), "inf-infi");
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(format!("{:.2}", Complex::new(1.0 / 3.0, -2.0)), "0.33-2.00i");
        assert_eq!(format!("{:.0}", Complex::new(2.0, 1.0)), "2+1i");
    }

    #[test]
    fn test_from_str() {
        let z: Complex = "3 -2 i".parse().unwrap();
        assert_eq!(z, Complex::new(3.0, -2.0));

        let w: Complex = "  1.5\t0\n j ".parse().unwrap();
        assert_eq!(w, Complex::new(1.5, 0.0));

        let e: Complex = "1e3 -2.5e-1 unit".parse().unwrap();
        assert_eq!(e, Complex::new(1000.0, -0.25));
    }

    #[test]
    fn test_from_str_marker_not_validated() {
        let z: Complex = "3 2 whatever".parse().unwrap();
        assert_eq!(z, Complex::new(3.0, 2.0));
    }

    #[test]
    fn test_from_str_rejects_merged_form() {
        let result: Result<Complex, _> = "3-2i".parse();
        assert_eq!(result, Err(ParseError::InvalidNumber(Part::Real)));

        let result: Result<Complex, _> = "3+2i".parse();
        assert_eq!(result, Err(ParseError::InvalidNumber(Part::Real)));
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<Complex, _> = "".parse();
        assert_eq!(result, Err(ParseError::MissingToken(Part::Real)));

        let result: Result<Complex, _> = "3".parse();
        assert_eq!(result, Err(ParseError::MissingToken(Part::Imaginary)));

        let result: Result<Complex, _> = "3 -2".parse();
        assert_eq!(result, Err(ParseError::MissingToken(Part::Marker)));

        let result: Result<Complex, _> = "3 x i".parse();
        assert_eq!(result, Err(ParseError::InvalidNumber(Part::Imaginary)));

        let result: Result<Complex, _> = "3 -2 i 4".parse();
        assert_eq!(result, Err(ParseError::TrailingInput));
    }

    #[test]
    fn test_reader_across_lines() {
        let mut reader = ComplexReader::new("1 2\ni 3\n\n  4 j 5".as_bytes());

        assert_eq!(reader.read_complex(), Ok(Some(Complex::new(1.0, 2.0))));
        assert_eq!(reader.read_complex(), Ok(Some(Complex::new(3.0, 4.0))));
        // "5" starts a value that never finishes
        assert_eq!(reader.read_complex(), Err(ParseError::MissingToken(Part::Imaginary)));
        assert_eq!(reader.read_complex(), Ok(None));
    }

    #[test]
    fn test_reader_empty_input() {
        let mut reader = ComplexReader::new("  \n\t\n".as_bytes());
        assert_eq!(reader.read_complex(), Ok(None));
    }

    #[test]
    fn test_reader_iterator_stops_after_error() {
        let reader = ComplexReader::new("1 2 i\n3 oops i\n5 6 i".as_bytes());
        let results: Vec<_> = reader.collect();

        assert_eq!(
            results,
            vec![
                Ok(Complex::new(1.0, 2.0)),
                Err(ParseError::InvalidNumber(Part::Imaginary)),
            ]
        );
    }

    #[test]
    fn test_reader_io_error() {
        let bytes: &[u8] = &[0xff, 0xfe, b'\n'];
        let mut reader = ComplexReader::new(bytes);
        assert_eq!(
            reader.read_complex(),
            Err(ParseError::Io(io::ErrorKind::InvalidData))
        );
    }

    #[test]
    fn test_read_from_updates_target() {
        let mut reader = ComplexReader::new("3 -2 i".as_bytes());
        let mut z = Complex::new(9.0, 9.0);

        z.read_from(&mut reader).unwrap().mul_in_place(2.0);
        assert_eq!(z, Complex::new(6.0, -4.0));
    }

    #[test]
    fn test_read_from_failure_leaves_target() {
        let mut reader = ComplexReader::new("3 nope i".as_bytes());
        let mut z = Complex::new(9.0, 9.0);

        assert!(z.read_from(&mut reader).is_err());
        assert_eq!(z, Complex::new(9.0, 9.0));

        let mut empty = ComplexReader::new("".as_bytes());
        assert_eq!(
            z.read_from(&mut empty).map(|v| *v),
            Err(ParseError::MissingToken(Part::Real))
        );
    }

    quickcheck! {
        fn prop_spaced_display_parses_back(re: f64, im: f64) -> TestResult {
            if re.is_nan() || im.is_nan() {
                return TestResult::discard();
            }
            let input = format!("{} {} i", re, im);
            TestResult::from_bool(input.parse::<Complex>() == Ok(Complex::new(re, im)))
        }

        fn prop_merged_display_is_not_parseable(re: f64, im: f64) -> bool {
            Complex::new(re, im).to_string().parse::<Complex>().is_err()
        }

        fn prop_display_sign(re: f64, im: f64) -> bool {
            let text = Complex::new(re, im).to_string();
            let rest = &text[format!("{}", re).len()..];
            rest.ends_with('i') && (rest.starts_with('+') != (im < 0.0))
        }

        fn prop_reader_agrees_with_from_str(input: String) -> bool {
            match input.parse::<Complex>() {
                Ok(z) => match ComplexReader::new(input.as_bytes()).read_complex() {
                    Ok(Some(read)) => same(read, z),
                    _ => false,
                },
                Err(_) => true,
            }
        }
    }
}
