// ============================================================================
// Complex Number
// Double-precision complex value type with a closed algebra over reals
// ============================================================================

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Complex number with `f64` real and imaginary parts.
///
/// Value semantics: copies are independent, and the parts can only be
/// changed through the type's own assignment operations.
///
/// # Operand Matrix
/// | Op  | `Complex ⊗ Complex` | `Complex ⊗ f64` | `f64 ⊗ Complex` |
/// |-----|---------------------|-----------------|-----------------|
/// | `+` | yes                 | yes             | yes             |
/// | `-` | yes                 | yes             | yes             |
/// | `*` | yes                 | yes             | yes             |
/// | `/` | no                  | yes             | no              |
///
/// Division by a complex divisor is deliberately absent.
///
/// # Example
/// ```
/// use complex_algebra::numeric::Complex;
///
/// let mut z = Complex::new(1.0, 1.0);
/// z += Complex::new(2.0, 3.0);
/// z *= 2.0;
/// assert_eq!(z, Complex::new(6.0, 8.0));
/// assert_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// Zero value (0+0i)
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Multiplicative identity (1+0i)
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// Imaginary unit (0+1i)
    pub const I: Self = Self::new(0.0, 1.0);

    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create from a real value; the imaginary part is zero.
    #[inline]
    pub const fn from_re(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn re(&self) -> f64 {
        self.re
    }

    #[inline]
    pub const fn im(&self) -> f64 {
        self.im
    }

    /// Overwrite both parts in place.
    ///
    /// The single-argument form is `set(re, 0.0)`.
    #[inline]
    pub fn set(&mut self, re: f64, im: f64) {
        self.re = re;
        self.im = im;
    }

    /// Plain assignment from a complex or real value.
    ///
    /// Assigning an `f64` sets the real part and zeroes the imaginary part,
    /// discarding whatever was there before.
    ///
    /// ```
    /// use complex_algebra::numeric::Complex;
    ///
    /// let mut z = Complex::new(1.0, 2.0);
    /// z.assign(5.0);
    /// assert_eq!((z.re(), z.im()), (5.0, 0.0));
    /// ```
    #[inline]
    pub fn assign<T: Into<Complex>>(&mut self, value: T) -> &mut Self {
        *self = value.into();
        self
    }

    // ========================================================================
    // Magnitude
    // ========================================================================

    /// Euclidean norm `sqrt(re² + im²)`.
    ///
    /// Computed directly without rescaling, so very large parts overflow to
    /// `+inf`. A NaN part yields NaN.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Narrowing conversion to a real scalar. Same value as [`magnitude`],
    /// so sign and phase are lost.
    ///
    /// [`magnitude`]: Complex::magnitude
    #[inline]
    pub fn to_scalar(&self) -> f64 {
        self.magnitude()
    }

    // ========================================================================
    // Chainable In-Place Arithmetic
    // ========================================================================
    //
    // Compound operator traits return `()`, these return the receiver so that
    // updates can be chained. The operand matrix is the one of the `*Assign`
    // impls below.

    #[inline]
    pub fn add_in_place<T>(&mut self, rhs: T) -> &mut Self
    where
        Self: AddAssign<T>,
    {
        *self += rhs;
        self
    }

    #[inline]
    pub fn sub_in_place<T>(&mut self, rhs: T) -> &mut Self
    where
        Self: SubAssign<T>,
    {
        *self -= rhs;
        self
    }

    #[inline]
    pub fn mul_in_place<T>(&mut self, rhs: T) -> &mut Self
    where
        Self: MulAssign<T>,
    {
        *self *= rhs;
        self
    }

    /// Only real divisors are accepted.
    #[inline]
    pub fn div_in_place<T>(&mut self, rhs: T) -> &mut Self
    where
        Self: DivAssign<T>,
    {
        *self /= rhs;
        self
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Self::from_re(re)
    }
}

impl From<Complex> for f64 {
    /// Explicit narrowing to the magnitude.
    #[inline]
    fn from(z: Complex) -> Self {
        z.to_scalar()
    }
}

// ============================================================================
// Complex ⊗ Complex
// ============================================================================

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        // Both parts must be computed from the old real part
        let re = self.re;
        self.re = re * rhs.re - self.im * rhs.im;
        self.im = re * rhs.im + self.im * rhs.re;
    }
}

// ============================================================================
// Complex ⊗ f64
// ============================================================================

impl Add<f64> for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        Self::new(self.re + rhs, self.im)
    }
}

impl Sub<f64> for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        Self::new(self.re - rhs, self.im)
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

impl Div<f64> for Complex {
    type Output = Self;

    /// Component-wise division. A zero divisor gives `±inf`/NaN parts.
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.re / rhs, self.im / rhs)
    }
}

impl AddAssign<f64> for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self.re += rhs;
    }
}

impl SubAssign<f64> for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        self.re -= rhs;
    }
}

impl MulAssign<f64> for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.re *= rhs;
        self.im *= rhs;
    }
}

impl DivAssign<f64> for Complex {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.re /= rhs;
        self.im /= rhs;
    }
}

// ============================================================================
// f64 ⊗ Complex
// ============================================================================

impl Add<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Self::Output {
        Complex::new(self + rhs.re, rhs.im)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Self::Output {
        Complex::new(self - rhs.re, -rhs.im)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Self::Output {
        Complex::new(self * rhs.re, self * rhs.im)
    }
}

// ============================================================================
// Tests
// ============================================================================
