use std::fmt;
use std::ops::{Add, Div, Mul};

/// A complex number backed by two `f64` components.
///
/// Values are immutable once built; every arithmetic operation returns a new
/// number. Non-finite components are accepted and follow IEEE-754 rules.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexNumber {
    real: f64,
    imaginary: f64,
}

impl ComplexNumber {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);

    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    #[must_use]
    pub const fn real(&self) -> f64 {
        self.real
    }

    #[must_use]
    pub const fn imaginary(&self) -> f64 {
        self.imaginary
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }
}

impl Add for ComplexNumber {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imaginary: self.imaginary + other.imaginary,
        }
    }
}

impl Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imaginary * other.imaginary,
            imaginary: self.real * other.imaginary + self.imaginary * other.real,
        }
    }
}

impl Div for ComplexNumber {
    type Output = Self;

    /// Conjugate-method quotient. A zero divisor yields NaN or infinite
    /// components rather than a panic.
    fn div(self, other: Self) -> Self {
        let denominator = other.magnitude_squared();

        Self {
            real: (self.real * other.real + self.imaginary * other.imaginary) / denominator,
            imaginary: (self.imaginary * other.real - self.real * other.imaginary) / denominator,
        }
    }
}

/// Renders `<real> + <imaginary>i`. The sign of the imaginary part is never
/// folded into the separator, so `(2, -3)` prints as `2.0 + -3.0i`.
impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {}i",
            format_component(self.real),
            format_component(self.imaginary)
        )
    }
}

// Plain decimal in [1e-3, 1e7), `<mantissa>E<exp>` outside it.
fn format_component(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let magnitude = value.abs();

    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{value:?}");
    }

    // `{:e}` keeps the shortest mantissa, so `5e-324` renders as `5.0E-324`.
    let scientific = format!("{value:e}").replacen('e', "E", 1);

    if scientific.contains('.') {
        scientific
    } else {
        scientific.replacen('E', ".0E", 1)
    }
}
