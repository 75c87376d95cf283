use crate::core::data::complex::ComplexNumber;

/// Named constructor for [`ComplexNumber`].
pub struct ComplexNumberFactory;

impl ComplexNumberFactory {
    #[must_use]
    pub const fn create(real: f64, imaginary: f64) -> ComplexNumber {
        ComplexNumber::new(real, imaginary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_matches_direct_construction() {
        assert_eq!(
            ComplexNumberFactory::create(2.0, 3.0),
            ComplexNumber::new(2.0, 3.0)
        );
    }

    #[test]
    fn test_create_accepts_non_finite_components() {
        let c = ComplexNumberFactory::create(f64::NAN, f64::INFINITY);

        assert!(c.real().is_nan());
        assert_eq!(c.imaginary(), f64::INFINITY);
    }
}
