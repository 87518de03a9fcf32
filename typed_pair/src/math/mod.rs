mod error;

pub use error::MathError;

use log::warn;

/// Divides two integers, producing a floating point quotient.
///
/// A zero denominator is reported as [`MathError::DivideByZero`]
/// instead of producing an infinite result.
pub fn divide(numerator: i32, denominator: i32) -> Result<f32, MathError> {
    if denominator == 0 {
        warn!("Refusing to divide {} by zero", numerator);
        return Err(MathError::DivideByZero);
    }

    Ok(numerator as f32 / denominator as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotient() {
        assert_eq!(divide(1, 4).unwrap(), 0.25);
        assert_eq!(divide(9, 3).unwrap(), 3.0);
        assert_eq!(divide(-6, 4).unwrap(), -1.5);
    }

    #[test]
    fn zero_denominator() {
        let error = divide(1, 0).unwrap_err();

        assert_eq!(error, MathError::DivideByZero);
        assert_eq!(error.to_string(), "division by zero");
    }

    #[test]
    fn zero_numerator_is_fine() {
        assert_eq!(divide(0, 7).unwrap(), 0.0);
    }
}
