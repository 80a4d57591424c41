//! Checked normalization.
//!
//! glam's `Vec3::normalize` yields NaN for a zero-length input; these
//! helpers reject it instead.

use crate::{MathError, MathResult, Vec3};

/// Normalize `v`, returning an error for zero-length or non-finite input.
#[inline]
pub fn try_unit_vector(v: Vec3) -> MathResult<Vec3> {
    let length = v.length();
    if length > 0.0 && length.is_finite() {
        Ok(v / length)
    } else {
        Err(MathError::DegenerateVector(v))
    }
}

/// Normalize `v`.
///
/// # Panics
///
/// Panics if `v` has zero or non-finite length.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    match try_unit_vector(v) {
        Ok(unit) => unit,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_vector_length() {
        let v = unit_vector(Vec3::new(3.0, 4.0, 12.0));
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v - Vec3::new(3.0, 4.0, 12.0) / 13.0).length() < 1e-6);
    }

    #[test]
    fn test_try_unit_vector_rejects_zero() {
        assert_eq!(
            try_unit_vector(Vec3::ZERO),
            Err(MathError::DegenerateVector(Vec3::ZERO))
        );
        assert!(try_unit_vector(Vec3::new(f32::INFINITY, 0.0, 0.0)).is_err());
    }

    #[test]
    #[should_panic(expected = "degenerate vector")]
    fn test_unit_vector_panics_on_zero() {
        unit_vector(Vec3::ZERO);
    }
}
