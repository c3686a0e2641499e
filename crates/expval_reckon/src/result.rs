//! Reckoning results
//!
//! Gantree: L4_Reckon → ReckoningResult
//!
//! An expectation value and its standard error, both complex. The real part
//! belongs to the Hermitian component of the observable, the imaginary part
//! to the anti-Hermitian one. Standard error components are never negative.

use expval_core::reckoning::{ZERO_SHOTS_EXPVAL, ZERO_SHOTS_STD_ERROR};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expectation value with standard error
/// Gantree: ReckoningResult // (expval, std_error)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReckoningResult {
    /// Expectation value
    pub expval: Complex64,

    /// Standard error, componentwise
    pub std_error: Complex64,
}

impl ReckoningResult {
    /// Create from complex parts
    pub fn new(expval: Complex64, std_error: Complex64) -> Self {
        Self { expval, std_error }
    }

    /// Create from real parts
    pub fn real(expval: f64, std_error: f64) -> Self {
        Self::new(Complex64::new(expval, 0.0), Complex64::new(std_error, 0.0))
    }

    /// Exact zero: no contributions at all
    pub fn zero() -> Self {
        Self::real(0.0, 0.0)
    }

    /// Result reported for a table without shots
    /// Gantree: zero_shots() -> Self // (0, 1)
    pub fn zero_shots() -> Self {
        Self::real(ZERO_SHOTS_EXPVAL, ZERO_SHOTS_STD_ERROR)
    }

    /// Check if both imaginary parts are within `tolerance` of zero
    pub fn is_real(&self, tolerance: f64) -> bool {
        self.expval.im.abs() <= tolerance && self.std_error.im.abs() <= tolerance
    }

    /// Real parts, if the result is real within `tolerance`
    /// Gantree: as_real(&self,tol) -> Option<(f64,f64)> // 실수 변환
    pub fn as_real(&self, tolerance: f64) -> Option<(f64, f64)> {
        self.is_real(tolerance)
            .then_some((self.expval.re, self.std_error.re))
    }

    /// Zero imaginary parts that are within `tolerance` of zero
    ///
    /// Expectation value and standard error are collapsed independently.
    pub fn real_if_close(self, tolerance: f64) -> Self {
        Self::new(
            collapse(self.expval, tolerance),
            collapse(self.std_error, tolerance),
        )
    }
}

fn collapse(value: Complex64, tolerance: f64) -> Complex64 {
    if value.im.abs() <= tolerance {
        Complex64::new(value.re, 0.0)
    } else {
        value
    }
}

impl Default for ReckoningResult {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<(f64, f64)> for ReckoningResult {
    fn from((expval, std_error): (f64, f64)) -> Self {
        Self::real(expval, std_error)
    }
}

impl fmt::Display for ReckoningResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expval.im == 0.0 && self.std_error.im == 0.0 {
            write!(f, "{:.6} ± {:.6}", self.expval.re, self.std_error.re)
        } else {
            write!(f, "({:.6}) ± ({:.6})", self.expval, self.std_error)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(ReckoningResult::zero_shots(), ReckoningResult::real(0.0, 1.0));
        assert_eq!(ReckoningResult::default(), ReckoningResult::zero());
        assert_eq!(ReckoningResult::from((0.5, 0.1)), ReckoningResult::real(0.5, 0.1));
    }

    #[test]
    fn test_real_collapse() {
        let result = ReckoningResult::new(Complex64::new(1.0, 1e-18), Complex64::new(0.5, 0.0));
        assert!(result.is_real(1e-12));
        assert_eq!(result.as_real(1e-12), Some((1.0, 0.5)));

        let collapsed = result.real_if_close(1e-12);
        assert_eq!(collapsed.expval, Complex64::new(1.0, 0.0));

        let complex = ReckoningResult::new(Complex64::new(0.0, 1.0), Complex64::new(0.0, 0.5));
        assert!(!complex.is_real(1e-12));
        assert_eq!(complex.as_real(1e-12), None);
        assert_eq!(complex.real_if_close(1e-12), complex);
    }

    #[test]
    fn test_display() {
        assert_eq!(ReckoningResult::real(0.5, 0.25).to_string(), "0.500000 ± 0.250000");
    }

    #[test]
    fn test_serde_roundtrip() {
        let result = ReckoningResult::new(Complex64::new(0.5, -1.0), Complex64::new(0.1, 0.2));
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"expval":[0.5,-1.0],"std_error":[0.1,0.2]}"#);
        let parsed: ReckoningResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
