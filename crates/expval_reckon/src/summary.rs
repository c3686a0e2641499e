//! Estimate summaries
//!
//! Gantree: L5_Estimator → EstimateSummary
//!
//! Shot bookkeeping that accompanies a reckoned expectation value.

use crate::result::ReckoningResult;
use expval_core::Counts;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expectation value with shot metadata
/// Gantree: EstimateSummary // 결과 메타데이터
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateSummary {
    /// Expectation value
    pub expval: Complex64,

    /// Standard error of the expectation value
    pub std_error: Complex64,

    /// Single-shot variance per component: `shots_per_circuit · std_error²`
    pub variance: Complex64,

    /// Square root of `variance`, per component
    pub std_dev: Complex64,

    /// Total shots over all circuits
    pub shots: u64,

    /// Mean shots per circuit
    pub shots_per_circuit: f64,

    /// Number of circuits (outcome tables)
    pub num_circuits: usize,
}

impl EstimateSummary {
    /// Assemble from the outcome tables and their reckoned result
    /// Gantree: from_reckoning(counts_list, result) -> Self // 요약 생성
    pub fn from_reckoning(counts_list: &[Counts], result: ReckoningResult) -> Self {
        let num_circuits = counts_list.len();
        let shots = counts_list
            .iter()
            .fold(0u64, |acc, counts| acc.saturating_add(counts.shots()));
        let shots_per_circuit = shots as f64 / num_circuits.max(1) as f64;

        let std_error = result.std_error;
        let variance = Complex64::new(
            shots_per_circuit * std_error.re * std_error.re,
            shots_per_circuit * std_error.im * std_error.im,
        );
        let std_dev = Complex64::new(variance.re.sqrt(), variance.im.sqrt());

        Self {
            expval: result.expval,
            std_error,
            variance,
            std_dev,
            shots,
            shots_per_circuit,
            num_circuits,
        }
    }

    /// Reckoning part of the summary
    pub fn result(&self) -> ReckoningResult {
        ReckoningResult::new(self.expval, self.std_error)
    }
}

impl fmt::Display for EstimateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EstimateSummary({}, shots={}, circuits={})",
            self.result(),
            self.shots,
            self.num_circuits
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_arithmetic() {
        let counts = vec![Counts::from([(0, 30), (1, 10)]), Counts::from([(0, 60)])];
        let summary = EstimateSummary::from_reckoning(&counts, ReckoningResult::real(0.5, 0.1));

        assert_eq!(summary.shots, 100);
        assert_eq!(summary.num_circuits, 2);
        assert_relative_eq!(summary.shots_per_circuit, 50.0);
        assert_relative_eq!(summary.variance.re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(summary.std_dev.re, 0.5f64.sqrt(), epsilon = 1e-12);
        assert_eq!(summary.variance.im, 0.0);
        assert_eq!(summary.result(), ReckoningResult::real(0.5, 0.1));
    }

    #[test]
    fn test_summary_complex_components() {
        let counts = vec![Counts::from([(0, 4)])];
        let result = ReckoningResult::new(Complex64::new(0.0, 1.0), Complex64::new(0.5, 0.25));
        let summary = EstimateSummary::from_reckoning(&counts, result);

        assert_relative_eq!(summary.variance.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(summary.variance.im, 0.25, epsilon = 1e-12);
        assert_relative_eq!(summary.std_dev.im, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_summary_without_circuits() {
        let summary = EstimateSummary::from_reckoning(&[], ReckoningResult::zero());
        assert_eq!(summary.shots, 0);
        assert_eq!(summary.num_circuits, 0);
        assert_eq!(summary.shots_per_circuit, 0.0);
        assert_eq!(summary.variance, Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_serde_roundtrip() {
        let summary =
            EstimateSummary::from_reckoning(&[Counts::from([(0, 8)])], ReckoningResult::real(1.0, 0.0));
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"shots\":8"));
        let parsed: EstimateSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
