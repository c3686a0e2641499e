//! Expectation value reckoning
//!
//! Gantree: L4_Reckon → ExpvalReckoner
//!
//! Four levels, each built on the one below:
//!
//! 1. outcome table: parity expectation of the measured bits
//! 2. Pauli term: mask the table to the term's support, then level 1
//! 3. weighted operator: coefficient-weighted sum of level 1 over the terms
//! 4. list of (table, operator) pairs: sum of level 3
//!
//! Tables are assumed to come from circuits that already rotated every
//! measured qubit into the computational basis, so X, Y and Z are treated
//! alike.

use crate::result::ReckoningResult;
use expval_core::reckoning::DEFAULT_REAL_TOLERANCE;
use expval_core::{
    parity_sign, Counts, ExpvalError, ExpvalResult, Observable, Pauli, SparsePauliOp,
};
use num_complex::Complex64;

// ============================================================================
// Trait
// ============================================================================

/// Reckons expectation values and standard errors from outcome tables
/// Gantree: ExpvalReckoner // 기대값 추정 인터페이스
///
/// Implementors supply level 1; the higher levels are provided.
pub trait ExpvalReckoner: Send + Sync {
    /// Parity expectation of a whole outcome table
    /// Gantree: reckon_outcomes(counts) -> ReckoningResult // 1단계
    ///
    /// The result is real.
    fn reckon_outcomes(&self, counts: &Counts) -> ReckoningResult;

    /// Imaginary parts at most this large are reported as zero
    fn real_tolerance(&self) -> f64 {
        DEFAULT_REAL_TOLERANCE
    }

    /// Expectation value of one Pauli term
    /// Gantree: reckon_pauli(counts, pauli) -> ReckoningResult // 2단계
    ///
    /// The term's phase is folded in: the expectation value is multiplied by
    /// it and the standard error lands in the real slot for ±1 and in the
    /// imaginary slot for ±i.
    fn reckon_pauli(&self, counts: &Counts, pauli: &Pauli) -> ReckoningResult {
        let masked = counts.apply_mask(pauli.integer_mask());
        let base = self.reckon_outcomes(&masked);
        let phase = pauli.phase();

        let expval = phase.to_complex() * base.expval.re;
        let std_error = if phase.is_real() {
            Complex64::new(base.std_error.re, 0.0)
        } else {
            Complex64::new(0.0, base.std_error.re)
        };
        ReckoningResult::new(expval, std_error).real_if_close(self.real_tolerance())
    }

    /// Expectation value of a weighted operator
    /// Gantree: reckon_operator(counts, op) -> ReckoningResult // 3단계
    ///
    /// With effective coefficient `c = coeff * phase` per term:
    /// `expval = Σ c·v` and the standard error combines the real and
    /// imaginary parts of `c` in separate quadrature sums.
    fn reckon_operator(&self, counts: &Counts, operator: &SparsePauliOp) -> ReckoningResult {
        let mut expval = Complex64::new(0.0, 0.0);
        let mut variance_real = 0.0_f64;
        let mut variance_imag = 0.0_f64;

        for (pauli, coeff) in operator.iter() {
            let coeff = coeff * pauli.phase().to_complex();
            let term = self.reckon_outcomes(&counts.apply_mask(pauli.integer_mask()));
            let (value, error) = (term.expval.re, term.std_error.re);
            log::trace!("term {}: value={}, std_error={}", pauli, value, error);

            expval += coeff * value;
            variance_real += (error * coeff.re).powi(2);
            variance_imag += (error * coeff.im).powi(2);
        }

        let std_error = Complex64::new(variance_real.sqrt(), variance_imag.sqrt());
        ReckoningResult::new(expval, std_error).real_if_close(self.real_tolerance())
    }

    /// Sum over parallel lists of tables and operators
    /// Gantree: reckon(counts_list, ops) -> Result<ReckoningResult> // 4단계
    ///
    /// Real and imaginary standard errors are combined in quadrature,
    /// independently. Empty lists give an exact zero.
    fn reckon(
        &self,
        counts_list: &[Counts],
        operators: &[SparsePauliOp],
    ) -> ExpvalResult<ReckoningResult> {
        if counts_list.len() != operators.len() {
            return Err(ExpvalError::LengthMismatch {
                counts: counts_list.len(),
                operators: operators.len(),
            });
        }

        let mut expval = Complex64::new(0.0, 0.0);
        let mut variance_real = 0.0_f64;
        let mut variance_imag = 0.0_f64;

        for (counts, operator) in counts_list.iter().zip(operators) {
            let part = self.reckon_operator(counts, operator);
            expval += part.expval;
            variance_real += part.std_error.re.powi(2);
            variance_imag += part.std_error.im.powi(2);
        }

        let std_error = Complex64::new(variance_real.sqrt(), variance_imag.sqrt());
        let result = ReckoningResult::new(expval, std_error).real_if_close(self.real_tolerance());
        log::debug!(
            "reckoned {} operators: {}",
            operators.len(),
            result
        );
        Ok(result)
    }

    /// Level 4 on observables in any accepted form
    ///
    /// Every observable is converted first; nothing is reckoned unless all
    /// of them are valid and the lists line up.
    fn reckon_observables(
        &self,
        counts_list: &[Counts],
        observables: &[Observable],
    ) -> ExpvalResult<ReckoningResult> {
        let operators = observables
            .iter()
            .map(Observable::to_operator)
            .collect::<ExpvalResult<Vec<_>>>()?;
        self.reckon(counts_list, &operators)
    }
}

// ============================================================================
// Canonical Implementation
// ============================================================================

/// Standard parity-based reckoner
/// Gantree: CanonicalReckoner // 표준 추정기
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalReckoner {
    real_tolerance: f64,
}

impl CanonicalReckoner {
    /// Create with the default real tolerance
    pub fn new() -> Self {
        Self {
            real_tolerance: DEFAULT_REAL_TOLERANCE,
        }
    }

    /// Set real tolerance
    pub fn with_real_tolerance(mut self, tolerance: f64) -> Self {
        self.real_tolerance = tolerance;
        self
    }
}

impl Default for CanonicalReckoner {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpvalReckoner for CanonicalReckoner {
    /// `expval = Σ (-1)^parity(o)·freq / shots`,
    /// `std_error = sqrt((1 - expval²) / shots)`
    fn reckon_outcomes(&self, counts: &Counts) -> ReckoningResult {
        let shots = counts.shots();
        if shots == 0 {
            log::debug!("empty outcome table, reporting maximal uncertainty");
            return ReckoningResult::zero_shots();
        }

        let shots = shots as f64;
        let expval: f64 = counts
            .iter()
            .map(|(outcome, freq)| f64::from(parity_sign(outcome)) * freq as f64 / shots)
            .sum();
        // Rounding can push |expval| a hair past 1
        let variance = (1.0 - expval * expval).max(0.0);
        ReckoningResult::real(expval, (variance / shots).sqrt())
    }

    fn real_tolerance(&self) -> f64 {
        self.real_tolerance
    }
}

// ============================================================================
// Tests
// ============================================================================
