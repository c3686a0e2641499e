//! Constants for Expval
//!
//! Gantree: L0_Foundation → Constants
//!
//! Register limits and numeric conventions shared by decomposition and
//! reckoning.

// ============================================================================
// Register Constants
// Gantree: register // 레지스터 상수
// ============================================================================

pub mod register {
    //! Limits of the integer outcome encoding

    /// Bits available in one outcome integer (bit i ↔ qubit i)
    /// Gantree: OUTCOME_BITS: usize = 64
    pub const OUTCOME_BITS: usize = u64::BITS as usize;

    /// Widest Pauli term whose support fits in an outcome mask
    /// Gantree: MAX_QUBITS: usize = 64
    pub const MAX_QUBITS: usize = OUTCOME_BITS;

    /// Qubit measured when a Pauli term has no support at all
    pub const IDENTITY_MEASUREMENT_QUBIT: usize = 0;
}

// ============================================================================
// Reckoning Constants
// Gantree: reckoning // 추정 상수
// ============================================================================

pub mod reckoning {
    //! Numeric conventions for expectation value reckoning

    /// Expectation value reported for a table with zero shots
    /// Gantree: ZERO_SHOTS_EXPVAL: f64 = 0.0
    pub const ZERO_SHOTS_EXPVAL: f64 = 0.0;

    /// Standard error reported for a table with zero shots (maximal uncertainty)
    /// Gantree: ZERO_SHOTS_STD_ERROR: f64 = 1.0
    pub const ZERO_SHOTS_STD_ERROR: f64 = 1.0;

    /// Imaginary parts below this magnitude are considered zero
    ///
    /// Matches a hundred machine epsilons, the usual "real if close" cutoff.
    pub const DEFAULT_REAL_TOLERANCE: f64 = 100.0 * f64::EPSILON;

    /// Largest tolerance accepted by configuration validation
    pub const MAX_REAL_TOLERANCE: f64 = 1e-3;
}

// ============================================================================
// Tests
// ============================================================================
