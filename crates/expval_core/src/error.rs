//! Error types for Expval
//!
//! Gantree: L0_Foundation → Errors
//!
//! Every failure is raised synchronously at the point of invocation. There is
//! no partial output: a call either fully succeeds or fully fails.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for Expval
/// Gantree: ExpvalError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpvalError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Invalid bitstring format
    /// Gantree: InvalidBitstring(String) // 비트열 형식
    #[error("Invalid bitstring '{0}': expected binary digits, '0b' or '0x' prefixed integer")]
    InvalidBitstring(String),

    /// Negative outcome key
    #[error("Invalid outcome {0}: outcomes must be non-negative")]
    NegativeOutcome(i64),

    /// Negative frequency
    #[error("Invalid frequency {frequency} for outcome {outcome}: frequencies must be non-negative")]
    NegativeFrequency { outcome: i64, frequency: i64 },

    /// Invalid Pauli label
    /// Gantree: InvalidPauliLabel(String) // 파울리 레이블
    #[error("Invalid Pauli label '{0}': expected optional phase followed by I, X, Y, Z")]
    InvalidPauliLabel(String),

    /// Pauli with zero qubits
    #[error("Pauli terms must act on at least one qubit")]
    EmptyPauli,

    /// Pauli wider than an outcome integer
    /// Gantree: TooManyQubits{{n,max}} // 큐비트 초과
    #[error("Pauli acts on {num_qubits} qubits but at most {max} are supported")]
    TooManyQubits { num_qubits: usize, max: usize },

    /// z and x vectors of different length
    #[error("Pauli z/x vectors differ in length: z={z_len}, x={x_len}")]
    SymplecticMismatch { z_len: usize, x_len: usize },

    /// Qubit index out of range
    #[error("Qubit {qubit} out of range: max is {max}")]
    QubitOutOfRange { qubit: usize, max: usize },

    /// Classical bit index out of range
    #[error("Classical bit {clbit} out of range: max is {max}")]
    ClbitOutOfRange { clbit: usize, max: usize },

    /// Measurement circuit without any measurement
    #[error("Measurement circuit has no measurements")]
    NoMeasurements,

    // ========================================================================
    // Operator Errors
    // ========================================================================
    /// Operator without terms
    /// Gantree: EmptyOperator // 빈 연산자
    #[error("Operator has no terms")]
    EmptyOperator,

    /// Terms of one operator act on different qubit counts
    /// Gantree: QubitCountMismatch{{expected,found}} // 큐비트 수 불일치
    #[error("Inconsistent qubit count: expected {expected}, found {found}")]
    QubitCountMismatch { expected: usize, found: usize },

    /// Pauli and coefficient lists of different length
    #[error("Got {paulis} Pauli terms but {coeffs} coefficients")]
    CoefficientMismatch { paulis: usize, coeffs: usize },

    /// Term index past the end of an operator
    #[error("Term {index} out of range: operator has {len} terms")]
    TermOutOfRange { index: usize, len: usize },

    /// Observable cannot be converted to a weighted operator
    #[error("Invalid observable: {0}")]
    InvalidObservable(String),

    // ========================================================================
    // Aggregation Errors
    // ========================================================================
    /// Parallel lists of counts and operators differ in length
    /// Gantree: LengthMismatch{{counts,operators}} // 길이 불일치
    #[error("The number of counts entries ({counts}) does not match the number of operators ({operators})")]
    LengthMismatch { counts: usize, operators: usize },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for Expval operations
/// Gantree: ExpvalResult<T> // type alias
pub type ExpvalResult<T> = Result<T, ExpvalError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for ExpvalError {
    fn from(err: serde_json::Error) -> Self {
        ExpvalError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl ExpvalError {
    /// Check if error signals input of the wrong kind
    ///
    /// These are inputs that cannot be interpreted as an outcome table or an
    /// operator at all (malformed labels or bitstrings).
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            ExpvalError::InvalidBitstring(_)
                | ExpvalError::InvalidPauliLabel(_)
                | ExpvalError::InvalidObservable(_)
                | ExpvalError::JsonError(_)
        )
    }

    /// Check if error signals a well-typed input with an invalid value
    pub fn is_value_error(&self) -> bool {
        matches!(
            self,
            ExpvalError::NegativeOutcome(_)
                | ExpvalError::NegativeFrequency { .. }
                | ExpvalError::EmptyPauli
                | ExpvalError::TooManyQubits { .. }
                | ExpvalError::SymplecticMismatch { .. }
                | ExpvalError::QubitOutOfRange { .. }
                | ExpvalError::ClbitOutOfRange { .. }
                | ExpvalError::NoMeasurements
                | ExpvalError::EmptyOperator
                | ExpvalError::QubitCountMismatch { .. }
                | ExpvalError::CoefficientMismatch { .. }
                | ExpvalError::TermOutOfRange { .. }
                | ExpvalError::LengthMismatch { .. }
                | ExpvalError::ConfigError(_)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
