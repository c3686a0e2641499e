//! Core types for Expval
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Fundamental type aliases and the single-qubit measurement basis.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed)
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

/// Classical bit identifier (0-indexed)
/// Gantree: ClbitId // pub type ClbitId = usize
pub type ClbitId = usize;

/// Integer encoding of a measurement result, bit i ↔ classical bit i
/// Gantree: Outcome // pub type Outcome = u64
pub type Outcome = u64;

/// Number of shots producing one outcome
/// Gantree: Frequency // pub type Frequency = u64
pub type Frequency = u64;

// ============================================================================
// MeasurementBasis
// ============================================================================

/// Measurement basis for a single qubit
/// Gantree: Basis // X/Y/Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// X (Hadamard) basis
    X,
    /// Y basis
    Y,
    /// Z (computational) basis
    Z,
}

impl Basis {
    /// Basis that diagonalizes a single-qubit Pauli given its symplectic bits
    ///
    /// Identity (no z, no x) is read out in the computational basis.
    pub fn from_symplectic(z: bool, x: bool) -> Self {
        match (z, x) {
            (true, true) => Basis::Y,
            (false, true) => Basis::X,
            _ => Basis::Z,
        }
    }

    /// Convert to character
    pub fn to_char(&self) -> char {
        match self {
            Basis::X => 'X',
            Basis::Y => 'Y',
            Basis::Z => 'Z',
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// ============================================================================
// Tests
// ============================================================================
