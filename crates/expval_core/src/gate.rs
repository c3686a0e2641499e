//! Gates of the measurement appendage
//!
//! Gantree: L2_Circuit → Gate
//!
//! Only the instructions needed to rotate a register into a Pauli eigenbasis
//! and read it out.

use crate::types::{Basis, ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Measurement-appendage gate
/// Gantree: Gate // 게이트 enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard gate
    /// Gantree: H(QubitId) // 하다마드
    H(QubitId),

    /// S-dagger gate (inverse of S)
    /// Gantree: Sdg(QubitId) // S†
    Sdg(QubitId),

    /// Measure a qubit into a classical bit
    /// Gantree: Measure(QubitId, ClbitId) // 측정
    Measure(QubitId, ClbitId),
}

impl Gate {
    /// Qubit acted on
    pub fn qubit(&self) -> QubitId {
        match self {
            Gate::H(q) | Gate::Sdg(q) | Gate::Measure(q, _) => *q,
        }
    }

    /// Classical bit written, if any
    pub fn clbit(&self) -> Option<ClbitId> {
        match self {
            Gate::Measure(_, c) => Some(*c),
            _ => None,
        }
    }

    /// Check if gate is a measurement
    pub fn is_measurement(&self) -> bool {
        matches!(self, Gate::Measure(..))
    }

    /// Gate name
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H(_) => "h",
            Gate::Sdg(_) => "sdg",
            Gate::Measure(..) => "measure",
        }
    }

    /// Convert to OpenQASM 2.0 string
    /// Gantree: to_qasm(&self) -> String // QASM 변환
    pub fn to_qasm(&self) -> String {
        match self {
            Gate::H(q) => format!("h q[{}];", q),
            Gate::Sdg(q) => format!("sdg q[{}];", q),
            Gate::Measure(q, c) => format!("measure q[{}] -> c[{}];", q, c),
        }
    }

    /// Rotation taking `basis` eigenstates onto the computational basis
    /// Gantree: basis_transform(q, basis) -> Vec<Gate> // 기저 변환
    pub fn basis_transform(qubit: QubitId, basis: Basis) -> Vec<Gate> {
        match basis {
            Basis::X => vec![Gate::H(qubit)],
            Basis::Y => vec![Gate::Sdg(qubit), Gate::H(qubit)],
            Basis::Z => vec![],
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_qasm())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_accessors() {
        assert_eq!(Gate::H(3).qubit(), 3);
        assert_eq!(Gate::Measure(2, 0).qubit(), 2);
        assert_eq!(Gate::Measure(2, 0).clbit(), Some(0));
        assert_eq!(Gate::Sdg(1).clbit(), None);
        assert!(Gate::Measure(0, 0).is_measurement());
        assert!(!Gate::H(0).is_measurement());
    }

    #[test]
    fn test_gate_to_qasm() {
        assert_eq!(Gate::H(0).to_qasm(), "h q[0];");
        assert_eq!(Gate::Sdg(4).to_qasm(), "sdg q[4];");
        assert_eq!(Gate::Measure(2, 1).to_qasm(), "measure q[2] -> c[1];");
        assert_eq!(Gate::Measure(2, 1).name(), "measure");
    }

    #[test]
    fn test_basis_transform() {
        let x_gates = Gate::basis_transform(0, Basis::X);
        assert_eq!(x_gates, vec![Gate::H(0)]);

        let y_gates = Gate::basis_transform(5, Basis::Y);
        assert_eq!(y_gates, vec![Gate::Sdg(5), Gate::H(5)]);

        assert!(Gate::basis_transform(0, Basis::Z).is_empty());
    }
}
