//! Circuit builder
//!
//! Gantree: L2_Circuit → CircuitBuilder
//!
//! Fluent construction of measurement circuits. The first invalid gate is
//! remembered and reported by [`CircuitBuilder::build`]; gates after it are
//! ignored.

use crate::circuit::Circuit;
use crate::error::{ExpvalError, ExpvalResult};
use crate::gate::Gate;
use crate::types::{Basis, ClbitId, QubitId};

/// Fluent circuit builder (consuming self pattern)
/// Gantree: CircuitBuilder // 빌더 패턴
#[derive(Debug, Clone)]
pub struct CircuitBuilder {
    /// Internal circuit being built
    /// Gantree: circuit: Circuit // 내부 회로
    circuit: Circuit,

    /// First error hit while adding gates
    error: Option<ExpvalError>,
}

impl CircuitBuilder {
    /// Create a new circuit builder
    /// Gantree: new(n,c) -> Self // 생성자
    pub fn new(num_qubits: usize, num_clbits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits, num_clbits),
            error: None,
        }
    }

    /// Create with circuit name
    pub fn with_name(num_qubits: usize, num_clbits: usize, name: impl Into<String>) -> Self {
        Self {
            circuit: Circuit::with_name(num_qubits, num_clbits, name),
            error: None,
        }
    }

    fn push(mut self, gate: Gate) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.circuit.add_gate(gate) {
                self.error = Some(err);
            }
        }
        self
    }

    // ========================================================================
    // Gates
    // ========================================================================

    /// Add Hadamard gate
    /// Gantree: h(self, q) -> Self // H 추가
    pub fn h(self, qubit: QubitId) -> Self {
        self.push(Gate::H(qubit))
    }

    /// Add S-dagger gate
    /// Gantree: sdg(self, q) -> Self // Sdg 추가
    pub fn sdg(self, qubit: QubitId) -> Self {
        self.push(Gate::Sdg(qubit))
    }

    /// Add measurement of `qubit` into `clbit`
    /// Gantree: measure(self, q, c) -> Self // 측정 추가
    pub fn measure(self, qubit: QubitId, clbit: ClbitId) -> Self {
        self.push(Gate::Measure(qubit, clbit))
    }

    /// Rotate one qubit so that `basis` is read out in the computational basis
    /// Gantree: apply_basis(self, q, basis) -> Self // 기저 변환
    pub fn apply_basis(self, qubit: QubitId, basis: Basis) -> Self {
        Gate::basis_transform(qubit, basis)
            .into_iter()
            .fold(self, |builder, gate| builder.push(gate))
    }

    /// Rotate into `basis` then measure
    pub fn measure_in(self, qubit: QubitId, clbit: ClbitId, basis: Basis) -> Self {
        self.apply_basis(qubit, basis).measure(qubit, clbit)
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Finish, reporting the first invalid gate if any
    /// Gantree: build(self) -> Result<Circuit> // 빌드
    pub fn build(self) -> ExpvalResult<Circuit> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.circuit),
        }
    }

    /// Build, additionally rejecting circuits without any measurement
    pub fn build_validated(self) -> ExpvalResult<Circuit> {
        let circuit = self.build()?;
        if circuit.count_measurements() == 0 {
            return Err(ExpvalError::NoMeasurements);
        }
        Ok(circuit)
    }
}

// ============================================================================
// Tests
// ============================================================================
