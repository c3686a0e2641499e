//! Pauli measurement bases
//!
//! Gantree: L2_Circuit → PauliMeasurement
//!
//! Reading out a Pauli term means rotating every qubit in its support into the
//! computational basis and measuring it. Supported qubits are assigned
//! classical bits in ascending qubit order, so bit `k` of an outcome is the
//! `k`-th supported qubit.

use crate::builder::CircuitBuilder;
use crate::circuit::Circuit;
use crate::constants::register::IDENTITY_MEASUREMENT_QUBIT;
use crate::error::ExpvalResult;
use crate::pauli::Pauli;
use crate::types::{Basis, ClbitId, QubitId};
use serde::{Deserialize, Serialize};

/// Readout of one qubit
/// Gantree: QubitMeasurement // qubit, clbit, basis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QubitMeasurement {
    /// Measured qubit
    pub qubit: QubitId,
    /// Classical bit receiving the result
    pub clbit: ClbitId,
    /// Basis the qubit is read out in
    pub basis: Basis,
}

/// Measurement appendage for one Pauli basis
/// Gantree: PauliMeasurement // 측정 기저 기술자
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauliMeasurement {
    num_qubits: usize,
    label: String,
    measurements: Vec<QubitMeasurement>,
}

impl PauliMeasurement {
    /// Number of qubits of the measured register
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Basis label without phase, leftmost character is the highest qubit
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of classical bits written
    pub fn num_clbits(&self) -> usize {
        self.measurements.len()
    }

    /// Per-qubit readouts, ordered by classical bit
    pub fn measurements(&self) -> &[QubitMeasurement] {
        &self.measurements
    }

    /// Measured qubit indices, ordered by classical bit
    pub fn measured_qubits(&self) -> Vec<QubitId> {
        self.measurements.iter().map(|m| m.qubit).collect()
    }

    /// Render as a circuit named `meas_<label>`: rotation then measure, qubit by qubit
    /// Gantree: to_circuit(&self) -> Result<Circuit> // 회로 변환
    pub fn to_circuit(&self) -> ExpvalResult<Circuit> {
        let builder = CircuitBuilder::with_name(
            self.num_qubits,
            self.num_clbits(),
            format!("meas_{}", self.label),
        );
        let circuit = self
            .measurements
            .iter()
            .fold(builder, |builder, m| {
                builder.measure_in(m.qubit, m.clbit, m.basis)
            })
            .build_validated()?;
        log::trace!("{}", circuit);
        Ok(circuit)
    }
}

/// Measurement appendage that diagonalizes `pauli`
/// Gantree: build_measurement_basis(pauli) -> PauliMeasurement // 측정 기저
///
/// The phase of `pauli` plays no role. An all-identity term still measures
/// one qubit so that every circuit yields an outcome table.
pub fn build_measurement_basis(pauli: &Pauli) -> PauliMeasurement {
    let label: String = (0..pauli.num_qubits())
        .rev()
        .map(|q| match (pauli.z()[q], pauli.x()[q]) {
            (false, false) => 'I',
            (z, x) => Basis::from_symplectic(z, x).to_char(),
        })
        .collect();
    let support = pauli.support();
    let measurements = if support.is_empty() {
        vec![QubitMeasurement {
            qubit: IDENTITY_MEASUREMENT_QUBIT,
            clbit: 0,
            basis: Basis::Z,
        }]
    } else {
        support
            .into_iter()
            .enumerate()
            .map(|(clbit, qubit)| QubitMeasurement {
                qubit,
                clbit,
                basis: Basis::from_symplectic(pauli.z()[qubit], pauli.x()[qubit]),
            })
            .collect()
    };

    log::trace!(
        "measurement basis for {}: {} of {} qubits",
        pauli,
        measurements.len(),
        pauli.num_qubits()
    );
    PauliMeasurement {
        num_qubits: pauli.num_qubits(),
        label,
        measurements,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::Gate;

    fn circuit_for(label: &str) -> Circuit {
        let pauli = Pauli::from_label(label).unwrap();
        build_measurement_basis(&pauli).to_circuit().unwrap()
    }

    #[test]
    fn test_z_measurement() {
        let circuit = circuit_for("Z");
        assert_eq!(circuit.gates(), &[Gate::Measure(0, 0)]);
    }

    #[test]
    fn test_x_measurement() {
        let circuit = circuit_for("X");
        assert_eq!(circuit.gates(), &[Gate::H(0), Gate::Measure(0, 0)]);
    }

    #[test]
    fn test_y_measurement() {
        let circuit = circuit_for("Y");
        assert_eq!(circuit.num_qubits(), 1);
        assert_eq!(circuit.num_clbits(), 1);
        assert_eq!(
            circuit.gates(),
            &[Gate::Sdg(0), Gate::H(0), Gate::Measure(0, 0)]
        );
    }

    #[test]
    fn test_sparse_measurement() {
        let pauli = Pauli::from_label("YIX").unwrap();
        let meas = build_measurement_basis(&pauli);
        assert_eq!(meas.measured_qubits(), vec![0, 2]);
        assert_eq!(meas.num_clbits(), 2);

        let circuit = meas.to_circuit().unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(
            circuit.gates(),
            &[
                Gate::H(0),
                Gate::Measure(0, 0),
                Gate::Sdg(2),
                Gate::H(2),
                Gate::Measure(2, 1),
            ]
        );
        assert_eq!(circuit.measured_qubits(), vec![0, 2]);
        assert_eq!(meas.label(), "YIX");
        assert_eq!(circuit.name(), Some("meas_YIX"));
    }

    #[test]
    fn test_identity_measures_qubit_zero() {
        let circuit = circuit_for("II");
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 1);
        assert_eq!(circuit.gates(), &[Gate::Measure(0, 0)]);
        assert_eq!(circuit.name(), Some("meas_II"));
    }

    #[test]
    fn test_phase_ignored() {
        let plain = build_measurement_basis(&Pauli::from_label("XZ").unwrap());
        let phased = build_measurement_basis(&Pauli::from_label("-iXZ").unwrap());
        assert_eq!(plain, phased);
        assert_eq!(phased.label(), "XZ");
    }
}
