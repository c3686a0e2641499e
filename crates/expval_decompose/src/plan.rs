//! Measurement plans
//!
//! Gantree: L3_Decompose → MeasurementPlan
//!
//! One [`MeasurementSetting`] per decomposition component: what to append to
//! the state-preparation circuit, which qubits come back, and the component
//! rewritten over exactly those qubits so that it can be reckoned directly
//! against the returned outcome table.

use crate::decomposer::OperatorDecomposer;
use expval_core::{
    build_measurement_basis, Circuit, ExpvalResult, Observable, Pauli, PauliMeasurement, QubitId,
    SparsePauliOp,
};
use serde::{Deserialize, Serialize};

/// Measurement of one decomposition component
/// Gantree: MeasurementSetting // component, basis, measurement, reduced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSetting {
    /// Component over the full register
    pub component: SparsePauliOp,

    /// Shared measurement basis of the component
    pub basis: Pauli,

    /// Measurement appendage for `basis`
    pub measurement: PauliMeasurement,

    /// Measured qubits, ordered by classical bit
    pub measured_qubits: Vec<QubitId>,

    /// Component restricted to `measured_qubits`
    pub reduced: SparsePauliOp,
}

impl MeasurementSetting {
    /// Build the setting for one component
    /// Gantree: for_component(decomposer, component) -> Result<Self> // 설정 생성
    pub fn for_component(
        decomposer: &dyn OperatorDecomposer,
        component: SparsePauliOp,
    ) -> ExpvalResult<Self> {
        let basis = decomposer.extract_basis(&component);
        let measurement = build_measurement_basis(&basis);
        let measured_qubits = measurement.measured_qubits();
        let reduced = component.restrict(&measured_qubits)?;
        Ok(Self {
            component,
            basis,
            measurement,
            measured_qubits,
            reduced,
        })
    }

    /// Measurement appendage as a circuit
    pub fn circuit(&self) -> ExpvalResult<Circuit> {
        self.measurement.to_circuit()
    }

    /// Measurement appendage as an OpenQASM 2.0 program
    /// Gantree: to_qasm(&self) -> Result<String> // QASM 출력
    pub fn to_qasm(&self) -> ExpvalResult<String> {
        self.circuit().map(|circuit| circuit.to_qasm())
    }
}

/// Plan the measurements of a whole operator
/// Gantree: plan_measurements(decomposer, op) -> Result<Vec<Setting>> // 측정 계획
pub fn plan_measurements(
    decomposer: &dyn OperatorDecomposer,
    operator: &SparsePauliOp,
) -> ExpvalResult<Vec<MeasurementSetting>> {
    let settings = decomposer
        .decompose(operator)
        .into_iter()
        .map(|component| MeasurementSetting::for_component(decomposer, component))
        .collect::<ExpvalResult<Vec<_>>>()?;

    log::debug!(
        "{} plan: {} terms on {} qubits -> {} settings",
        decomposer.name(),
        operator.len(),
        operator.num_qubits(),
        settings.len()
    );
    Ok(settings)
}

/// Convert an observable, then plan its measurements
pub fn plan_observable(
    decomposer: &dyn OperatorDecomposer,
    observable: &Observable,
) -> ExpvalResult<Vec<MeasurementSetting>> {
    let operator = observable.to_operator()?;
    plan_measurements(decomposer, &operator)
}

// ============================================================================
// Tests
// ============================================================================
