//! Measurement circuit structure
//!
//! Gantree: L2_Circuit → Circuit
//!
//! A flat gate list over a quantum and a classical register. Every gate is
//! range-checked when it is added.

use crate::error::{ExpvalError, ExpvalResult};
use crate::gate::Gate;
use crate::types::{ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum circuit
/// Gantree: Circuit // 회로 구조체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits
    /// Gantree: num_qubits: usize // 큐비트 수
    num_qubits: usize,

    /// Number of classical bits
    num_clbits: usize,

    /// Gate sequence
    /// Gantree: gates: Vec<Gate> // 게이트 목록
    gates: Vec<Gate>,

    /// Optional circuit name
    name: Option<String>,
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty circuit
    /// Gantree: new(n,c) -> Self // 생성자
    pub fn new(num_qubits: usize, num_clbits: usize) -> Self {
        Self {
            num_qubits,
            num_clbits,
            gates: Vec::new(),
            name: None,
        }
    }

    /// Create a circuit with a name
    pub fn with_name(num_qubits: usize, num_clbits: usize, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(num_qubits, num_clbits)
        }
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Add a gate to the circuit
    /// Gantree: add_gate(&mut, Gate) -> Result // 게이트 추가
    pub fn add_gate(&mut self, gate: Gate) -> ExpvalResult<()> {
        let qubit = gate.qubit();
        if qubit >= self.num_qubits {
            return Err(ExpvalError::QubitOutOfRange {
                qubit,
                max: self.num_qubits.saturating_sub(1),
            });
        }
        if let Some(clbit) = gate.clbit() {
            if clbit >= self.num_clbits {
                return Err(ExpvalError::ClbitOutOfRange {
                    clbit,
                    max: self.num_clbits.saturating_sub(1),
                });
            }
        }
        self.gates.push(gate);
        Ok(())
    }

    /// Add multiple gates
    pub fn add_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> ExpvalResult<()> {
        for gate in gates {
            self.add_gate(gate)?;
        }
        Ok(())
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get number of classical bits
    pub fn num_clbits(&self) -> usize {
        self.num_clbits
    }

    /// Get gates
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get circuit name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check if circuit is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Total gate count
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Count measurement instructions
    pub fn count_measurements(&self) -> usize {
        self.gates.iter().filter(|g| g.is_measurement()).count()
    }

    // ========================================================================
    // Measurement Layout
    // ========================================================================

    /// (qubit, clbit) pairs of all measurements, in program order
    pub fn measurements(&self) -> Vec<(QubitId, ClbitId)> {
        self.gates
            .iter()
            .filter_map(|g| match g {
                Gate::Measure(q, c) => Some((*q, *c)),
                _ => None,
            })
            .collect()
    }

    /// Measured qubits ordered by the classical bit they land in
    /// Gantree: measured_qubits(&self) -> Vec<QubitId> // 측정 큐비트
    ///
    /// Entry `k` is the qubit whose result is bit `k` of an outcome integer.
    pub fn measured_qubits(&self) -> Vec<QubitId> {
        let mut pairs = self.measurements();
        pairs.sort_by_key(|&(_, c)| c);
        pairs.into_iter().map(|(q, _)| q).collect()
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Export to OpenQASM 2.0
    /// Gantree: to_qasm(&self) -> String // QASM2 출력
    pub fn to_qasm(&self) -> String {
        let mut lines = Vec::new();

        // Header
        lines.push("OPENQASM 2.0;".to_string());
        lines.push("include \"qelib1.inc\";".to_string());
        lines.push(String::new());

        // Register declarations
        lines.push(format!("qreg q[{}];", self.num_qubits));
        lines.push(format!("creg c[{}];", self.num_clbits));
        lines.push(String::new());

        for gate in &self.gates {
            lines.push(gate.to_qasm());
        }

        lines.join("\n")
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit({}q, {}c, {} gates)",
            self.num_qubits,
            self.num_clbits,
            self.gates.len()
        )?;
        for gate in &self.gates {
            writeln!(f, "  {}", gate)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
