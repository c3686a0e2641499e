//! # Expval Core
//!
//! Outcome tables, Pauli operators and measurement circuits for expectation
//! value reckoning.
//!
//! ## Gantree Architecture
//!
//! ```text
//! expval_core // L0-L2: Foundation + Counts + Operators + Circuit (완료)
//!     L0_Foundation // 기반 타입/상수/에러 (완료)
//!         CoreTypes // 핵심 타입 (완료)
//!         Constants // 레지스터/추정 상수 (완료)
//!         Errors // 에러 타입 (완료)
//!         Binary // 비트/홀짝 (완료)
//!     L1_Counts // 측정 히스토그램 (완료)
//!         Counts // 불변 테이블 (완료)
//!         CountsTransform // map/bitflip/mask (완료)
//!     L1_Operators // 파울리 연산자 (완료)
//!         Pauli // 위상 포함 파울리 항 (완료)
//!         PauliMaskCodec // 정수 마스크 (완료)
//!         SparsePauliOp // 가중 합 (완료)
//!         Observable // 입력 형식 (완료)
//!     L2_Circuit // 측정 회로 (완료)
//!         Gate // H/Sdg/Measure (완료)
//!         Circuit // 회로 구조체 (완료)
//!         CircuitBuilder // 빌더 패턴 (완료)
//!         PauliMeasurement // 측정 기저 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use expval_core::prelude::*;
//!
//! let pauli = Pauli::from_label("YIX").unwrap();
//! assert_eq!(pauli.integer_mask(), 0b101);
//!
//! let circuit = build_measurement_basis(&pauli).to_circuit().unwrap();
//! assert_eq!(circuit.measured_qubits(), vec![0, 2]);
//! println!("{}", circuit.to_qasm());
//! ```
//!
//! ## Counts Transforms
//!
//! ```rust
//! use expval_core::prelude::*;
//!
//! let counts = Counts::from([(0, 0), (1, 1), (2, 2), (3, 3)]);
//! assert_eq!(counts.apply_mask(1), Counts::from([(0, 2), (1, 4)]));
//! assert_eq!(counts.bitflip(1).shots(), counts.shots());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Bit-level helpers (Gantree: L0_Foundation → Binary)
pub mod binary;

/// Outcome tables (Gantree: L1_Counts → Counts)
pub mod counts;

/// Pauli terms (Gantree: L1_Operators → Pauli)
pub mod pauli;

/// Weighted operators (Gantree: L1_Operators → SparsePauliOp)
pub mod operator;

/// Observable input forms (Gantree: L1_Operators → Observable)
pub mod observable;

/// Measurement gates (Gantree: L2_Circuit → Gate)
pub mod gate;

/// Circuit structure (Gantree: L2_Circuit → Circuit)
pub mod circuit;

/// Circuit builder (Gantree: L2_Circuit → CircuitBuilder)
pub mod builder;

/// Measurement bases (Gantree: L2_Circuit → PauliMeasurement)
pub mod measurement;

// ============================================================================
// Re-exports
// ============================================================================

pub use binary::{bit_at, parity, parity_sign};
pub use builder::CircuitBuilder;
pub use circuit::Circuit;
pub use constants::{reckoning, register};
pub use counts::Counts;
pub use error::{ExpvalError, ExpvalResult};
pub use gate::Gate;
pub use measurement::{build_measurement_basis, PauliMeasurement, QubitMeasurement};
pub use num_complex::Complex64;
pub use observable::Observable;
pub use operator::SparsePauliOp;
pub use pauli::{Pauli, PauliOp, Phase};
pub use types::{Basis, ClbitId, Frequency, Outcome, QubitId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use expval_core::prelude::*;
    //! ```

    pub use crate::binary::{bit_at, parity, parity_sign};
    pub use crate::builder::CircuitBuilder;
    pub use crate::circuit::Circuit;
    pub use crate::constants::{reckoning, register};
    pub use crate::counts::Counts;
    pub use crate::error::{ExpvalError, ExpvalResult};
    pub use crate::gate::Gate;
    pub use crate::measurement::{build_measurement_basis, PauliMeasurement, QubitMeasurement};
    pub use crate::observable::Observable;
    pub use crate::operator::SparsePauliOp;
    pub use crate::pauli::{Pauli, PauliOp, Phase};
    pub use crate::types::{Basis, ClbitId, Frequency, Outcome, QubitId};
    pub use num_complex::Complex64;
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::{NAME, VERSION};

    #[test]
    fn test_mask_matches_measurement_layout() {
        // Masking an outcome of the full register keeps exactly the bits a
        // measurement appendage would read out
        for label in ["Z", "XI", "YIX", "IZZI", "-iXYZ"] {
            let pauli = Pauli::from_label(label).unwrap();
            let meas = build_measurement_basis(&pauli);
            let from_layout = meas
                .measured_qubits()
                .into_iter()
                .fold(0u64, |m, q| m | (1 << q));
            assert_eq!(pauli.integer_mask(), from_layout, "label {}", label);
        }
    }

    #[test]
    fn test_observable_to_reduced_operator() {
        let op = Observable::from("YIX").into_operator().unwrap();
        let basis = &op.paulis()[0];
        let meas = build_measurement_basis(basis);
        let reduced = op.restrict(&meas.measured_qubits()).unwrap();
        assert_eq!(reduced.labels(), vec!["YX"]);
        assert_eq!(reduced.paulis()[0].integer_mask(), 0b11);
    }

    #[test]
    fn test_counts_parity_consistency() {
        let counts = Counts::from([(0b00, 5), (0b01, 3), (0b11, 2)]);
        let even: u64 = counts
            .iter()
            .filter(|&(o, _)| parity(o) == 0)
            .map(|(_, f)| f)
            .sum();
        assert_eq!(even, 7);
        assert!(bit_at(0b11, 1));
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "expval_core");
    }
}
