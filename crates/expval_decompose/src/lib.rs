//! # Expval Decompose
//!
//! Splits weighted Pauli operators into jointly measurable components and
//! plans their measurement.
//!
//! ## Gantree Architecture
//!
//! ```text
//! expval_decompose // L3: Decomposition (완료)
//!     L3_Decompose // 연산자 분해 (완료)
//!         OperatorDecomposer // 분해 인터페이스 (완료)
//!         NaiveDecomposer // 항별 분해 (완료)
//!         CommutingDecomposer // 큐비트별 교환 그룹 (완료)
//!         DecompositionStrategy // 전략 선택 (완료)
//!         MeasurementPlan // 측정 계획 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use expval_decompose::prelude::*;
//! use expval_core::SparsePauliOp;
//!
//! let op = SparsePauliOp::from_list([("IXYZ", 1.0), ("ZYXI", 1.0), ("IXII", 1.0)]).unwrap();
//! let decomposer = DecompositionStrategy::Commuting.decomposer();
//!
//! let components = decomposer.decompose(&op);
//! assert_eq!(components.len(), 2);
//!
//! let settings = plan_measurements(decomposer.as_ref(), &op).unwrap();
//! assert_eq!(settings[0].basis.label(), "IXYZ");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Decomposition strategies (Gantree: L3_Decompose → OperatorDecomposer)
pub mod decomposer;

/// Measurement plans (Gantree: L3_Decompose → MeasurementPlan)
pub mod plan;

// ============================================================================
// Re-exports
// ============================================================================

pub use decomposer::{
    CommutingDecomposer, DecompositionStrategy, NaiveDecomposer, OperatorDecomposer,
};
pub use plan::{plan_measurements, plan_observable, MeasurementSetting};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases

    pub use crate::decomposer::{
        CommutingDecomposer, DecompositionStrategy, NaiveDecomposer, OperatorDecomposer,
    };
    pub use crate::plan::{plan_measurements, plan_observable, MeasurementSetting};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================
