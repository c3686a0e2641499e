//! # Expval Reckon
//!
//! Expectation values and standard errors of Pauli observables from
//! measurement counts.
//!
//! ## Gantree Architecture
//!
//! ```text
//! expval_reckon // L4+L5: Reckoning + Estimator (완료)
//!     L4_Reckon // 기대값 추정 (완료)
//!         ReckoningResult // (expval, std_error) (완료)
//!         ExpvalReckoner // 4단계 인터페이스 (완료)
//!         CanonicalReckoner // 표준 구현 (완료)
//!         QuasiDistribution // 준확률 분포 (완료)
//!     L5_Estimator // 추정 파사드 (완료)
//!         EstimatorConfig // 설정 (완료)
//!         EstimateSummary // 메타데이터 (완료)
//!         Estimator // plan + estimate (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use expval_reckon::prelude::*;
//! use expval_core::{Counts, Pauli, SparsePauliOp};
//!
//! let reckoner = CanonicalReckoner::new();
//! let counts = Counts::from([(0, 1), (1, 1)]);
//!
//! let z = reckoner.reckon_pauli(&counts, &Pauli::from_label("Z").unwrap());
//! assert_eq!(z.expval.re, 0.0);
//!
//! let op = SparsePauliOp::from_list([("I", 1.0), ("Z", 2.0)]).unwrap();
//! let result = reckoner.reckon_operator(&counts, &op);
//! assert!((result.std_error.re - 2f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! ## Estimator
//!
//! ```rust
//! use expval_reckon::prelude::*;
//! use expval_core::{Counts, Observable};
//!
//! let estimator = Estimator::new(EstimatorConfig::default()).unwrap();
//! let settings = estimator.plan(&Observable::from("ZZ")).unwrap();
//!
//! // Outcome tables come back from executing each setting's circuit
//! let counts = vec![Counts::from([(0b00, 50), (0b11, 50)])];
//! let summary = estimator.estimate(&settings, &counts).unwrap();
//! assert_eq!(summary.expval.re, 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Reckoning results (Gantree: L4_Reckon → ReckoningResult)
pub mod result;

/// Reckoners (Gantree: L4_Reckon → ExpvalReckoner)
pub mod reckoner;

/// Configuration (Gantree: L5_Estimator → EstimatorConfig)
pub mod config;

/// Quasi-probability distributions (Gantree: L4_Reckon → QuasiDistribution)
pub mod quasi;

/// Shot metadata (Gantree: L5_Estimator → EstimateSummary)
pub mod summary;

/// Estimator facade (Gantree: L5_Estimator → Estimator)
pub mod estimator;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::EstimatorConfig;
pub use estimator::Estimator;
pub use quasi::{quasi_distributions, QuasiDistribution};
pub use reckoner::{CanonicalReckoner, ExpvalReckoner};
pub use result::ReckoningResult;
pub use summary::EstimateSummary;

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases

    pub use crate::config::EstimatorConfig;
    pub use crate::estimator::Estimator;
    pub use crate::quasi::QuasiDistribution;
    pub use crate::reckoner::{CanonicalReckoner, ExpvalReckoner};
    pub use crate::result::ReckoningResult;
    pub use crate::summary::EstimateSummary;
    pub use expval_decompose::DecompositionStrategy;
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::VERSION;
    use approx::assert_relative_eq;
    use expval_core::{Counts, Observable, SparsePauliOp};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_counts(rng: &mut ChaCha8Rng, num_qubits: usize) -> Counts {
        (0..rng.gen_range(1..20))
            .map(|_| (rng.gen_range(0..(1u64 << num_qubits)), rng.gen_range(0..50u64)))
            .collect()
    }

    /// Keep only the measured bits, packed in classical-bit order
    fn compact(counts: &Counts, measured: &[usize]) -> Counts {
        counts.map_outcomes(|o| {
            measured
                .iter()
                .enumerate()
                .fold(0, |acc, (k, &q)| acc | (((o >> q) & 1) << k))
        })
    }

    #[test]
    fn test_plan_then_reckon_matches_direct() {
        // For diagonal operators the full-register table is a valid readout
        // of every setting, so the plan path must agree with direct reckoning
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let operator = SparsePauliOp::from_list([
            ("ZIZI", 0.5),
            ("IIZZ", -1.0),
            ("ZZII", 2.0),
            ("IIII", 0.25),
        ])
        .unwrap();
        let reckoner = CanonicalReckoner::new();

        for strategy in [DecompositionStrategy::Naive, DecompositionStrategy::Commuting] {
            let estimator =
                Estimator::new(EstimatorConfig::default().with_strategy(strategy)).unwrap();
            let settings = estimator.plan(&Observable::from(operator.clone())).unwrap();

            for _ in 0..20 {
                let full = random_counts(&mut rng, 4);
                let tables: Vec<Counts> = settings
                    .iter()
                    .map(|s| compact(&full, &s.measured_qubits))
                    .collect();

                let planned = estimator.estimate(&settings, &tables).unwrap();
                let direct = reckoner.reckon_operator(&full, &operator);
                assert_relative_eq!(planned.expval.re, direct.expval.re, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_reckon_matches_reference_values() {
        let reckoner = CanonicalReckoner::new();
        let balanced = Counts::from([(0, 1), (1, 1)]);

        let x_and_z = reckoner
            .reckon_observables(
                &[balanced.clone(), balanced.clone()],
                &[Observable::from("X"), Observable::from("Z")],
            )
            .unwrap();
        assert_relative_eq!(x_and_z.expval.re, 0.0);
        assert_relative_eq!(x_and_z.std_error.re, 1.0, epsilon = 1e-12);

        let weighted = SparsePauliOp::from_list([("X", 1.0), ("Z", 2.0)]).unwrap();
        let mixed = reckoner
            .reckon_observables(
                &[balanced.clone(), balanced],
                &[Observable::from(weighted), Observable::from("I")],
            )
            .unwrap();
        assert_relative_eq!(mixed.expval.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(mixed.std_error.re, 2.5f64.sqrt(), epsilon = 1e-12);
        assert!(mixed.is_real(0.0));
    }

    #[test]
    fn test_anti_hermitian_part() {
        // i·Z contributes to the imaginary slots only
        let reckoner = CanonicalReckoner::new();
        let counts = Counts::from([(0, 3), (1, 1)]);
        let operator = SparsePauliOp::from_list([("Z", 1.0), ("iZ", 1.0)]).unwrap();
        let result = reckoner.reckon_operator(&counts, &operator);

        assert_relative_eq!(result.expval.re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(result.expval.im, 0.5, epsilon = 1e-12);
        assert_relative_eq!(result.std_error.re, result.std_error.im, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_shot_tables_are_not_errors() {
        let estimator = Estimator::default();
        let settings = estimator.plan(&Observable::from("ZZ")).unwrap();
        let summary = estimator.estimate(&settings, &[Counts::new()]).unwrap();
        assert_eq!(summary.expval.re, 0.0);
        assert_eq!(summary.std_error.re, 1.0);
        assert_eq!(summary.shots, 0);
        assert_eq!(summary.variance.re, 0.0);
    }

    #[test]
    fn test_quasi_distribution_matches_z_expectation() {
        // On a one-bit table <Z> = p(0) - p(1)
        let reckoner = CanonicalReckoner::new();
        let counts = Counts::from([(0, 13), (1, 7)]);
        let dist = QuasiDistribution::from_counts(&counts);
        let z = reckoner.reckon_pauli(&counts, &"Z".parse().unwrap());
        assert_relative_eq!(dist.probability(0) - dist.probability(1), z.expval.re, epsilon = 1e-12);
        assert_relative_eq!(dist.stddev_upper_bound.unwrap(), (1.0f64 / 20.0).sqrt());
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
