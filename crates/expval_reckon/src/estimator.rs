//! Estimator facade
//!
//! Gantree: L5_Estimator → Estimator
//!
//! Ties decomposition and reckoning together:
//! 1. `plan`: observable → measurement settings (one circuit each)
//! 2. the caller executes the settings' circuits elsewhere
//! 3. `estimate`: settings + outcome tables → summary

use crate::config::EstimatorConfig;
use crate::reckoner::{CanonicalReckoner, ExpvalReckoner};
use crate::summary::EstimateSummary;
use expval_core::{Counts, ExpvalError, ExpvalResult, Observable, SparsePauliOp};
use expval_decompose::{plan_measurements, MeasurementSetting, OperatorDecomposer};
use std::fmt;

/// Plans and reckons expectation values
/// Gantree: Estimator // 추정 파사드
pub struct Estimator {
    config: EstimatorConfig,
    decomposer: Box<dyn OperatorDecomposer>,
    reckoner: CanonicalReckoner,
}

impl Estimator {
    /// Create from a validated configuration
    /// Gantree: new(config) -> Result<Self> // 생성자
    pub fn new(config: EstimatorConfig) -> ExpvalResult<Self> {
        config.validate()?;
        Ok(Self {
            decomposer: config.strategy.decomposer(),
            reckoner: CanonicalReckoner::new().with_real_tolerance(config.real_tolerance),
            config,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Decomposer in use
    pub fn decomposer(&self) -> &dyn OperatorDecomposer {
        self.decomposer.as_ref()
    }

    /// Reckoner in use
    pub fn reckoner(&self) -> &CanonicalReckoner {
        &self.reckoner
    }

    /// Measurement settings for an observable
    /// Gantree: plan(observable) -> Result<Vec<MeasurementSetting>> // 측정 계획
    pub fn plan(&self, observable: &Observable) -> ExpvalResult<Vec<MeasurementSetting>> {
        let operator = observable.to_operator()?;
        plan_measurements(self.decomposer.as_ref(), &operator)
    }

    /// Reckon the outcome tables returned for `settings`
    /// Gantree: estimate(settings, counts) -> Result<EstimateSummary> // 추정
    ///
    /// `counts_list[k]` must be the outcome table of `settings[k]`'s circuit.
    pub fn estimate(
        &self,
        settings: &[MeasurementSetting],
        counts_list: &[Counts],
    ) -> ExpvalResult<EstimateSummary> {
        if settings.len() != counts_list.len() {
            return Err(ExpvalError::LengthMismatch {
                counts: counts_list.len(),
                operators: settings.len(),
            });
        }
        let operators: Vec<SparsePauliOp> =
            settings.iter().map(|s| s.reduced.clone()).collect();
        let result = self.reckoner.reckon(counts_list, &operators)?;
        let summary = EstimateSummary::from_reckoning(counts_list, result);
        log::debug!("{}", summary);
        Ok(summary)
    }
}

impl Default for Estimator {
    fn default() -> Self {
        let config = EstimatorConfig::default();
        Self {
            decomposer: config.strategy.decomposer(),
            reckoner: CanonicalReckoner::new().with_real_tolerance(config.real_tolerance),
            config,
        }
    }
}

impl fmt::Debug for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Estimator")
            .field("config", &self.config)
            .field("decomposer", &self.decomposer.name())
            .field("reckoner", &self.reckoner)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use expval_decompose::DecompositionStrategy;

    #[test]
    fn test_new_validates() {
        let bad = EstimatorConfig::default().with_real_tolerance(-1.0);
        assert!(Estimator::new(bad).is_err());

        let estimator = Estimator::new(EstimatorConfig::default()).unwrap();
        assert_eq!(estimator.decomposer().name(), "commuting");
    }

    #[test]
    fn test_plan_uses_strategy() {
        let observable = Observable::Paulis(vec![
            "ZZ".parse().unwrap(),
            "ZI".parse().unwrap(),
            "XX".parse().unwrap(),
        ]);

        let grouped = Estimator::default().plan(&observable).unwrap();
        assert_eq!(grouped.len(), 2);

        let naive = Estimator::new(
            EstimatorConfig::default().with_strategy(DecompositionStrategy::Naive),
        )
        .unwrap()
        .plan(&observable)
        .unwrap();
        assert_eq!(naive.len(), 3);
    }

    #[test]
    fn test_estimate_length_mismatch() {
        let estimator = Estimator::default();
        let settings = estimator.plan(&Observable::from("Z")).unwrap();
        let err = estimator.estimate(&settings, &[]).unwrap_err();
        assert!(err.is_value_error());
    }

    #[test]
    fn test_estimate_from_reduced_tables() {
        // Qubit 1 always reads 1 in the X basis, qubit 0 is never measured
        let estimator = Estimator::default();
        let settings = estimator.plan(&Observable::from("XI")).unwrap();
        assert_eq!(settings[0].measured_qubits, vec![1]);

        let counts = vec![Counts::from([(1, 100)])];
        let summary = estimator.estimate(&settings, &counts).unwrap();
        assert_relative_eq!(summary.expval.re, -1.0, epsilon = 1e-12);
        assert_eq!(summary.shots, 100);
        assert_eq!(summary.num_circuits, 1);
    }

    #[test]
    fn test_debug() {
        let text = format!("{:?}", Estimator::default());
        assert!(text.contains("commuting"));
    }
}
