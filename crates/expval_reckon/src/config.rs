//! Estimator configuration
//!
//! Gantree: L5_Estimator → EstimatorConfig
//!
//! Every tunable of an estimation run lives here and is passed explicitly.

use expval_core::reckoning::{DEFAULT_REAL_TOLERANCE, MAX_REAL_TOLERANCE};
use expval_core::{ExpvalError, ExpvalResult};
use expval_decompose::DecompositionStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Estimator configuration
/// Gantree: EstimatorConfig // 설정
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Decomposition strategy
    /// Gantree: strategy: DecompositionStrategy // naive/commuting
    pub strategy: DecompositionStrategy,

    /// Imaginary parts at most this large are reported as zero
    /// Gantree: real_tolerance: f64 // 실수 판정
    pub real_tolerance: f64,
}

impl EstimatorConfig {
    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set decomposition strategy
    /// Gantree: with_strategy(self,s) -> Self // 전략 설정
    pub fn with_strategy(mut self, strategy: DecompositionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set real tolerance
    pub fn with_real_tolerance(mut self, tolerance: f64) -> Self {
        self.real_tolerance = tolerance;
        self
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    /// Gantree: validate(&self) -> Result // 검증
    pub fn validate(&self) -> ExpvalResult<()> {
        if !self.real_tolerance.is_finite()
            || self.real_tolerance < 0.0
            || self.real_tolerance > MAX_REAL_TOLERANCE
        {
            return Err(ExpvalError::ConfigError(format!(
                "real_tolerance must be in [0, {}], got {}",
                MAX_REAL_TOLERANCE, self.real_tolerance
            )));
        }
        Ok(())
    }

    // ========================================================================
    // JSON
    // ========================================================================

    /// Parse from JSON and validate
    pub fn from_json(json: &str) -> ExpvalResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> ExpvalResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            strategy: DecompositionStrategy::default(),
            real_tolerance: DEFAULT_REAL_TOLERANCE,
        }
    }
}

impl fmt::Display for EstimatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EstimatorConfig(strategy={}, real_tolerance={:e})",
            self.strategy, self.real_tolerance
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = EstimatorConfig::default();
        assert_eq!(config.strategy, DecompositionStrategy::Commuting);
        assert_eq!(config.real_tolerance, DEFAULT_REAL_TOLERANCE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EstimatorConfig::default()
            .with_strategy(DecompositionStrategy::Naive)
            .with_real_tolerance(1e-9);
        assert_eq!(config.strategy, DecompositionStrategy::Naive);
        assert_eq!(config.real_tolerance, 1e-9);
    }

    #[test]
    fn test_validation() {
        for tolerance in [-1e-9, 0.5, f64::NAN, f64::INFINITY] {
            let err = EstimatorConfig::default()
                .with_real_tolerance(tolerance)
                .validate()
                .unwrap_err();
            assert!(matches!(err, ExpvalError::ConfigError(_)));
        }
        assert!(EstimatorConfig::default()
            .with_real_tolerance(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = EstimatorConfig::default().with_strategy(DecompositionStrategy::Naive);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"naive\""));
        assert_eq!(EstimatorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_partial_and_invalid() {
        let config = EstimatorConfig::from_json(r#"{"strategy":"naive"}"#).unwrap();
        assert_eq!(config.real_tolerance, DEFAULT_REAL_TOLERANCE);

        let err = EstimatorConfig::from_json(r#"{"strategy":"greedy"}"#).unwrap_err();
        assert!(matches!(err, ExpvalError::JsonError(_)));

        let err = EstimatorConfig::from_json(r#"{"real_tolerance":1.0}"#).unwrap_err();
        assert!(err.is_value_error());
    }

    #[test]
    fn test_display() {
        let text = EstimatorConfig::default().to_string();
        assert!(text.contains("strategy=commuting"));
    }
}
