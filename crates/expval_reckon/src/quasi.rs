//! Quasi-probability distributions
//!
//! Gantree: L4_Reckon → QuasiDistribution
//!
//! Relative frequencies of the outcomes of one table, together with the shot
//! count and an upper bound on the standard deviation of each probability.

use expval_core::{Counts, Outcome};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Outcome probabilities of one circuit
/// Gantree: QuasiDistribution // probabilities, shots, stddev_upper_bound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuasiDistribution {
    /// Probability per recorded outcome
    pub probabilities: BTreeMap<Outcome, f64>,

    /// Shots the distribution was sampled with
    pub shots: u64,

    /// `sqrt(1 / shots)`, absent without shots
    pub stddev_upper_bound: Option<f64>,
}

impl QuasiDistribution {
    /// Normalize an outcome table
    /// Gantree: from_counts(&Counts) -> Self // 준확률 분포
    ///
    /// A table without shots keeps its outcomes with probability zero.
    pub fn from_counts(counts: &Counts) -> Self {
        let shots = counts.shots();
        let norm = shots.max(1) as f64;
        let probabilities = counts
            .iter()
            .map(|(outcome, freq)| (outcome, freq as f64 / norm))
            .collect();
        let stddev_upper_bound = (shots > 0).then(|| (1.0 / shots as f64).sqrt());
        if shots == 0 {
            log::debug!("quasi-distribution of a table without shots");
        }

        Self {
            probabilities,
            shots,
            stddev_upper_bound,
        }
    }

    /// Probability of one outcome (zero when absent)
    pub fn probability(&self, outcome: Outcome) -> f64 {
        self.probabilities.get(&outcome).copied().unwrap_or(0.0)
    }

    /// Number of recorded outcomes
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Check if no outcome is recorded
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Sum of all probabilities: 1 with shots, 0 without
    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }
}

impl From<&Counts> for QuasiDistribution {
    fn from(counts: &Counts) -> Self {
        Self::from_counts(counts)
    }
}

impl fmt::Display for QuasiDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuasiDistribution({{")?;
        for (i, (outcome, p)) in self.probabilities.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", outcome, p)?;
        }
        write!(f, "}}, shots={})", self.shots)
    }
}

/// One distribution per outcome table, in order
pub fn quasi_distributions(counts_list: &[Counts]) -> Vec<QuasiDistribution> {
    counts_list.iter().map(QuasiDistribution::from_counts).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_counts() {
        let dist = QuasiDistribution::from_counts(&Counts::from([(0, 1), (3, 3)]));
        assert_eq!(dist.shots, 4);
        assert_eq!(dist.len(), 2);
        assert_relative_eq!(dist.probability(0), 0.25);
        assert_relative_eq!(dist.probability(3), 0.75);
        assert_eq!(dist.probability(1), 0.0);
        assert_relative_eq!(dist.total(), 1.0);
        assert_relative_eq!(dist.stddev_upper_bound.unwrap(), 0.5);
    }

    #[test]
    fn test_zero_shots() {
        let dist = QuasiDistribution::from(&Counts::from([(0, 0), (1, 0)]));
        assert_eq!(dist.shots, 0);
        assert_eq!(dist.stddev_upper_bound, None);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist.total(), 0.0);

        let empty = QuasiDistribution::from_counts(&Counts::new());
        assert!(empty.is_empty());
        assert_eq!(empty.stddev_upper_bound, None);
    }

    #[test]
    fn test_quasi_distributions_keep_order() {
        let dists = quasi_distributions(&[Counts::from([(1, 2)]), Counts::new()]);
        assert_eq!(dists.len(), 2);
        assert_eq!(dists[0].probability(1), 1.0);
        assert_eq!(dists[1].shots, 0);
    }

    #[test]
    fn test_display() {
        let dist = QuasiDistribution::from_counts(&Counts::from([(0, 1), (2, 1)]));
        assert_eq!(dist.to_string(), "QuasiDistribution({0: 0.5, 2: 0.5}, shots=2)");
    }

    #[test]
    fn test_serde_roundtrip() {
        let dist = QuasiDistribution::from_counts(&Counts::from([(5, 3), (6, 1)]));
        let json = serde_json::to_string(&dist).unwrap();
        assert!(json.contains("\"stddev_upper_bound\":0.5"));
        let parsed: QuasiDistribution = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dist);

        let none = serde_json::to_string(&QuasiDistribution::from_counts(&Counts::new())).unwrap();
        assert!(none.contains("\"stddev_upper_bound\":null"));
    }
}
