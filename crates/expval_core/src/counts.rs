//! Outcome tables and their transforms
//!
//! Gantree: L1_Counts → Counts, CountsTransform
//!
//! A [`Counts`] table maps integer outcomes to the number of shots that
//! produced them. Tables are immutable once built: every transform returns a
//! new table and leaves its input untouched, and no transform creates or
//! destroys shots.

use crate::error::{ExpvalError, ExpvalResult};
use crate::types::{Frequency, Outcome};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Measurement counts: outcome -> frequency
/// Gantree: Counts // 측정 히스토그램
///
/// Keys are kept ordered so that every reduction over a table visits outcomes
/// in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts {
    table: BTreeMap<Outcome, Frequency>,
}

impl Counts {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an empty table (zero shots)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from (outcome, frequency) pairs, summing repeated outcomes
    /// Gantree: from_pairs(iter) -> Self // 생성자
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Outcome, Frequency)>) -> Self {
        let mut table = BTreeMap::new();
        for (outcome, freq) in pairs {
            accumulate(&mut table, outcome, freq);
        }
        Self { table }
    }

    /// Create from signed pairs, rejecting negative outcomes or frequencies
    ///
    /// This is the validating entry for tables coming from loosely typed
    /// sources.
    pub fn try_from_signed(pairs: impl IntoIterator<Item = (i64, i64)>) -> ExpvalResult<Self> {
        let mut table = BTreeMap::new();
        for (outcome, freq) in pairs {
            if outcome < 0 {
                return Err(ExpvalError::NegativeOutcome(outcome));
            }
            if freq < 0 {
                return Err(ExpvalError::NegativeFrequency {
                    outcome,
                    frequency: freq,
                });
            }
            accumulate(&mut table, outcome as Outcome, freq as Frequency);
        }
        Ok(Self { table })
    }

    /// Create from bitstring-keyed pairs
    /// Gantree: from_bitstrings(iter) -> Result<Self> // 비트열 파싱
    ///
    /// Keys may be plain binary (`"0101"`, most significant bit first, spaces
    /// between registers allowed), `0b`-prefixed binary or `0x`-prefixed
    /// hexadecimal.
    pub fn from_bitstrings<S: AsRef<str>>(
        pairs: impl IntoIterator<Item = (S, Frequency)>,
    ) -> ExpvalResult<Self> {
        let mut table = BTreeMap::new();
        for (key, freq) in pairs {
            let outcome = parse_outcome(key.as_ref())?;
            accumulate(&mut table, outcome, freq);
        }
        Ok(Self { table })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Total number of shots (sum of all frequencies)
    /// Gantree: shots(&self) -> u64 // 총 샷 수
    pub fn shots(&self) -> Frequency {
        self.table.values().fold(0, |acc, &f| acc.saturating_add(f))
    }

    /// Frequency of one outcome (zero when absent)
    pub fn get(&self, outcome: Outcome) -> Frequency {
        self.table.get(&outcome).copied().unwrap_or(0)
    }

    /// Number of distinct outcomes recorded
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if no outcome is recorded
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate over (outcome, frequency) pairs in ascending outcome order
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, Frequency)> + '_ {
        self.table.iter().map(|(&o, &f)| (o, f))
    }

    /// Relative frequency of an outcome (zero for an empty table)
    pub fn probability(&self, outcome: Outcome) -> f64 {
        let shots = self.shots();
        if shots == 0 {
            return 0.0;
        }
        self.get(outcome) as f64 / shots as f64
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Remap every outcome through `f`, summing frequencies on collision
    /// Gantree: map_outcomes(&self,f) -> Counts // 키 변환
    pub fn map_outcomes<F>(&self, f: F) -> Counts
    where
        F: Fn(Outcome) -> Outcome,
    {
        Counts::from_pairs(self.iter().map(|(o, freq)| (f(o), freq)))
    }

    /// Flip the bits selected by `mask` in every outcome
    /// Gantree: bitflip(&self,mask) -> Counts // 비트 반전
    pub fn bitflip(&self, mask: Outcome) -> Counts {
        self.map_outcomes(|o| o ^ mask)
    }

    /// Keep only the bits selected by `mask` in every outcome
    /// Gantree: apply_mask(&self,mask) -> Counts // 비트 마스크
    pub fn apply_mask(&self, mask: Outcome) -> Counts {
        self.map_outcomes(|o| o & mask)
    }
}

fn accumulate(table: &mut BTreeMap<Outcome, Frequency>, outcome: Outcome, freq: Frequency) {
    let entry = table.entry(outcome).or_insert(0);
    *entry = entry.saturating_add(freq);
}

/// Parse a single outcome key
fn parse_outcome(key: &str) -> ExpvalResult<Outcome> {
    let invalid = || ExpvalError::InvalidBitstring(key.to_string());
    let trimmed = key.trim();

    let (digits, radix) = if let Some(hex) = trimmed.strip_prefix("0x") {
        (hex.to_string(), 16)
    } else if let Some(bin) = trimmed.strip_prefix("0b") {
        (bin.to_string(), 2)
    } else {
        (trimmed.chars().filter(|c| !c.is_whitespace()).collect(), 2)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }
    Outcome::from_str_radix(&digits, radix).map_err(|_| invalid())
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl FromIterator<(Outcome, Frequency)> for Counts {
    fn from_iter<T: IntoIterator<Item = (Outcome, Frequency)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

impl<const N: usize> From<[(Outcome, Frequency); N]> for Counts {
    fn from(pairs: [(Outcome, Frequency); N]) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<'a> IntoIterator for &'a Counts {
    type Item = (&'a Outcome, &'a Frequency);
    type IntoIter = btree_map::Iter<'a, Outcome, Frequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.iter()
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (outcome, freq)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", outcome, freq)?;
        }
        write!(f, "}}")
    }
}

// ============================================================================
// Tests
// ============================================================================
