//! Operator decomposition strategies
//!
//! Gantree: L3_Decompose → OperatorDecomposer
//!
//! A decomposer splits a weighted operator into components that can each be
//! read out with a single measurement basis, and names that basis.
//!
//! Two strategies are provided:
//! - [`NaiveDecomposer`]: one component per term, basis = the term itself
//! - [`CommutingDecomposer`]: qubit-wise commuting groups, basis = union of
//!   the group's supports

use expval_core::{ExpvalResult, Observable, Pauli, SparsePauliOp};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Trait
// ============================================================================

/// Splits operators into jointly measurable components
/// Gantree: OperatorDecomposer // 분해 인터페이스
pub trait OperatorDecomposer: Send + Sync {
    /// Strategy name
    fn name(&self) -> &str;

    /// Split an operator into components
    /// Gantree: decompose(op) -> Vec<SparsePauliOp> // 분해
    ///
    /// Every term of `operator` appears in exactly one component.
    fn decompose(&self, operator: &SparsePauliOp) -> Vec<SparsePauliOp>;

    /// Measurement basis of one component
    /// Gantree: extract_basis(component) -> Pauli // 기저 추출
    ///
    /// Measuring in the returned basis diagonalizes every term of `component`.
    fn extract_basis(&self, component: &SparsePauliOp) -> Pauli;

    /// Measurement bases of all components of `operator`, in order
    fn extract_bases(&self, operator: &SparsePauliOp) -> Vec<Pauli> {
        self.decompose(operator)
            .iter()
            .map(|component| self.extract_basis(component))
            .collect()
    }

    /// Convert an observable, then decompose it
    fn decompose_observable(&self, observable: &Observable) -> ExpvalResult<Vec<SparsePauliOp>> {
        let operator = observable.to_operator()?;
        Ok(self.decompose(&operator))
    }
}

// ============================================================================
// Naive Strategy
// ============================================================================

/// One component per term
/// Gantree: NaiveDecomposer // 항별 분해
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveDecomposer;

impl OperatorDecomposer for NaiveDecomposer {
    fn name(&self) -> &str {
        "naive"
    }

    fn decompose(&self, operator: &SparsePauliOp) -> Vec<SparsePauliOp> {
        let components = operator.singletons();
        log::debug!(
            "naive decomposition: {} terms -> {} components",
            operator.len(),
            components.len()
        );
        components
    }

    fn extract_basis(&self, component: &SparsePauliOp) -> Pauli {
        // Components are never empty, the first term always exists
        match component.paulis().first() {
            Some(pauli) => pauli.clone(),
            None => component.support_union(),
        }
    }
}

// ============================================================================
// Commuting Strategy
// ============================================================================

/// Qubit-wise commuting groups
/// Gantree: CommutingDecomposer // 교환 그룹 분해
///
/// Grouping is first-fit in input order: a term joins the earliest group
/// whose every member commutes with it qubit-wise, otherwise it opens a new
/// group. Groups keep their terms in input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommutingDecomposer;

impl CommutingDecomposer {
    /// Term indices of each group
    /// Gantree: group_indices(op) -> Vec<Vec<usize>> // 그룹 인덱스
    pub fn group_indices(&self, operator: &SparsePauliOp) -> Vec<Vec<usize>> {
        let paulis = operator.paulis();
        let mut groups: Vec<Vec<usize>> = Vec::new();

        for (i, pauli) in paulis.iter().enumerate() {
            let slot = groups.iter_mut().find(|group| {
                group
                    .iter()
                    .all(|&j| paulis[j].qubit_wise_commutes(pauli))
            });
            match slot {
                Some(group) => group.push(i),
                None => groups.push(vec![i]),
            }
        }
        groups
    }
}

impl OperatorDecomposer for CommutingDecomposer {
    fn name(&self) -> &str {
        "commuting"
    }

    fn decompose(&self, operator: &SparsePauliOp) -> Vec<SparsePauliOp> {
        let components = operator.partition_first_fit(Pauli::qubit_wise_commutes);
        log::debug!(
            "commuting decomposition: {} terms -> {} groups",
            operator.len(),
            components.len()
        );
        components
    }

    fn extract_basis(&self, component: &SparsePauliOp) -> Pauli {
        component.support_union()
    }
}

// ============================================================================
// Strategy Selection
// ============================================================================

/// Explicit choice of decomposition strategy
/// Gantree: DecompositionStrategy // Naive | Commuting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecompositionStrategy {
    /// One component per term
    Naive,
    /// Qubit-wise commuting groups
    #[default]
    Commuting,
}

impl DecompositionStrategy {
    /// Decomposer implementing this strategy
    pub fn decomposer(self) -> Box<dyn OperatorDecomposer> {
        match self {
            DecompositionStrategy::Naive => Box::new(NaiveDecomposer),
            DecompositionStrategy::Commuting => Box::new(CommutingDecomposer),
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "naive" => Some(DecompositionStrategy::Naive),
            "commuting" | "abelian" => Some(DecompositionStrategy::Commuting),
            _ => None,
        }
    }
}

impl fmt::Display for DecompositionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompositionStrategy::Naive => write!(f, "naive"),
            DecompositionStrategy::Commuting => write!(f, "commuting"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
