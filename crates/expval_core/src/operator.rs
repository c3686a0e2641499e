//! Weighted Pauli operators
//!
//! Gantree: L1_Operators → SparsePauliOp
//!
//! An ordered, non-empty list of `(Pauli, coefficient)` terms sharing one
//! qubit count. Terms are neither merged nor reordered.

use crate::error::{ExpvalError, ExpvalResult};
use crate::pauli::{Pauli, Phase};
use crate::types::QubitId;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sum of weighted Pauli terms
/// Gantree: SparsePauliOp // paulis, coeffs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SparsePauliOpRepr", into = "SparsePauliOpRepr")]
pub struct SparsePauliOp {
    paulis: Vec<Pauli>,
    coeffs: Vec<Complex64>,
}

/// Unvalidated wire form
#[derive(Serialize, Deserialize)]
struct SparsePauliOpRepr {
    paulis: Vec<Pauli>,
    coeffs: Vec<Complex64>,
}

impl SparsePauliOp {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create from parallel lists of terms and coefficients
    /// Gantree: new(paulis,coeffs) -> Result<Self> // 생성+검증
    pub fn new(paulis: Vec<Pauli>, coeffs: Vec<Complex64>) -> ExpvalResult<Self> {
        if paulis.len() != coeffs.len() {
            return Err(ExpvalError::CoefficientMismatch {
                paulis: paulis.len(),
                coeffs: coeffs.len(),
            });
        }
        let expected = paulis
            .first()
            .map(Pauli::num_qubits)
            .ok_or(ExpvalError::EmptyOperator)?;
        if let Some(bad) = paulis.iter().find(|p| p.num_qubits() != expected) {
            return Err(ExpvalError::QubitCountMismatch {
                expected,
                found: bad.num_qubits(),
            });
        }
        Ok(Self { paulis, coeffs })
    }

    /// Create with unit coefficients
    pub fn from_paulis(paulis: Vec<Pauli>) -> ExpvalResult<Self> {
        let coeffs = vec![Complex64::new(1.0, 0.0); paulis.len()];
        Self::new(paulis, coeffs)
    }

    /// Single term with unit coefficient
    pub fn from_pauli(pauli: Pauli) -> Self {
        Self {
            paulis: vec![pauli],
            coeffs: vec![Complex64::new(1.0, 0.0)],
        }
    }

    /// Parse a single label with unit coefficient
    pub fn from_label(label: &str) -> ExpvalResult<Self> {
        Pauli::from_label(label).map(Self::from_pauli)
    }

    /// Create from `(label, coefficient)` pairs
    /// Gantree: from_list(iter) -> Result<Self> // 레이블 목록
    pub fn from_list<S, C>(terms: impl IntoIterator<Item = (S, C)>) -> ExpvalResult<Self>
    where
        S: AsRef<str>,
        C: Into<Complex64>,
    {
        let mut paulis = Vec::new();
        let mut coeffs = Vec::new();
        for (label, coeff) in terms {
            paulis.push(Pauli::from_label(label.as_ref())?);
            coeffs.push(coeff.into());
        }
        Self::new(paulis, coeffs)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of qubits shared by all terms
    pub fn num_qubits(&self) -> usize {
        self.paulis.first().map_or(0, Pauli::num_qubits)
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.paulis.len()
    }

    /// Always false: operators hold at least one term
    pub fn is_empty(&self) -> bool {
        self.paulis.is_empty()
    }

    /// Terms in order
    pub fn paulis(&self) -> &[Pauli] {
        &self.paulis
    }

    /// Coefficients in order
    pub fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    /// Iterate over `(term, coefficient)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Pauli, Complex64)> + '_ {
        self.paulis.iter().zip(self.coeffs.iter().copied())
    }

    /// Labels of all terms
    pub fn labels(&self) -> Vec<String> {
        self.paulis.iter().map(Pauli::label).collect()
    }

    // ========================================================================
    // Derived Operators
    // ========================================================================

    /// Split into one single-term operator per term
    pub fn singletons(&self) -> Vec<SparsePauliOp> {
        self.iter()
            .map(|(pauli, coeff)| Self {
                paulis: vec![pauli.clone()],
                coeffs: vec![coeff],
            })
            .collect()
    }

    /// Operator formed by the selected term indices, in the given order
    pub fn select(&self, indices: &[usize]) -> ExpvalResult<Self> {
        let (paulis, coeffs) = indices
            .iter()
            .map(|&index| match (self.paulis.get(index), self.coeffs.get(index)) {
                (Some(pauli), Some(&coeff)) => Ok((pauli.clone(), coeff)),
                _ => Err(ExpvalError::TermOutOfRange {
                    index,
                    len: self.len(),
                }),
            })
            .collect::<ExpvalResult<Vec<_>>>()?
            .into_iter()
            .unzip();
        Self::new(paulis, coeffs)
    }

    /// Partition the terms first-fit
    /// Gantree: partition_first_fit(&self, compatible) -> Vec<Self> // 그룹 분할
    ///
    /// Each term joins the first group whose every member is `compatible`
    /// with it, otherwise it opens a new group. Groups keep input order.
    pub fn partition_first_fit<F>(&self, compatible: F) -> Vec<Self>
    where
        F: Fn(&Pauli, &Pauli) -> bool,
    {
        let mut groups: Vec<Self> = Vec::new();
        for (pauli, coeff) in self.iter() {
            let slot = groups
                .iter_mut()
                .find(|group| group.paulis.iter().all(|member| compatible(member, pauli)));
            match slot {
                Some(group) => {
                    group.paulis.push(pauli.clone());
                    group.coeffs.push(coeff);
                }
                None => groups.push(Self {
                    paulis: vec![pauli.clone()],
                    coeffs: vec![coeff],
                }),
            }
        }
        groups
    }

    /// Restrict every term to the listed qubits
    /// Gantree: restrict(&self,qubits) -> Result<Self> // 부분 연산자
    pub fn restrict(&self, qubits: &[QubitId]) -> ExpvalResult<Self> {
        let paulis = self
            .paulis
            .iter()
            .map(|p| p.restrict(qubits))
            .collect::<ExpvalResult<Vec<_>>>()?;
        Self::new(paulis, self.coeffs.clone())
    }

    /// Union of all terms' z vectors and, separately, x vectors
    /// Gantree: support_union(&self) -> Pauli // 공통 기저
    ///
    /// The result carries phase +1.
    pub fn support_union(&self) -> Pauli {
        let n = self.num_qubits();
        let mut z = vec![false; n];
        let mut x = vec![false; n];
        for pauli in &self.paulis {
            for q in 0..n {
                z[q] |= pauli.z()[q];
                x[q] |= pauli.x()[q];
            }
        }
        Pauli::from_validated_parts(z, x, Phase::One)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl TryFrom<SparsePauliOpRepr> for SparsePauliOp {
    type Error = ExpvalError;

    fn try_from(repr: SparsePauliOpRepr) -> Result<Self, Self::Error> {
        Self::new(repr.paulis, repr.coeffs)
    }
}

impl From<SparsePauliOp> for SparsePauliOpRepr {
    fn from(op: SparsePauliOp) -> Self {
        Self {
            paulis: op.paulis,
            coeffs: op.coeffs,
        }
    }
}

impl From<Pauli> for SparsePauliOp {
    fn from(pauli: Pauli) -> Self {
        Self::from_pauli(pauli)
    }
}

impl fmt::Display for SparsePauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (pauli, coeff)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "({})*{}", coeff, pauli)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_from_list() {
        let op = SparsePauliOp::from_list([("IZ", 1.0), ("XX", -0.5)]).unwrap();
        assert_eq!(op.len(), 2);
        assert_eq!(op.num_qubits(), 2);
        assert_eq!(op.labels(), vec!["IZ", "XX"]);
        assert_eq!(op.coeffs(), &[c(1.0, 0.0), c(-0.5, 0.0)]);
        assert!(!op.is_empty());
    }

    #[test]
    fn test_rejects_empty_and_mismatched() {
        assert_eq!(
            SparsePauliOp::from_paulis(vec![]),
            Err(ExpvalError::EmptyOperator)
        );
        assert_eq!(
            SparsePauliOp::from_list([("Z", 1.0), ("ZZ", 1.0)]),
            Err(ExpvalError::QubitCountMismatch {
                expected: 1,
                found: 2
            })
        );
        let z = Pauli::from_label("Z").unwrap();
        assert_eq!(
            SparsePauliOp::new(vec![z], vec![]),
            Err(ExpvalError::CoefficientMismatch {
                paulis: 1,
                coeffs: 0
            })
        );
        assert!(SparsePauliOp::from_list([("ZQ", 1.0)]).unwrap_err().is_type_error());
    }

    #[test]
    fn test_terms_not_merged() {
        let op = SparsePauliOp::from_list([("Z", 1.0), ("Z", 2.0)]).unwrap();
        assert_eq!(op.len(), 2);
    }

    #[test]
    fn test_singletons_and_select() {
        let op = SparsePauliOp::from_list([("XI", c(1.0, 0.0)), ("IZ", c(0.0, 2.0))]).unwrap();
        let parts = op.singletons();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].labels(), vec!["IZ"]);
        assert_eq!(parts[1].coeffs(), &[c(0.0, 2.0)]);

        let reversed = op.select(&[1, 0]).unwrap();
        assert_eq!(reversed.labels(), vec!["IZ", "XI"]);
        assert_eq!(op.select(&[]), Err(ExpvalError::EmptyOperator));
        assert_eq!(
            op.select(&[0, 2]),
            Err(ExpvalError::TermOutOfRange { index: 2, len: 2 })
        );
        assert!(op.select(&[5]).unwrap_err().is_value_error());
    }

    #[test]
    fn test_partition_first_fit() {
        let op = SparsePauliOp::from_list([
            ("ZZ", c(1.0, 0.0)),
            ("XX", c(2.0, 0.0)),
            ("II", c(0.0, 3.0)),
            ("XI", c(4.0, 0.0)),
        ])
        .unwrap();
        let groups = op.partition_first_fit(Pauli::qubit_wise_commutes);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].labels(), vec!["ZZ", "II"]);
        assert_eq!(groups[0].coeffs(), &[c(1.0, 0.0), c(0.0, 3.0)]);
        assert_eq!(groups[1].labels(), vec!["XX", "XI"]);

        // Nothing is compatible: one group per term
        assert_eq!(op.partition_first_fit(|_, _| false), op.singletons());
    }

    #[test]
    fn test_restrict() {
        let op = SparsePauliOp::from_list([("YIX", 1.0), ("ZII", 3.0)]).unwrap();
        let reduced = op.restrict(&[0, 2]).unwrap();
        assert_eq!(reduced.labels(), vec!["YX", "ZI"]);
        assert_eq!(reduced.coeffs(), op.coeffs());
    }

    #[test]
    fn test_support_union() {
        let op = SparsePauliOp::from_list([("-IXYZ", 1.0), ("IXII", 1.0)]).unwrap();
        assert_eq!(op.support_union().label(), "IXYZ");

        let op = SparsePauliOp::from_list([("XI", 1.0), ("ZI", 1.0)]).unwrap();
        assert_eq!(op.support_union().label(), "YI");
    }

    #[test]
    fn test_serde_roundtrip() {
        let op = SparsePauliOp::from_list([("IZ", c(1.0, 0.5)), ("-XX", c(2.0, 0.0))]).unwrap();
        let json = serde_json::to_string(&op).unwrap();
        let parsed: SparsePauliOp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, op);

        let empty = r#"{"paulis":[],"coeffs":[]}"#;
        assert!(serde_json::from_str::<SparsePauliOp>(empty).is_err());
    }

    #[test]
    fn test_display() {
        let op = SparsePauliOp::from_list([("Z", 1.0), ("X", 2.0)]).unwrap();
        assert_eq!(op.to_string(), "(1+0i)*Z + (2+0i)*X");
    }
}
