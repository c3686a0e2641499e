//! Accepted observable forms
//!
//! Gantree: L1_Operators → Observable
//!
//! Callers may hand over a label, a single term, a list of terms or a full
//! weighted operator. Each form is converted once, at the boundary, into the
//! canonical [`SparsePauliOp`].

use crate::error::{ExpvalError, ExpvalResult};
use crate::operator::SparsePauliOp;
use crate::pauli::Pauli;
use serde::{Deserialize, Serialize};

/// Observable in any accepted form
/// Gantree: Observable // Label | Pauli | Paulis | Sparse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Observable {
    /// Pauli label, e.g. `"-iXZ"`
    Label(String),
    /// Single Pauli term
    Pauli(Pauli),
    /// Unweighted sum of terms
    Paulis(Vec<Pauli>),
    /// Weighted operator
    Sparse(SparsePauliOp),
}

impl Observable {
    /// Convert to the canonical weighted operator
    /// Gantree: into_operator(self) -> Result<SparsePauliOp> // 정규화
    pub fn into_operator(self) -> ExpvalResult<SparsePauliOp> {
        match self {
            Observable::Label(label) => SparsePauliOp::from_label(&label),
            Observable::Pauli(pauli) => Ok(SparsePauliOp::from_pauli(pauli)),
            Observable::Paulis(paulis) => {
                if paulis.is_empty() {
                    return Err(ExpvalError::InvalidObservable(
                        "empty list of Pauli terms".to_string(),
                    ));
                }
                SparsePauliOp::from_paulis(paulis)
            }
            Observable::Sparse(op) => Ok(op),
        }
    }

    /// Borrowing variant of [`Observable::into_operator`]
    pub fn to_operator(&self) -> ExpvalResult<SparsePauliOp> {
        self.clone().into_operator()
    }
}

impl From<&str> for Observable {
    fn from(label: &str) -> Self {
        Observable::Label(label.to_string())
    }
}

impl From<String> for Observable {
    fn from(label: String) -> Self {
        Observable::Label(label)
    }
}

impl From<Pauli> for Observable {
    fn from(pauli: Pauli) -> Self {
        Observable::Pauli(pauli)
    }
}

impl From<Vec<Pauli>> for Observable {
    fn from(paulis: Vec<Pauli>) -> Self {
        Observable::Paulis(paulis)
    }
}

impl From<SparsePauliOp> for Observable {
    fn from(op: SparsePauliOp) -> Self {
        Observable::Sparse(op)
    }
}

impl TryFrom<Observable> for SparsePauliOp {
    type Error = ExpvalError;

    fn try_from(observable: Observable) -> Result<Self, Self::Error> {
        observable.into_operator()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_conversion() {
        let op = Observable::from("XZ").into_operator().unwrap();
        assert_eq!(op.labels(), vec!["XZ"]);

        let err = Observable::from("XQ").into_operator().unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn test_paulis_conversion() {
        let paulis = vec![
            Pauli::from_label("XI").unwrap(),
            Pauli::from_label("IZ").unwrap(),
        ];
        let op = Observable::from(paulis).into_operator().unwrap();
        assert_eq!(op.len(), 2);

        let err = Observable::Paulis(vec![]).into_operator().unwrap_err();
        assert!(err.is_type_error());

        let mixed = vec![
            Pauli::from_label("X").unwrap(),
            Pauli::from_label("IZ").unwrap(),
        ];
        let err = Observable::from(mixed).into_operator().unwrap_err();
        assert!(err.is_value_error());
    }

    #[test]
    fn test_sparse_passthrough() {
        let op = SparsePauliOp::from_list([("ZZ", 2.0)]).unwrap();
        let converted: SparsePauliOp = Observable::from(op.clone()).try_into().unwrap();
        assert_eq!(converted, op);
    }

    #[test]
    fn test_serde_tagged() {
        let obs = Observable::from("-Z");
        let json = serde_json::to_string(&obs).unwrap();
        assert_eq!(json, r#"{"kind":"label","value":"-Z"}"#);

        let pauli: Observable = serde_json::from_str(r#"{"kind":"pauli","value":"XY"}"#).unwrap();
        assert_eq!(pauli.to_operator().unwrap().labels(), vec!["XY"]);
    }
}
