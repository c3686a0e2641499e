//! Pauli terms and their integer masks
//!
//! Gantree: L1_Operators → Pauli, PauliMaskCodec
//!
//! A Pauli term is stored in symplectic form: two equal-length bit vectors
//! `z` and `x` (Y sets both) plus a global phase drawn from the fourth roots
//! of unity. Qubit `i` of the term lines up with bit `i` of an outcome.
//!
//! Labels follow the usual convention: an optional phase prefix (`+`, `-`,
//! `i`, `-i`, `+i`, with `j` accepted for `i`) followed by `I`, `X`, `Y`, `Z`
//! characters, rightmost character acting on qubit 0.

use crate::constants::register::MAX_QUBITS;
use crate::error::{ExpvalError, ExpvalResult};
use crate::types::{Outcome, QubitId};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Phase
// ============================================================================

/// Global phase of a Pauli term, one of ±1, ±i
/// Gantree: Phase // ±1, ±i
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// +1
    #[default]
    One,
    /// +i
    I,
    /// -1
    MinusOne,
    /// -i
    MinusI,
}

impl Phase {
    /// Phase as a complex number
    pub fn to_complex(self) -> Complex64 {
        match self {
            Phase::One => Complex64::new(1.0, 0.0),
            Phase::I => Complex64::new(0.0, 1.0),
            Phase::MinusOne => Complex64::new(-1.0, 0.0),
            Phase::MinusI => Complex64::new(0.0, -1.0),
        }
    }

    /// Check if the phase is real (±1)
    pub fn is_real(self) -> bool {
        matches!(self, Phase::One | Phase::MinusOne)
    }

    /// Label prefix for this phase
    pub fn prefix(self) -> &'static str {
        match self {
            Phase::One => "",
            Phase::I => "i",
            Phase::MinusOne => "-",
            Phase::MinusI => "-i",
        }
    }

    /// Split a label into its phase and the remaining Pauli characters
    fn split_label(label: &str) -> (Self, &str) {
        let (negative, rest) = match label.as_bytes().first() {
            Some(b'-') => (true, &label[1..]),
            Some(b'+') => (false, &label[1..]),
            _ => (false, label),
        };
        let (imaginary, rest) = match rest.as_bytes().first() {
            Some(b'i') | Some(b'j') => (true, &rest[1..]),
            _ => (false, rest),
        };
        let phase = match (negative, imaginary) {
            (false, false) => Phase::One,
            (false, true) => Phase::I,
            (true, false) => Phase::MinusOne,
            (true, true) => Phase::MinusI,
        };
        (phase, rest)
    }
}

// ============================================================================
// Single-Qubit Pauli
// ============================================================================

/// Single-qubit Pauli operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauliOp {
    /// Identity
    I,
    /// Pauli-X
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z
    Z,
}

impl PauliOp {
    /// Build from symplectic bits
    pub fn from_symplectic(z: bool, x: bool) -> Self {
        match (z, x) {
            (false, false) => PauliOp::I,
            (false, true) => PauliOp::X,
            (true, true) => PauliOp::Y,
            (true, false) => PauliOp::Z,
        }
    }

    /// Symplectic bits `(z, x)`
    pub fn symplectic(self) -> (bool, bool) {
        match self {
            PauliOp::I => (false, false),
            PauliOp::X => (false, true),
            PauliOp::Y => (true, true),
            PauliOp::Z => (true, false),
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PauliOp::I),
            'X' => Some(PauliOp::X),
            'Y' => Some(PauliOp::Y),
            'Z' => Some(PauliOp::Z),
            _ => None,
        }
    }

    /// Convert to character
    pub fn to_char(self) -> char {
        match self {
            PauliOp::I => 'I',
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        }
    }
}

// ============================================================================
// Pauli
// ============================================================================

/// n-qubit Pauli term with global phase
/// Gantree: Pauli // z, x, phase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pauli {
    /// Z-type support per qubit
    z: Vec<bool>,

    /// X-type support per qubit
    x: Vec<bool>,

    /// Global phase
    phase: Phase,
}

impl Pauli {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create from symplectic vectors
    /// Gantree: from_symplectic(z,x,phase) -> Result<Self> // 생성+검증
    pub fn from_symplectic(z: Vec<bool>, x: Vec<bool>, phase: Phase) -> ExpvalResult<Self> {
        if z.len() != x.len() {
            return Err(ExpvalError::SymplecticMismatch {
                z_len: z.len(),
                x_len: x.len(),
            });
        }
        check_width(z.len())?;
        Ok(Self { z, x, phase })
    }

    /// Parse a label such as `"-iXYZ"`
    /// Gantree: from_label(s) -> Result<Self> // 레이블 파싱
    pub fn from_label(label: &str) -> ExpvalResult<Self> {
        let (phase, body) = Phase::split_label(label.trim());
        let ops: Option<Vec<PauliOp>> = body.chars().rev().map(PauliOp::from_char).collect();
        let ops = ops.ok_or_else(|| ExpvalError::InvalidPauliLabel(label.to_string()))?;
        if ops.is_empty() {
            return Err(ExpvalError::InvalidPauliLabel(label.to_string()));
        }
        let (z, x) = ops.into_iter().map(PauliOp::symplectic).unzip();
        Self::from_symplectic(z, x, phase)
    }

    /// Assemble from vectors already known to be consistent
    pub(crate) fn from_validated_parts(z: Vec<bool>, x: Vec<bool>, phase: Phase) -> Self {
        debug_assert_eq!(z.len(), x.len());
        Self { z, x, phase }
    }

    /// All-identity term on `num_qubits` qubits
    pub fn identity(num_qubits: usize) -> ExpvalResult<Self> {
        Self::from_symplectic(vec![false; num_qubits], vec![false; num_qubits], Phase::One)
    }

    /// Same operator with a different global phase
    pub fn with_phase(&self, phase: Phase) -> Self {
        Self {
            z: self.z.clone(),
            x: self.x.clone(),
            phase,
        }
    }

    /// Same operator with phase +1
    pub fn unphased(&self) -> Self {
        self.with_phase(Phase::One)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.z.len()
    }

    /// Z-type support vector
    pub fn z(&self) -> &[bool] {
        &self.z
    }

    /// X-type support vector
    pub fn x(&self) -> &[bool] {
        &self.x
    }

    /// Global phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Single-qubit operator on `qubit`
    pub fn op(&self, qubit: QubitId) -> Option<PauliOp> {
        Some(PauliOp::from_symplectic(
            *self.z.get(qubit)?,
            *self.x.get(qubit)?,
        ))
    }

    /// Check if the term acts trivially on `qubit`
    pub fn is_identity_on(&self, qubit: QubitId) -> bool {
        !(self.z.get(qubit).copied().unwrap_or(false) || self.x.get(qubit).copied().unwrap_or(false))
    }

    /// Qubits with non-identity support, ascending
    /// Gantree: support(&self) -> Vec<QubitId> // 지지 큐비트
    pub fn support(&self) -> Vec<QubitId> {
        (0..self.num_qubits())
            .filter(|&q| !self.is_identity_on(q))
            .collect()
    }

    /// Number of non-identity qubits
    pub fn weight(&self) -> usize {
        self.support().len()
    }

    /// Check if the term is identity on every qubit (phase ignored)
    pub fn is_identity(&self) -> bool {
        self.weight() == 0
    }

    /// Label, e.g. `"-iXYZ"`
    pub fn label(&self) -> String {
        let body: String = (0..self.num_qubits())
            .rev()
            .filter_map(|q| self.op(q))
            .map(PauliOp::to_char)
            .collect();
        format!("{}{}", self.phase.prefix(), body)
    }

    // ========================================================================
    // PauliMaskCodec
    // ========================================================================

    /// Integer mask with a 1 on every non-identity qubit
    /// Gantree: integer_mask(&self) -> Outcome // 정수 마스크
    ///
    /// Bit `i` of the mask corresponds to qubit `i`, the same convention used
    /// for outcome integers.
    pub fn integer_mask(&self) -> Outcome {
        self.z
            .iter()
            .zip(&self.x)
            .enumerate()
            .filter(|(_, (z, x))| **z || **x)
            .fold(0, |mask, (q, _)| mask | (1 << q))
    }

    // ========================================================================
    // Relations
    // ========================================================================

    /// Check qubit-wise commutation
    /// Gantree: qubit_wise_commutes(&self,&other) -> bool // 큐비트별 교환
    ///
    /// Two terms commute qubit-wise iff on every qubit at least one of them is
    /// identity or both carry the same single-qubit Pauli. Terms of different
    /// width never commute.
    pub fn qubit_wise_commutes(&self, other: &Pauli) -> bool {
        self.num_qubits() == other.num_qubits()
            && (0..self.num_qubits()).all(|q| {
                self.is_identity_on(q)
                    || other.is_identity_on(q)
                    || (self.z[q] == other.z[q] && self.x[q] == other.x[q])
            })
    }

    /// Check that measuring in this term's basis also diagonalizes `other`
    ///
    /// Holds iff every non-identity qubit of `other` is non-identity here with
    /// identical z/x flags.
    pub fn covers(&self, other: &Pauli) -> bool {
        self.num_qubits() == other.num_qubits()
            && other
                .support()
                .into_iter()
                .all(|q| self.z[q] == other.z[q] && self.x[q] == other.x[q])
    }

    /// Bitwise union of z and x vectors, phase +1
    pub fn union(&self, other: &Pauli) -> ExpvalResult<Pauli> {
        if self.num_qubits() != other.num_qubits() {
            return Err(ExpvalError::QubitCountMismatch {
                expected: self.num_qubits(),
                found: other.num_qubits(),
            });
        }
        let z = self.z.iter().zip(&other.z).map(|(a, b)| a | b).collect();
        let x = self.x.iter().zip(&other.x).map(|(a, b)| a | b).collect();
        Ok(Self {
            z,
            x,
            phase: Phase::One,
        })
    }

    /// Sub-term on the listed qubits, in the listed order
    /// Gantree: restrict(&self,qubits) -> Result<Pauli> // 부분 연산자
    ///
    /// Qubit `qubits[k]` of this term becomes qubit `k` of the result. The
    /// phase is kept.
    pub fn restrict(&self, qubits: &[QubitId]) -> ExpvalResult<Pauli> {
        let mut z = Vec::with_capacity(qubits.len());
        let mut x = Vec::with_capacity(qubits.len());
        for &q in qubits {
            if q >= self.num_qubits() {
                return Err(ExpvalError::QubitOutOfRange {
                    qubit: q,
                    max: self.num_qubits().saturating_sub(1),
                });
            }
            z.push(self.z[q]);
            x.push(self.x[q]);
        }
        Self::from_symplectic(z, x, self.phase)
    }
}

fn check_width(num_qubits: usize) -> ExpvalResult<()> {
    if num_qubits == 0 {
        return Err(ExpvalError::EmptyPauli);
    }
    if num_qubits > MAX_QUBITS {
        return Err(ExpvalError::TooManyQubits {
            num_qubits,
            max: MAX_QUBITS,
        });
    }
    Ok(())
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Pauli {
    type Err = ExpvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl TryFrom<String> for Pauli {
    type Error = ExpvalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value)
    }
}

impl From<Pauli> for String {
    fn from(pauli: Pauli) -> Self {
        pauli.label()
    }
}

// ============================================================================
// Tests
// ============================================================================
