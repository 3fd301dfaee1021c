//! Error types for dimension-checked operations.
//!
//! Only dimensional mismatches are runtime errors. A value type lacking an operation (say, a quantity of a type
//! with no `/`) is rejected by the compiler through the trait bounds on each operator:
//!
//! ```compile_fail
//! use dimq_core::{DimensionSet, Quantity};
//!
//! struct Opaque;
//! let q = Quantity::new(Opaque, DimensionSet::empty());
//! let _ = q / 2.0;
//! ```

use crate::dimension::DimensionSet;
use core::fmt;

/// Result type for dimension-checked operations.
pub type DimensionResult<T> = Result<T, DimensionError>;

/// Operation that was rejected by a dimension check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `left + right`
    Add,
    /// `left - right`
    Subtract,
    /// `left += right`
    AddAssign,
    /// `left -= right`
    SubtractAssign,
    /// Any of `==`, `!=`, `<`, `<=`, `>`, `>=`.
    Compare,
    /// Replacing the value of a quantity with another quantity's.
    Assign,
    /// Building a quantity of a declared dimension from another quantity.
    Convert,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::AddAssign => "add-assign",
            Operation::SubtractAssign => "subtract-assign",
            Operation::Compare => "compare",
            Operation::Assign => "assign",
            Operation::Convert => "convert",
        })
    }
}

/// Error type for dimension-checked operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    /// The operation requires equal dimensions and the operands differ.
    #[error("cannot {operation} quantities of incompatible dimensions `{left:#}` and `{right:#}`")]
    IncompatibleDimensions {
        /// What was attempted.
        operation: Operation,
        /// Dimension of the left operand (or of the receiver).
        left: DimensionSet,
        /// Dimension of the right operand.
        right: DimensionSet,
    },
}

impl DimensionError {
    /// Both dimension-sets involved, left first.
    pub fn dimensions(&self) -> (&DimensionSet, &DimensionSet) {
        match self {
            DimensionError::IncompatibleDimensions { left, right, .. } => (left, right),
        }
    }

    /// The rejected operation.
    pub fn operation(&self) -> Operation {
        match self {
            DimensionError::IncompatibleDimensions { operation, .. } => *operation,
        }
    }
}

/// Fails with [`DimensionError::IncompatibleDimensions`] unless `left` equals `right`.
pub(crate) fn ensure_compatible(
    operation: Operation,
    left: &DimensionSet,
    right: &DimensionSet,
) -> DimensionResult<()> {
    if left.equal(right) {
        return Ok(());
    }
    log::debug!("rejected {operation}: `{left:#}` vs `{right:#}`");
    Err(DimensionError::IncompatibleDimensions {
        operation,
        left: left.clone(),
        right: right.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::BaseDimension;
    use alloc::string::ToString;

    enum Mass {}
    impl BaseDimension for Mass {
        const SYMBOL: &'static str = "kg";
    }
    enum Time {}
    impl BaseDimension for Time {
        const SYMBOL: &'static str = "s";
    }

    #[test]
    fn compatible_is_ok() {
        let d = Mass::dimension();
        assert!(ensure_compatible(Operation::Add, &d, &d.add(&DimensionSet::empty())).is_ok());
    }

    #[test]
    fn incompatible_carries_both_dimensions() {
        let err = ensure_compatible(Operation::Subtract, &Mass::dimension(), &Time::dimension())
            .unwrap_err();
        assert_eq!(err.operation(), Operation::Subtract);
        let (left, right) = err.dimensions();
        assert_eq!(left, &Mass::dimension());
        assert_eq!(right, &Time::dimension());
    }

    #[test]
    fn message_names_both_dimensions() {
        let err = ensure_compatible(
            Operation::Compare,
            &Time::dimension().inverse(),
            &DimensionSet::empty(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot compare quantities of incompatible dimensions `s^-1` and `1`"
        );
    }
}
