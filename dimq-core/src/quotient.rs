//! Result of dividing one quantity by another.

use crate::dimension::DimensionSet;
use crate::Quantity;
use core::fmt::{Display, Formatter, Result};

static NO_DIMENSION: DimensionSet = DimensionSet::EMPTY;

/// Outcome of `quantity / quantity`.
///
/// Dividing two quantities of equal dimension cancels the dimension entirely, and the result is a plain value
/// ([`Quotient::Scalar`]) rather than a dimensionless quantity. Any other division yields a
/// [`Quotient::Quantity`] whose dimension is `left - right`.
///
/// ```rust
/// use dimq_core::{BaseDimension, Quantity, Quotient};
///
/// pub enum Length {}
/// impl BaseDimension for Length { const SYMBOL: &'static str = "m"; }
/// pub enum Time {}
/// impl BaseDimension for Time { const SYMBOL: &'static str = "s"; }
///
/// let ratio = Quantity::of::<Length>(6) / Quantity::of::<Length>(3);
/// assert!(matches!(ratio, Quotient::Scalar(2)));
///
/// let speed = Quantity::of::<Length>(6) / Quantity::of::<Time>(3);
/// assert!(!speed.is_scalar());
/// assert_eq!(*speed.value(), 2);
/// ```
#[derive(Clone, Debug)]
pub enum Quotient<V> {
    /// The operand dimensions cancelled out.
    Scalar(V),
    /// The quotient still carries a dimension.
    Quantity(Quantity<V>),
}

impl<V> Quotient<V> {
    /// `true` for [`Quotient::Scalar`].
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Quotient::Scalar(_))
    }

    /// The plain value, if the dimensions cancelled out.
    #[inline]
    pub fn scalar(self) -> Option<V> {
        match self {
            Quotient::Scalar(value) => Some(value),
            Quotient::Quantity(_) => None,
        }
    }

    /// The numeric result, whichever shape it has.
    #[inline]
    pub fn value(&self) -> &V {
        match self {
            Quotient::Scalar(value) => value,
            Quotient::Quantity(quantity) => quantity.value(),
        }
    }

    /// Dimension of the result; empty for a scalar.
    #[inline]
    pub fn dimension(&self) -> &DimensionSet {
        match self {
            Quotient::Scalar(_) => &NO_DIMENSION,
            Quotient::Quantity(quantity) => quantity.dimension(),
        }
    }

    /// Widens to a quantity; a scalar becomes a dimensionless quantity.
    #[inline]
    pub fn into_quantity(self) -> Quantity<V> {
        match self {
            Quotient::Scalar(value) => Quantity::dimensionless(value),
            Quotient::Quantity(quantity) => quantity,
        }
    }
}

impl<V> From<Quotient<V>> for Quantity<V> {
    #[inline]
    fn from(quotient: Quotient<V>) -> Self {
        quotient.into_quantity()
    }
}

impl<V: Display> Display for Quotient<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Quotient::Scalar(value) => Display::fmt(value, f),
            Quotient::Quantity(quantity) => Display::fmt(quantity, f),
        }
    }
}
