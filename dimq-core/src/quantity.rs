//! Quantity type and its implementations.

use crate::dimension::DimensionSet;
use crate::error::{ensure_compatible, DimensionResult, Operation};
use crate::quotient::Quotient;
use crate::tag::BaseDimension;
use core::cmp::Ordering;
use core::fmt;
use core::ops::*;
use num_traits::One;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// A value tagged with a [`DimensionSet`].
///
/// The dimension is fixed at construction. Arithmetic that needs equal dimensions (`+`, `-`, comparisons,
/// assignment) checks them first and returns a [`DimensionError`](crate::DimensionError) instead of a value;
/// multiplication and division derive the result dimension with the set algebra.
///
/// The value type `V` only needs the operations actually used: `+` needs `V: Add<W>`, `*` needs `V: Mul<W>`,
/// and so on.
///
/// # Examples
///
/// ```rust
/// use dimq_core::{BaseDimension, Quantity};
///
/// pub enum Length {}
/// impl BaseDimension for Length { const SYMBOL: &'static str = "m"; }
/// pub enum Time {}
/// impl BaseDimension for Time { const SYMBOL: &'static str = "s"; }
///
/// let d = Quantity::<f64>::one_of::<Length>() * 100.0;
/// let t = Quantity::<f64>::one_of::<Time>() * 20.0;
/// let v = (d.clone() / t.clone()).into_quantity();
/// assert_eq!(*v.value(), 5.0);
///
/// let back = v * t;
/// assert!(back.dimension() == d.dimension());
/// assert!((back + d).is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct Quantity<V> {
    value: V,
    dimension: DimensionSet,
}

impl<V> Quantity<V> {
    /// Creates a quantity from a raw value and its dimension.
    #[inline]
    pub const fn new(value: V, dimension: DimensionSet) -> Self {
        Self { value, dimension }
    }

    /// Creates a quantity of the base dimension `T`.
    ///
    /// ```rust
    /// use dimq_core::{BaseDimension, Quantity};
    /// pub enum Mass {}
    /// impl BaseDimension for Mass { const SYMBOL: &'static str = "kg"; }
    /// assert_eq!(Quantity::of::<Mass>(3).to_string(), "3kg");
    /// ```
    #[inline]
    pub fn of<T: BaseDimension>(value: V) -> Self {
        Self::new(value, T::dimension())
    }

    /// Creates a quantity with the empty dimension.
    #[inline]
    pub const fn dimensionless(value: V) -> Self {
        Self::new(value, DimensionSet::EMPTY)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the raw value. The dimension stays as it is.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the quantity, returning the raw value.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Returns the dimension.
    #[inline]
    pub const fn dimension(&self) -> &DimensionSet {
        &self.dimension
    }

    /// Splits into value and dimension.
    #[inline]
    pub fn into_parts(self) -> (V, DimensionSet) {
        (self.value, self.dimension)
    }

    /// `true` when the dimension equals the empty set.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// Unary plus: the quantity itself.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// Converts the value type, keeping the dimension.
    ///
    /// ```rust
    /// use dimq_core::{DimensionSet, Quantity};
    /// let q = Quantity::new(3_i32, DimensionSet::empty());
    /// let wide: Quantity<i64> = q.cast();
    /// assert_eq!(*wide.value(), 3_i64);
    /// ```
    #[inline]
    pub fn cast<W: From<V>>(self) -> Quantity<W> {
        Quantity::new(W::from(self.value), self.dimension)
    }

    /// Returns `self` if its dimension equals `expected`.
    pub fn expect_dimension(self, expected: &DimensionSet) -> DimensionResult<Self> {
        ensure_compatible(Operation::Convert, expected, &self.dimension)?;
        Ok(self)
    }

    /// Builds a quantity of the declared dimension `expected` from `other`, converting the value type.
    ///
    /// ```rust
    /// use dimq_core::{BaseDimension, Quantity};
    /// pub enum Length {}
    /// impl BaseDimension for Length { const SYMBOL: &'static str = "m"; }
    /// pub enum Time {}
    /// impl BaseDimension for Time { const SYMBOL: &'static str = "s"; }
    ///
    /// let metres = Quantity::of::<Length>(2_i32);
    /// let ok = Quantity::<f64>::try_from_quantity(&Length::dimension(), metres.clone());
    /// assert_eq!(*ok.unwrap().value(), 2.0);
    /// assert!(Quantity::<f64>::try_from_quantity(&Time::dimension(), metres).is_err());
    /// ```
    pub fn try_from_quantity<W>(expected: &DimensionSet, other: Quantity<W>) -> DimensionResult<Self>
    where
        V: From<W>,
    {
        ensure_compatible(Operation::Convert, expected, &other.dimension)?;
        Ok(Self::new(V::from(other.value), expected.clone()))
    }

    /// Replaces the value with `other`'s, which must have the same dimension.
    pub fn try_assign<W>(&mut self, other: Quantity<W>) -> DimensionResult<()>
    where
        V: From<W>,
    {
        ensure_compatible(Operation::Assign, &self.dimension, &other.dimension)?;
        self.value = V::from(other.value);
        Ok(())
    }

    /// Checked addition; `a + b` is the operator form.
    pub fn checked_add<W>(self, rhs: Quantity<W>) -> DimensionResult<Quantity<V::Output>>
    where
        V: Add<W>,
    {
        ensure_compatible(Operation::Add, &self.dimension, &rhs.dimension)?;
        Ok(Quantity::new(self.value + rhs.value, self.dimension))
    }

    /// Checked subtraction; `a - b` is the operator form.
    pub fn checked_sub<W>(self, rhs: Quantity<W>) -> DimensionResult<Quantity<V::Output>>
    where
        V: Sub<W>,
    {
        ensure_compatible(Operation::Subtract, &self.dimension, &rhs.dimension)?;
        Ok(Quantity::new(self.value - rhs.value, self.dimension))
    }

    /// Checked `+=`. On error the value is left untouched.
    pub fn try_add_assign<W>(&mut self, rhs: Quantity<W>) -> DimensionResult<()>
    where
        V: AddAssign<W>,
    {
        ensure_compatible(Operation::AddAssign, &self.dimension, &rhs.dimension)?;
        self.value += rhs.value;
        Ok(())
    }

    /// Checked `-=`. On error the value is left untouched.
    pub fn try_sub_assign<W>(&mut self, rhs: Quantity<W>) -> DimensionResult<()>
    where
        V: SubAssign<W>,
    {
        ensure_compatible(Operation::SubtractAssign, &self.dimension, &rhs.dimension)?;
        self.value -= rhs.value;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Comparisons
    //
    // Quantities implement neither `PartialEq` nor `PartialOrd`: comparing
    // different dimensions is an error, not `false`.
    // ─────────────────────────────────────────────────────────────────────────

    /// Checked `==`.
    pub fn checked_eq<W>(&self, other: &Quantity<W>) -> DimensionResult<bool>
    where
        V: PartialEq<W>,
    {
        ensure_compatible(Operation::Compare, &self.dimension, &other.dimension)?;
        Ok(self.value == other.value)
    }

    /// Checked `!=`.
    pub fn checked_ne<W>(&self, other: &Quantity<W>) -> DimensionResult<bool>
    where
        V: PartialEq<W>,
    {
        ensure_compatible(Operation::Compare, &self.dimension, &other.dimension)?;
        Ok(self.value != other.value)
    }

    /// Checked `partial_cmp`.
    pub fn checked_partial_cmp<W>(&self, other: &Quantity<W>) -> DimensionResult<Option<Ordering>>
    where
        V: PartialOrd<W>,
    {
        ensure_compatible(Operation::Compare, &self.dimension, &other.dimension)?;
        Ok(self.value.partial_cmp(&other.value))
    }

    /// Checked `<`.
    pub fn checked_lt<W>(&self, other: &Quantity<W>) -> DimensionResult<bool>
    where
        V: PartialOrd<W>,
    {
        ensure_compatible(Operation::Compare, &self.dimension, &other.dimension)?;
        Ok(self.value < other.value)
    }

    /// Checked `<=`.
    pub fn checked_le<W>(&self, other: &Quantity<W>) -> DimensionResult<bool>
    where
        V: PartialOrd<W>,
    {
        ensure_compatible(Operation::Compare, &self.dimension, &other.dimension)?;
        Ok(self.value <= other.value)
    }

    /// Checked `>`.
    pub fn checked_gt<W>(&self, other: &Quantity<W>) -> DimensionResult<bool>
    where
        V: PartialOrd<W>,
    {
        ensure_compatible(Operation::Compare, &self.dimension, &other.dimension)?;
        Ok(self.value > other.value)
    }

    /// Checked `>=`.
    pub fn checked_ge<W>(&self, other: &Quantity<W>) -> DimensionResult<bool>
    where
        V: PartialOrd<W>,
    {
        ensure_compatible(Operation::Compare, &self.dimension, &other.dimension)?;
        Ok(self.value >= other.value)
    }
}

impl<V: One> Quantity<V> {
    /// The value one of `dimension`, used to build scaled quantities (`one * 5`).
    #[inline]
    pub fn one(dimension: DimensionSet) -> Self {
        Self::new(V::one(), dimension)
    }

    /// The value one of the base dimension `T`.
    #[inline]
    pub fn one_of<T: BaseDimension>() -> Self {
        Self::one(T::dimension())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<V: Neg> Neg for Quantity<V> {
    type Output = Quantity<V::Output>;
    #[inline]
    fn neg(self) -> Self::Output {
        Quantity::new(-self.value, self.dimension)
    }
}

impl<V: Add<W>, W> Add<Quantity<W>> for Quantity<V> {
    type Output = DimensionResult<Quantity<V::Output>>;
    #[inline]
    fn add(self, rhs: Quantity<W>) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<V: Sub<W>, W> Sub<Quantity<W>> for Quantity<V> {
    type Output = DimensionResult<Quantity<V::Output>>;
    #[inline]
    fn sub(self, rhs: Quantity<W>) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl<V: Mul<W>, W> Mul<Quantity<W>> for Quantity<V> {
    type Output = Quantity<V::Output>;
    #[inline]
    fn mul(self, rhs: Quantity<W>) -> Self::Output {
        let dimension = self.dimension.add(&rhs.dimension);
        Quantity::new(self.value * rhs.value, dimension)
    }
}

impl<V: Div<W>, W> Div<Quantity<W>> for Quantity<V> {
    type Output = Quotient<V::Output>;
    fn div(self, rhs: Quantity<W>) -> Self::Output {
        if self.dimension.equal(&rhs.dimension) {
            log::trace!("quotient of `{:#}` by itself is a scalar", self.dimension);
            return Quotient::Scalar(self.value / rhs.value);
        }
        let dimension = self.dimension.divide(&rhs.dimension);
        Quotient::Quantity(Quantity::new(self.value / rhs.value, dimension))
    }
}

impl_scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Value followed by the compact dimension (`15ab`); `{:#}` puts a space before the spaced dimension form and
/// omits it when dimensionless (`15 a b`). Formatting flags such as precision apply to the value.
impl<V: fmt::Display> fmt::Display for Quantity<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if f.alternate() {
            if self.dimension.is_dimensionless() {
                return Ok(());
            }
            f.write_str(" ")?;
        }
        fmt::Display::fmt(&self.dimension, f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

/// Serializes as `{"value": ..., "dimension": [{"symbol", "exponent"}, ...]}`.
///
/// There is no `Deserialize`: rebuilding a dimension from symbols would mean parsing unit strings.
#[cfg(feature = "serde")]
impl<V: Serialize> Serialize for Quantity<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("dimension", &self.dimension)?;
        state.end()
    }
}
