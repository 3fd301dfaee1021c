//! Dimension-set algebra.
//!
//! A [`DimensionSet`] is an immutable multiset of `(base dimension, exponent)` pairs: `m s^-1` for a velocity,
//! `kg m s^-2` for a force, and the empty set for a plain number. Every operation returns a new set.
//!
//! Invariants kept by the public operations:
//!
//! - at most one entry per [`Tag`] (entries for the same tag are merged by summing exponents);
//! - no zero exponents after [`DimensionSet::add`], [`DimensionSet::multiply`] or [`DimensionSet::prune`]
//!   ([`DimensionSet::add_entry`] alone may leave one behind);
//! - equality ignores entry order and zero entries.
//!
//! ```rust
//! use dimq_core::{BaseDimension, DimensionSet};
//!
//! pub enum Length {}
//! impl BaseDimension for Length {
//!     const SYMBOL: &'static str = "m";
//!     const ORDER: u16 = 2;
//! }
//! pub enum Time {}
//! impl BaseDimension for Time {
//!     const SYMBOL: &'static str = "s";
//!     const ORDER: u16 = 3;
//! }
//!
//! let velocity = Length::dimension().divide(&Time::dimension());
//! let distance = velocity.add(&Time::dimension());
//! assert_eq!(distance, Length::dimension());
//! assert_eq!(format!("{:#}", velocity.canonical()), "m s^-1");
//! ```

use crate::tag::{BaseDimension, Tag};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Div, Mul};

/// One `(tag, exponent)` pair of a [`DimensionSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    tag: Tag,
    exponent: i32,
}

impl Entry {
    /// Creates an entry.
    #[inline]
    pub const fn new(tag: Tag, exponent: i32) -> Self {
        Self { tag, exponent }
    }

    /// The base dimension.
    #[inline]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Its exponent; negative for inverse dimensions.
    #[inline]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }
}

/// Immutable multiset of base dimensions with integer exponents.
#[derive(Clone, Debug, Default)]
pub struct DimensionSet {
    entries: Vec<Entry>,
}

impl DimensionSet {
    /// The dimensionless set.
    pub const EMPTY: Self = Self {
        entries: Vec::new(),
    };

    /// Returns the dimensionless set.
    #[inline]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Set with exactly one entry, `(tag, 1)`.
    pub fn single(tag: Tag) -> Self {
        Self {
            entries: vec![Entry::new(tag, 1)],
        }
    }

    /// Shorthand for `DimensionSet::single(Tag::of::<T>())`.
    #[inline]
    pub fn of<T: BaseDimension>() -> Self {
        Self::single(Tag::of::<T>())
    }

    /// Adds `exponent` to the entry for `tag`.
    ///
    /// A matching entry is merged in place; otherwise the new entry goes after every existing one. The result is
    /// **not** pruned, so a merge that cancels out leaves a zero entry behind.
    ///
    /// ```rust
    /// # use dimq_core::{BaseDimension, DimensionSet, Tag};
    /// # pub enum A {}
    /// # impl BaseDimension for A { const SYMBOL: &'static str = "a"; }
    /// let cancelled = A::dimension().add_entry(Tag::of::<A>(), -1);
    /// assert_eq!(cancelled.len(), 1);
    /// assert!(cancelled.prune().is_empty());
    /// ```
    ///
    /// # Panics
    ///
    /// If the merged exponent overflows `i32`. [`checked_add_entry`](Self::checked_add_entry) reports it instead.
    pub fn add_entry(&self, tag: Tag, exponent: i32) -> Self {
        self.try_add_entry(tag, exponent)
            .unwrap_or_else(|tag| exponent_overflow(tag))
    }

    /// [`add_entry`](Self::add_entry), or `None` if the merged exponent overflows `i32`.
    pub fn checked_add_entry(&self, tag: Tag, exponent: i32) -> Option<Self> {
        self.try_add_entry(tag, exponent).ok()
    }

    fn try_add_entry(&self, tag: Tag, exponent: i32) -> Result<Self, Tag> {
        let mut entries = self.entries.clone();
        merge_entry(&mut entries, tag, exponent)?;
        Ok(Self { entries })
    }

    /// Removes every zero-exponent entry, keeping the relative order of the others.
    pub fn prune(&self) -> Self {
        self.clone().pruned()
    }

    /// Union with exponent summation per tag, then [`prune`](Self::prune).
    ///
    /// The entries of `self` are folded into `other` last-to-first, so `a.add(&b)` and `b.add(&a)` may list their
    /// entries in different orders while still being equal.
    ///
    /// # Panics
    ///
    /// If a summed exponent overflows `i32`. [`checked_add`](Self::checked_add) reports it instead.
    pub fn add(&self, other: &Self) -> Self {
        self.try_add(other).unwrap_or_else(|tag| exponent_overflow(tag))
    }

    /// [`add`](Self::add), or `None` if a summed exponent overflows `i32`.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.try_add(other).ok()
    }

    fn try_add(&self, other: &Self) -> Result<Self, Tag> {
        let mut entries = other.entries.clone();
        for entry in self.entries.iter().rev() {
            merge_entry(&mut entries, entry.tag, entry.exponent)?;
        }
        Ok(Self { entries }.pruned())
    }

    /// Multiplies every exponent by `factor`, then prunes.
    ///
    /// A zero factor gives the empty set; `-1` gives the inverse dimension.
    ///
    /// # Panics
    ///
    /// If a product overflows `i32` (including `multiply(-1)` of an `i32::MIN` exponent).
    /// [`checked_multiply`](Self::checked_multiply) reports it instead.
    pub fn multiply(&self, factor: i32) -> Self {
        self.try_multiply(factor)
            .unwrap_or_else(|tag| exponent_overflow(tag))
    }

    /// [`multiply`](Self::multiply), or `None` if a product overflows `i32`.
    pub fn checked_multiply(&self, factor: i32) -> Option<Self> {
        self.try_multiply(factor).ok()
    }

    fn try_multiply(&self, factor: i32) -> Result<Self, Tag> {
        let entries = self
            .entries
            .iter()
            .map(|entry| {
                entry
                    .exponent
                    .checked_mul(factor)
                    .map(|exponent| Entry::new(entry.tag, exponent))
                    .ok_or(entry.tag)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries }.pruned())
    }

    /// Inverse dimension, `multiply(-1)`.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.multiply(-1)
    }

    /// Dimension of a quotient: `self.add(&other.multiply(-1))`.
    #[inline]
    pub fn divide(&self, other: &Self) -> Self {
        self.add(&other.inverse())
    }

    /// Dimensional equality: every tag has the same exponent in both sets, absent tags counting as zero.
    ///
    /// Symmetric, order independent, and blind to zero entries. Also available as `==`.
    pub fn equal(&self, other: &Self) -> bool {
        self.canonical().entries == other.canonical().entries
    }

    /// Pruned copy with entries sorted by tag ([`BaseDimension::ORDER`] first).
    pub fn canonical(&self) -> Self {
        let mut canonical = self.prune();
        canonical.entries.sort_unstable_by(|a, b| a.tag.cmp(&b.tag));
        canonical
    }

    /// Exponent of `tag`, `0` when absent.
    pub fn exponent(&self, tag: Tag) -> i32 {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map_or(0, |entry| entry.exponent)
    }

    /// Raw entries in their current order.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterates over the raw entries.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Number of raw entries, zero exponents included.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when there are no raw entries at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` when every exponent is zero, i.e. the set equals the empty set.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.entries.iter().all(|entry| entry.exponent == 0)
    }

    /// Writes the compact form to `sink`: `<symbol><exponent>` per non-zero entry, exponent `1` omitted.
    ///
    /// Entry order is whatever the set currently holds; do not rely on it across tags.
    pub fn render<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        for entry in self.entries.iter().filter(|entry| entry.exponent != 0) {
            sink.write_str(entry.tag.symbol())?;
            if entry.exponent != 1 {
                write!(sink, "{}", entry.exponent)?;
            }
        }
        Ok(())
    }

    fn render_terms<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        let mut written = false;
        for entry in self.entries.iter().filter(|entry| entry.exponent != 0) {
            if written {
                sink.write_char(' ')?;
            }
            sink.write_str(entry.tag.symbol())?;
            if entry.exponent != 1 {
                write!(sink, "^{}", entry.exponent)?;
            }
            written = true;
        }
        if !written {
            sink.write_char('1')?;
        }
        Ok(())
    }

    fn pruned(mut self) -> Self {
        self.entries.retain(|entry| entry.exponent != 0);
        self
    }
}

/// Merges `(tag, exponent)` into `entries`; on overflow returns the tag and leaves `entries` untouched.
fn merge_entry(entries: &mut Vec<Entry>, tag: Tag, exponent: i32) -> Result<(), Tag> {
    match entries.iter_mut().find(|entry| entry.tag == tag) {
        Some(entry) => entry.exponent = entry.exponent.checked_add(exponent).ok_or(tag)?,
        None => entries.push(Entry::new(tag, exponent)),
    }
    Ok(())
}

#[cold]
#[inline(never)]
fn exponent_overflow(tag: Tag) -> ! {
    panic!("exponent of dimension `{}` overflows i32", tag)
}

impl PartialEq for DimensionSet {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for DimensionSet {}

impl Hash for DimensionSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().entries.hash(state);
    }
}

/// `{}` gives the compact form (`ms-1`), `{:#}` the spaced form used in diagnostics (`m s^-1`, `1` when empty).
impl fmt::Display for DimensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.render_terms(f)
        } else {
            self.render(f)
        }
    }
}

impl From<Tag> for DimensionSet {
    #[inline]
    fn from(tag: Tag) -> Self {
        Self::single(tag)
    }
}

/// Folds the pairs with [`DimensionSet::add_entry`], then prunes. Panics if an exponent overflows `i32`.
impl FromIterator<(Tag, i32)> for DimensionSet {
    fn from_iter<I: IntoIterator<Item = (Tag, i32)>>(iter: I) -> Self {
        let mut entries = Vec::new();
        for (tag, exponent) in iter {
            if let Err(tag) = merge_entry(&mut entries, tag, exponent) {
                exponent_overflow(tag);
            }
        }
        Self { entries }.pruned()
    }
}

impl<'a> IntoIterator for &'a DimensionSet {
    type Item = &'a Entry;
    type IntoIter = core::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators: product of dimensions is `add`, quotient is `divide`
// ─────────────────────────────────────────────────────────────────────────────

impl Mul for &DimensionSet {
    type Output = DimensionSet;
    #[inline]
    fn mul(self, rhs: Self) -> DimensionSet {
        self.add(rhs)
    }
}

impl Mul for DimensionSet {
    type Output = DimensionSet;
    #[inline]
    fn mul(self, rhs: Self) -> DimensionSet {
        self.add(&rhs)
    }
}

impl Div for &DimensionSet {
    type Output = DimensionSet;
    #[inline]
    fn div(self, rhs: Self) -> DimensionSet {
        self.divide(rhs)
    }
}

impl Div for DimensionSet {
    type Output = DimensionSet;
    #[inline]
    fn div(self, rhs: Self) -> DimensionSet {
        self.divide(&rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Entry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Entry", 2)?;
        state.serialize_field("symbol", self.tag.symbol())?;
        state.serialize_field("exponent", &self.exponent)?;
        state.end()
    }
}

/// Serializes the pruned entries as a sequence of `{"symbol", "exponent"}` objects.
#[cfg(feature = "serde")]
impl serde::Serialize for DimensionSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.entries.iter().filter(|entry| entry.exponent != 0))
    }
}
