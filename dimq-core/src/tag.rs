//! Base-dimension tags.
//!
//! A *base dimension* is the category that distinguishes a metre from a second. Each one is modelled as a
//! zero-sized marker type implementing [`BaseDimension`]; the algebra only ever sees its [`Tag`].
//!
//! ```rust
//! use dimq_core::{BaseDimension, Tag};
//!
//! pub enum Length {}
//! impl BaseDimension for Length {
//!     const SYMBOL: &'static str = "m";
//! }
//!
//! let tag = Tag::of::<Length>();
//! assert_eq!(tag.symbol(), "m");
//! ```

use crate::dimension::DimensionSet;
use core::any::TypeId;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Marker trait for **base dimensions** (mass, length, time …).
///
/// Identity comes from the implementing type, not from [`BaseDimension::SYMBOL`]: two marker types sharing a
/// symbol are still different dimensions.
pub trait BaseDimension: 'static {
    /// Printable name, used when rendering a [`DimensionSet`].
    const SYMBOL: &'static str;

    /// Declaration order. Only affects [`DimensionSet::canonical`] ordering, never the algebra.
    const ORDER: u16 = 0;

    /// The tag identifying this base dimension.
    #[inline]
    fn tag() -> Tag
    where
        Self: Sized,
    {
        Tag::of::<Self>()
    }

    /// The dimension-set holding only this base dimension, with exponent 1.
    #[inline]
    fn dimension() -> DimensionSet
    where
        Self: Sized,
    {
        DimensionSet::single(Tag::of::<Self>())
    }
}

/// Opaque, comparable identity of a [`BaseDimension`].
#[derive(Clone, Copy)]
pub struct Tag {
    id: TypeId,
    symbol: &'static str,
    order: u16,
}

impl Tag {
    /// Returns the tag of the base dimension `T`.
    #[inline]
    pub fn of<T: BaseDimension>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            symbol: T::SYMBOL,
            order: T::ORDER,
        }
    }

    /// Display name of the base dimension.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Declaration order of the base dimension.
    #[inline]
    pub const fn order(&self) -> u16 {
        self.order
    }
}

impl PartialEq for Tag {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// `order` is a function of `id`, so this stays consistent with `Eq`.
impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self.symbol)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}
