//! Core dimension algebra and dimension-checked quantities.
//!
//! `dimq-core` provides a small, value-level model of physical dimensions:
//!
//! - A *base dimension* is a zero-sized marker type implementing [`BaseDimension`], identified by its [`Tag`].
//! - A [`DimensionSet`] is an immutable multiset of `(tag, exponent)` pairs with the usual algebra: product
//!   ([`DimensionSet::add`]), integer powers ([`DimensionSet::multiply`]), pruning and order-independent equality.
//! - A [`Quantity<V>`] binds a value of any numeric type `V` to a dimension-set. Operators consult the algebra to
//!   reject mismatched dimensions and to derive the dimension of products and quotients.
//!
//! Most users should depend on `dimq` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Rejects adding, subtracting, comparing or assigning quantities of different dimensions, with an error naming
//!   both dimensions, before any arithmetic on the values runs.
//! - Derives dimensions of products and quotients automatically (`m / s`, `kg m s^-2`, …), including the collapse
//!   of `q / q` into a plain scalar.
//! - Works with any value type; each operator only requires the matching operation on `V`.
//!
//! # What this crate does not try to solve
//!
//! - Unit conversion: there are no scale factors, only dimension *kinds*.
//! - Parsing unit strings at runtime.
//! - Fractional exponents; exponents are `i32`.
//!
//! # Quick start
//!
//! ```rust
//! use dimq_core::{si, Quantity, Quotient};
//!
//! let distance = Quantity::<f64>::one(si::length()) * 100.0;
//! let time = Quantity::<f64>::one(si::time()) * 20.0;
//!
//! let speed = (distance.clone() / time.clone()).into_quantity();
//! assert_eq!(speed.dimension(), &si::velocity());
//!
//! // same dimension on both sides: a plain number comes out
//! assert!(matches!(distance.clone() / distance.clone(), Quotient::Scalar(v) if v == 1.0));
//!
//! // different dimensions cannot be added
//! assert!((distance + time).is_err());
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `dimq-core` without `std` (`alloc` is still required):
//!
//! ```toml
//! [dependencies]
//! dimq-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: `Serialize` for [`DimensionSet`] and [`Quantity<V>`].
//!
//! # Panics and errors
//!
//! Dimension mismatches are reported as [`DimensionError`]. Missing operations on the value type are compile
//! errors. Value arithmetic follows `V` (integer overflow and division by zero behave as they do for `V`).
//!
//! Dimension exponents are `i32`. The set operations panic if an exponent would overflow rather than wrap; use
//! [`DimensionSet::checked_add`] and [`DimensionSet::checked_multiply`] to get `None` instead.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

mod dimension;
mod error;
mod quantity;
mod quotient;
mod tag;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{DimensionSet, Entry};
pub use error::{DimensionError, DimensionResult, Operation};
pub use quantity::Quantity;
pub use quotient::Quotient;
pub use tag::{BaseDimension, Tag};

// ─────────────────────────────────────────────────────────────────────────────
// Predefined dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// SI base dimensions and derived dimension-sets.
///
/// Defined in `dimq-core` because the `BaseDimension` derive expands in terms of `crate::BaseDimension`.
pub mod si;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test dimensions for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────────

    pub enum TagA {}
    impl BaseDimension for TagA {
        const SYMBOL: &'static str = "a";
        const ORDER: u16 = 1;
    }

    pub enum TagB {}
    impl BaseDimension for TagB {
        const SYMBOL: &'static str = "b";
        const ORDER: u16 = 2;
    }

    type Q = Quantity<i32>;

    fn qa() -> Q {
        Q::one_of::<TagA>()
    }

    fn qb() -> Q {
        Q::one_of::<TagB>()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Quantity core behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn one_renders_with_its_dimension() {
        assert_eq!(qa().to_string(), "1a");
        assert_eq!(qb().to_string(), "1b");
        assert_eq!(*qa().value(), 1);
    }

    #[test]
    fn quantity_new_and_parts() {
        let q = Quantity::new(42.0, TagA::dimension());
        assert_eq!(*q.value(), 42.0);
        assert_eq!(q.dimension(), &TagA::dimension());
        let (value, dimension) = q.into_parts();
        assert_eq!(value, 42.0);
        assert_eq!(dimension, TagA::dimension());
    }

    #[test]
    fn dimensionless_quantity() {
        let q = Quantity::dimensionless(7);
        assert!(q.is_dimensionless());
        assert_eq!(q.to_string(), "7");
        assert!(!qa().is_dimensionless());
    }

    #[test]
    fn value_mut_keeps_dimension() {
        let mut q = qa();
        *q.value_mut() = 9;
        assert_eq!(q.to_string(), "9a");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Unary operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_neg_and_pos() {
        let q = qa() * 5;
        assert_eq!((-q.clone()).to_string(), "-5a");
        assert_eq!((-(-q.clone())).to_string(), "5a");
        assert_eq!(q.pos().to_string(), "5a");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Add / Sub
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add_same_dimension() {
        let sum = (qa() * 3 + qa() * 7).unwrap();
        assert_eq!(*sum.value(), 10);
        assert_eq!(sum.dimension(), &TagA::dimension());
    }

    #[test]
    fn operator_sub_same_dimension() {
        let diff = (qb() * 10 - qb() * 3).unwrap();
        assert_eq!(diff.to_string(), "7b");
    }

    #[test]
    fn add_different_dimensions_is_rejected() {
        let err = (qa() + qb()).unwrap_err();
        assert_eq!(err.operation(), Operation::Add);
        let (left, right) = err.dimensions();
        assert_eq!(left, &TagA::dimension());
        assert_eq!(right, &TagB::dimension());
        assert_eq!(
            err.to_string(),
            "cannot add quantities of incompatible dimensions `a` and `b`"
        );
    }

    #[test]
    fn sub_different_dimensions_is_rejected() {
        let per_b = (qa() / qb()).into_quantity();
        let err = (qa() - per_b).unwrap_err();
        assert_eq!(err.operation(), Operation::Subtract);
    }

    #[test]
    fn add_is_dimension_order_independent() {
        let ab = qa() * qb();
        let ba = qb() * qa();
        assert_eq!(*(ab + ba).unwrap().value(), 2);
    }

    #[test]
    fn add_mixed_value_types() {
        let x = Quantity::of::<TagA>(1.5_f64);
        let y = Quantity::of::<TagA>(2.5_f64);
        let sum = x.checked_add(y).unwrap();
        assert_relative_eq!(*sum.value(), 4.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Update operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn try_add_assign_and_sub_assign() {
        let mut q = qa() * 5;
        q.try_add_assign(qa() * 3).unwrap();
        assert_eq!(*q.value(), 8);
        q.try_sub_assign(qa() * 10).unwrap();
        assert_eq!(*q.value(), -2);
        assert_eq!(q.dimension(), &TagA::dimension());
    }

    #[test]
    fn failed_update_leaves_value_untouched() {
        let mut q = qa() * 5;
        let err = q.try_add_assign(qb()).unwrap_err();
        assert_eq!(err.operation(), Operation::AddAssign);
        let err = q.try_sub_assign(qb()).unwrap_err();
        assert_eq!(err.operation(), Operation::SubtractAssign);
        assert_eq!(q.to_string(), "5a");
    }

    #[test]
    fn scalar_assign_operators() {
        let mut q = Quantity::of::<TagB>(20.0);
        q *= 2.0;
        q /= 8.0;
        assert_eq!(q.to_string(), "5b");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Multiply
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn multiply_by_scalar() {
        assert_eq!((qa() * 14).to_string(), "14a");
    }

    #[test]
    fn multiply_by_quantity() {
        let product = (qb() * 5) * (qa() * 3);
        assert_eq!(*product.value(), 15);
        assert_eq!(product.dimension().exponent(TagA::tag()), 1);
        assert_eq!(product.dimension().exponent(TagB::tag()), 1);
        assert_eq!(format!("{:#}", product.dimension().canonical()), "a b");
    }

    #[test]
    fn multiply_by_inverse_quantity_is_dimensionless() {
        let product = (qb() * 6) * (2 / qb());
        assert!(product.is_dimensionless());
        assert_eq!(product.to_string(), "12");
    }

    #[test]
    fn reverse_multiply() {
        assert_eq!((15 * qa()).to_string(), "15a");
        assert_eq!((2.5 * Quantity::of::<TagA>(2.0_f64)).to_string(), "5a");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Divide
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn divide_by_scalar() {
        assert_eq!((qa() / 1).to_string(), "1a");
        assert_eq!((qa() * 9 / 3).to_string(), "3a");
    }

    #[test]
    fn divide_by_other_quantity() {
        let quotient = qa() / qb();
        assert!(!quotient.is_scalar());
        let dimension = quotient.dimension();
        assert_eq!(dimension.exponent(TagA::tag()), 1);
        assert_eq!(dimension.exponent(TagB::tag()), -1);
        assert_eq!(dimension.len(), 2);
        assert_eq!(*quotient.value(), 1);
    }

    #[test]
    fn divide_by_same_dimension_gives_scalar() {
        let quotient = (qb() * 6) / (qb() * 3);
        assert!(quotient.is_scalar());
        assert_eq!(quotient.to_string(), "2");
        assert_eq!(quotient.scalar(), Some(2));
    }

    #[test]
    fn divide_by_reordered_same_dimension_gives_scalar() {
        let quotient = (qa() * qb() * 8) / (qb() * qa() * 2);
        assert_eq!(quotient.scalar(), Some(4));
    }

    #[test]
    fn reverse_divide() {
        let inverse = 3 / qb();
        assert_eq!(*inverse.value(), 3);
        assert_eq!(inverse.to_string(), "3b-1");
        assert_eq!(inverse.dimension(), &TagB::dimension().inverse());
    }

    #[test]
    fn quotient_into_quantity() {
        let q: Quantity<i32> = ((qa() * 4) / (qa() * 2)).into();
        assert!(q.is_dimensionless());
        assert_eq!(*q.value(), 2);
        assert!((qa() / qb()).scalar().is_none());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparisons
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn comparisons_with_same_dimension() {
        let small = qa() * 2;
        let large = qa() * 5;
        assert!(small.checked_lt(&large).unwrap());
        assert!(small.checked_le(&small).unwrap());
        assert!(large.checked_gt(&small).unwrap());
        assert!(large.checked_ge(&large).unwrap());
        assert!(small.checked_eq(&(qa() * 2)).unwrap());
        assert!(small.checked_ne(&large).unwrap());
        assert_eq!(
            small.checked_partial_cmp(&large).unwrap(),
            Some(core::cmp::Ordering::Less)
        );
    }

    #[test]
    fn comparisons_across_dimensions_are_errors() {
        let a = qa();
        let b = qb();
        assert!(a.checked_eq(&b).is_err());
        assert!(a.checked_ne(&b).is_err());
        assert!(a.checked_lt(&b).is_err());
        assert!(a.checked_le(&b).is_err());
        assert!(a.checked_gt(&b).is_err());
        let err = a.checked_ge(&b).unwrap_err();
        assert_eq!(err.operation(), Operation::Compare);
        assert!(a.checked_partial_cmp(&b).is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction from other quantities
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn try_from_quantity_checks_dimension() {
        let widened = Quantity::<i64>::try_from_quantity(&TagA::dimension(), qa() * 3).unwrap();
        assert_eq!(*widened.value(), 3_i64);
        let err = Quantity::<i64>::try_from_quantity(&TagB::dimension(), qa()).unwrap_err();
        assert_eq!(err.operation(), Operation::Convert);
    }

    #[test]
    fn try_assign_checks_dimension() {
        let mut target = Quantity::<f64>::one_of::<TagA>();
        target.try_assign(qa() * 4).unwrap();
        assert_eq!(*target.value(), 4.0);
        let err = target.try_assign(qb()).unwrap_err();
        assert_eq!(err.operation(), Operation::Assign);
        assert_eq!(*target.value(), 4.0);
    }

    #[test]
    fn expect_dimension() {
        assert!(qa().expect_dimension(&TagA::dimension()).is_ok());
        assert!(qa().expect_dimension(&DimensionSet::empty()).is_err());
    }

    #[test]
    fn cast_keeps_dimension() {
        let q: Quantity<f64> = (qb() * 7).cast();
        assert_eq!(q.to_string(), "7b");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_alternate_and_precision() {
        let q = Quantity::of::<TagA>(2.0_f64) / Quantity::of::<TagB>(3.0_f64);
        let q = q.into_quantity();
        assert_eq!(format!("{:.2}", Quantity::of::<TagA>(1.0_f64 / 3.0)), "0.33a");
        let spaced = format!("{:#}", q);
        assert!(spaced.starts_with("0.6666"));
        assert!(spaced.contains(" ") && spaced.contains("b^-1"));
        assert_eq!(format!("{:#}", Quantity::dimensionless(3)), "3");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_quantity() {
        let json = serde_json::to_value(&(qa() * 3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"value": 3, "dimension": [{"symbol": "a", "exponent": 1}]})
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_scale_then_unscale(v in -1e6..1e6f64, k in prop_oneof![-1e3..-1e-3f64, 1e-3..1e3f64]) {
            let q = Quantity::of::<TagA>(v);
            let back = (q.clone() * k) / k;
            prop_assert_eq!(back.dimension(), q.dimension());
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
            prop_assert_eq!(back.dimension().to_string(), q.dimension().to_string());
        }

        #[test]
        fn prop_integer_scale_renders_identically(v in -1000i64..1000, k in 1i64..100) {
            let q = Quantity::of::<TagB>(v);
            prop_assert_eq!(((q.clone() * k) / k).to_string(), q.to_string());
        }

        #[test]
        fn prop_self_division_is_scalar(v in prop_oneof![-1e6..-1e-6f64, 1e-6..1e6f64]) {
            let q = Quantity::of::<TagA>(v) * Quantity::of::<TagB>(1.0);
            let quotient = q.clone() / q;
            prop_assert!(quotient.is_scalar());
            prop_assert!((quotient.value() - 1.0).abs() < 1e-12);
        }

        #[test]
        fn prop_add_commutative_and_associative(a in -1000i64..1000, b in -1000i64..1000, c in -1000i64..1000) {
            let qa = Quantity::of::<TagA>(a);
            let qb = Quantity::of::<TagA>(b);
            let qc = Quantity::of::<TagA>(c);
            let ab = (qa.clone() + qb.clone()).unwrap();
            let ba = (qb.clone() + qa.clone()).unwrap();
            prop_assert!(ab.checked_eq(&ba).unwrap());
            let left = ((qa.clone() + qb.clone()).unwrap() + qc.clone()).unwrap();
            let right = (qa + (qb + qc).unwrap()).unwrap();
            prop_assert!(left.checked_eq(&right).unwrap());
        }

        #[test]
        fn prop_multiply_then_divide_recovers_other(a in 1i64..1000, b in 1i64..1000) {
            let x = Quantity::of::<TagA>(a) * Quantity::of::<TagA>(1);
            let y = Quantity::of::<TagB>(b);
            let product = x.clone() * y.clone();
            let recovered = (product / y).into_quantity();
            prop_assert_eq!(recovered.dimension(), x.dimension());
            prop_assert_eq!(*recovered.value(), a);
        }
    }
}
