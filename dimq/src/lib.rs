//! Dimension-checked quantities over any numeric type.
//!
//! `dimq` is the user-facing crate in this workspace. It re-exports the full API from `dimq-core`, the
//! `BaseDimension` derive, and the SI dimension catalogue.
//!
//! The core idea is: a value is always a `Quantity<V>` carrying a [`DimensionSet`], a multiset of base dimensions
//! with integer exponents. Products and quotients derive their dimension from the operands; sums, differences and
//! comparisons demand equal dimensions and report a [`DimensionError`] otherwise.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Tracks derived dimensions (`kg m s^-2`) through arbitrary products and quotients.
//! - Works with any value type: integers, floats, or your own numeric types.
//!
//! # What this crate does not try to solve
//!
//! - Unit conversion or scale prefixes: a metre and a kilometre share the dimension `m`.
//! - Parsing unit strings.
//! - Fractional exponents.
//!
//! # Quick start
//!
//! ```rust
//! use dimq::{si, Quantity};
//!
//! let mass = Quantity::<f64>::one(si::mass()) * 70.0;
//! let g = Quantity::<f64>::one(si::acceleration()) * 9.81;
//! let weight = mass * g;
//!
//! assert_eq!(weight.dimension(), &si::force());
//! assert_eq!(format!("{:#}", weight.dimension().canonical()), "kg m s^-2");
//! ```
//!
//! Define your own base dimensions with the derive:
//!
//! ```rust
//! use dimq::{BaseDimension, Quantity};
//!
//! #[derive(BaseDimension)]
//! #[dimension(symbol = "px", crate = "dimq")]
//! pub enum Pixel {}
//!
//! let width = Quantity::of::<Pixel>(640);
//! assert_eq!(width.to_string(), "640px");
//! ```
//!
//! # Dimension errors
//!
//! ```rust
//! use dimq::{si, Operation, Quantity};
//!
//! let d = Quantity::<f64>::one(si::length());
//! let t = Quantity::<f64>::one(si::time());
//! let err = (d + t).unwrap_err();
//! assert_eq!(err.operation(), Operation::Add);
//! assert_eq!(err.to_string(), "cannot add quantities of incompatible dimensions `m` and `s`");
//! ```
//!
//! # Unsupported value operations (type error)
//!
//! ```compile_fail
//! use dimq::{si, Quantity};
//!
//! struct Label;
//! let q = Quantity::new(Label, si::length());
//! let _ = q * 2.0; // `Label` cannot be multiplied
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimq-core`.
//! - `serde`: `Serialize` for `Quantity<V>` and `DimensionSet`.
//!
//! Disable default features for `no_std` (with `alloc`):
//!
//! ```toml
//! [dependencies]
//! dimq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimq_core::*;

pub use dimq_core::BaseDimension;

/// Derive `BaseDimension` for a marker type.
///
/// Outside `dimq-core` the derive must be told where the trait lives: `#[dimension(symbol = "..", crate = "dimq")]`.
pub use dimq_derive::BaseDimension;
