//! SI base dimensions and common derived dimensions.
//!
//! The seven base dimensions are plain marker types registered with the `BaseDimension` derive, in the usual
//! SI order (kg, m, s, A, K, mol, cd). Derived dimensions are functions composing them with the set algebra.
//!
//! ```rust
//! use dimq_core::si;
//! use dimq_core::Quantity;
//!
//! let mass = Quantity::<f64>::one(si::mass()) * 2.0;
//! let acceleration = Quantity::<f64>::one(si::acceleration()) * 9.81;
//! let weight = mass * acceleration;
//! assert_eq!(weight.dimension(), &si::force());
//! assert_eq!(format!("{:#}", si::force().canonical()), "kg m s^-2");
//! ```

use crate::dimension::DimensionSet;
use crate::tag::BaseDimension as _;
use dimq_derive::BaseDimension;

/// Mass, symbol `kg`.
#[derive(Clone, Copy, Debug, BaseDimension)]
#[dimension(symbol = "kg", order = 1)]
pub enum Kilogram {}

/// Length, symbol `m`.
#[derive(Clone, Copy, Debug, BaseDimension)]
#[dimension(symbol = "m", order = 2)]
pub enum Meter {}

/// Time, symbol `s`.
#[derive(Clone, Copy, Debug, BaseDimension)]
#[dimension(symbol = "s", order = 3)]
pub enum Second {}

/// Electric current, symbol `A`.
#[derive(Clone, Copy, Debug, BaseDimension)]
#[dimension(symbol = "A", order = 4)]
pub enum Ampere {}

/// Thermodynamic temperature, symbol `K`.
#[derive(Clone, Copy, Debug, BaseDimension)]
#[dimension(symbol = "K", order = 5)]
pub enum Kelvin {}

/// Amount of substance, symbol `mol`.
#[derive(Clone, Copy, Debug, BaseDimension)]
#[dimension(symbol = "mol", order = 6)]
pub enum Mole {}

/// Luminous intensity, symbol `cd`.
#[derive(Clone, Copy, Debug, BaseDimension)]
#[dimension(symbol = "cd", order = 7)]
pub enum Candela {}

// ─────────────────────────────────────────────────────────────────────────────
// Base dimension sets
// ─────────────────────────────────────────────────────────────────────────────

/// `kg`
pub fn mass() -> DimensionSet {
    Kilogram::dimension()
}

/// `m`
pub fn length() -> DimensionSet {
    Meter::dimension()
}

/// `s`
pub fn time() -> DimensionSet {
    Second::dimension()
}

/// `A`
pub fn current() -> DimensionSet {
    Ampere::dimension()
}

/// `K`
pub fn temperature() -> DimensionSet {
    Kelvin::dimension()
}

/// `mol`
pub fn amount() -> DimensionSet {
    Mole::dimension()
}

/// `cd`
pub fn luminous_intensity() -> DimensionSet {
    Candela::dimension()
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived dimension sets
// ─────────────────────────────────────────────────────────────────────────────

/// `m^2`
pub fn area() -> DimensionSet {
    length().multiply(2)
}

/// `m^3`
pub fn volume() -> DimensionSet {
    length().multiply(3)
}

/// `m s^-1`
pub fn velocity() -> DimensionSet {
    length().divide(&time())
}

/// `m s^-2`
pub fn acceleration() -> DimensionSet {
    velocity().divide(&time())
}

/// `s^-1` (hertz)
pub fn frequency() -> DimensionSet {
    time().inverse()
}

/// `kg m s^-2` (newton)
pub fn force() -> DimensionSet {
    mass().add(&acceleration())
}

/// `kg m^2 s^-2` (joule)
pub fn energy() -> DimensionSet {
    force().add(&length())
}

/// `kg m^2 s^-3` (watt)
pub fn power() -> DimensionSet {
    energy().divide(&time())
}

/// `A s` (coulomb)
pub fn charge() -> DimensionSet {
    current().add(&time())
}

/// `kg m^2 s^-3 A^-1` (volt)
pub fn voltage() -> DimensionSet {
    power().divide(&current())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tag;
    use alloc::format;

    #[test]
    fn base_symbols_and_order() {
        let tags = [
            Tag::of::<Kilogram>(),
            Tag::of::<Meter>(),
            Tag::of::<Second>(),
            Tag::of::<Ampere>(),
            Tag::of::<Kelvin>(),
            Tag::of::<Mole>(),
            Tag::of::<Candela>(),
        ];
        let symbols: alloc::vec::Vec<_> = tags.iter().map(|t| t.symbol()).collect();
        assert_eq!(symbols, ["kg", "m", "s", "A", "K", "mol", "cd"]);
        assert!(tags.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn derived_exponents() {
        let m = Tag::of::<Meter>();
        let s = Tag::of::<Second>();
        let kg = Tag::of::<Kilogram>();
        assert_eq!(area().exponent(m), 2);
        assert_eq!(volume().exponent(m), 3);
        assert_eq!(acceleration().exponent(s), -2);
        assert_eq!(energy().exponent(kg), 1);
        assert_eq!(energy().exponent(m), 2);
        assert_eq!(power().exponent(s), -3);
    }

    #[test]
    fn canonical_rendering() {
        assert_eq!(format!("{:#}", force().canonical()), "kg m s^-2");
        assert_eq!(format!("{}", energy().canonical()), "kgm2s-2");
        assert_eq!(format!("{:#}", voltage().canonical()), "kg m^2 s^-3 A^-1");
        assert_eq!(format!("{:#}", charge().canonical()), "s A");
    }

    #[test]
    fn derived_relations() {
        assert_eq!(power().add(&time()), energy());
        assert_eq!(voltage().add(&charge()), energy());
        assert_eq!(velocity().add(&frequency()), acceleration());
        assert!(area().divide(&length()).equal(&length()));
    }
}
