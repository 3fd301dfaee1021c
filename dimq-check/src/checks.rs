//! Built-in check suites.
//!
//! Renderings that hold more than one tag are compared as sorted term lists, since the raw entry order of a
//! dimension-set is not part of its meaning.

use dimq::{BaseDimension, DimensionSet, Operation, Quantity, Quotient};

use crate::report::Checker;
use crate::{check_equal, check_false, check_true};

#[derive(BaseDimension)]
#[dimension(symbol = "a", order = 1, crate = "dimq")]
enum TagA {}

#[derive(BaseDimension)]
#[dimension(symbol = "b", order = 2, crate = "dimq")]
enum TagB {}

#[derive(BaseDimension)]
#[dimension(symbol = "c", order = 3, crate = "dimq")]
enum TagC {}

/// A named group of checks.
#[derive(Debug)]
pub struct Suite {
    /// Name used in `[run] suites`.
    pub name: &'static str,
    /// Runs every check of the suite.
    pub run: fn(&mut Checker),
}

/// Every suite, in run order.
pub static SUITES: &[Suite] = &[
    Suite {
        name: "dimension",
        run: dimension_suite,
    },
    Suite {
        name: "quantity",
        run: quantity_suite,
    },
];

/// The suite called `name`, if any.
pub fn find_suite(name: &str) -> Option<&'static Suite> {
    SUITES.iter().find(|suite| suite.name == name)
}

/// Names of all suites, in run order.
pub fn suite_names() -> Vec<&'static str> {
    SUITES.iter().map(|suite| suite.name).collect()
}

/// Runs `suites` in order against one checker.
pub fn run_suites(suites: &[&Suite], checker: &mut Checker) {
    for suite in suites {
        let before = checker.summary();
        (suite.run)(checker);
        let after = checker.summary();
        tracing::info!(
            suite = suite.name,
            checks = after.total - before.total,
            failed = after.failed - before.failed,
            "suite finished"
        );
    }
}

fn a() -> DimensionSet {
    TagA::dimension()
}

fn b() -> DimensionSet {
    TagB::dimension()
}

fn c() -> DimensionSet {
    TagC::dimension()
}

/// Spaced rendering split into sorted terms.
fn terms(set: &DimensionSet) -> Vec<String> {
    let mut terms: Vec<String> = format!("{:#}", set)
        .split(' ')
        .map(str::to_string)
        .collect();
    terms.sort();
    terms
}

fn expected_terms(expected: &[&str]) -> Vec<String> {
    let mut terms: Vec<String> = expected.iter().map(|term| term.to_string()).collect();
    terms.sort();
    terms
}

// ─────────────────────────────────────────────────────────────────────────────
// dimension
// ─────────────────────────────────────────────────────────────────────────────

fn dimension_suite(checker: &mut Checker) {
    let a2 = a().add(&a());
    let b2 = b().add(&b());
    let ab = b().add(&a());
    let ba = a().add(&b());
    let a2b2 = b2.add(&a2);
    let a2b = b().add(&a2);
    let ab2 = b2.add(&a());

    // empty
    check_equal!(checker, DimensionSet::empty().to_string(), "");

    // single
    check_equal!(checker, a().to_string(), "a");
    check_equal!(checker, b().to_string(), "b");

    // add_entry
    let tag_a = TagA::tag();
    check_equal!(checker, DimensionSet::empty().add_entry(tag_a, 1).to_string(), "a");
    check_equal!(checker, a().add_entry(tag_a, 1).to_string(), "a2");
    check_equal!(checker, terms(&b().add_entry(tag_a, 1)), expected_terms(&["a", "b"]));
    check_equal!(checker, terms(&ab.add_entry(tag_a, 1)), expected_terms(&["a^2", "b"]));
    check_equal!(
        checker,
        terms(&a2b2.add_entry(TagC::tag(), 1)),
        expected_terms(&["a^2", "b^2", "c"])
    );
    check_equal!(checker, a().add_entry(tag_a, -1).len(), 1);

    // add
    check_equal!(checker, a2.to_string(), "a2");
    check_equal!(checker, b2.to_string(), "b2");
    check_equal!(checker, terms(&a2b2), expected_terms(&["a^2", "b^2"]));
    check_equal!(checker, terms(&a2b), expected_terms(&["a^2", "b"]));
    check_equal!(checker, terms(&ab2), expected_terms(&["a", "b^2"]));
    check_equal!(checker, terms(&a().add(&a2b2)), expected_terms(&["a^3", "b^2"]));
    check_equal!(checker, terms(&b().add(&a2b2)), expected_terms(&["a^2", "b^3"]));
    check_equal!(checker, terms(&c().add(&a2b2)), expected_terms(&["a^2", "b^2", "c"]));
    check_equal!(checker, DimensionSet::empty().add(&DimensionSet::empty()).to_string(), "");
    check_equal!(checker, terms(&a2b2.add(&DimensionSet::empty())), terms(&a2b2));
    check_equal!(checker, terms(&a2b2.add(&a2)), expected_terms(&["a^4", "b^2"]));

    // multiply
    check_equal!(checker, DimensionSet::empty().multiply(12).to_string(), "");
    check_equal!(checker, a().multiply(15).to_string(), "a15");
    check_equal!(checker, terms(&a2b2.multiply(15)), expected_terms(&["a^30", "b^30"]));
    check_true!(checker, a().multiply(0).is_empty());
    check_true!(checker, a2b2.multiply(0).is_empty());

    // add with prune
    check_true!(checker, ab.add(&ab.multiply(-1)).is_empty());
    check_equal!(checker, terms(&a().multiply(-1).add(&a2b2)), expected_terms(&["a", "b^2"]));
    check_equal!(checker, a().multiply(-2).add(&a2b2).to_string(), "b2");

    // equal
    let empty = DimensionSet::empty();
    check_true!(checker, empty.equal(&empty));
    check_false!(checker, empty.equal(&a()));
    check_false!(checker, a().equal(&empty));
    check_true!(checker, a().equal(&a()));
    check_true!(checker, ab.equal(&ab));
    check_true!(checker, ba.equal(&ab));
    check_true!(checker, a2b2.equal(&a2.add(&b2)));
    check_false!(checker, a().equal(&ab));
    check_false!(checker, b().equal(&ab));
    check_false!(checker, a2b.equal(&a2b2));
    check_false!(checker, ab2.equal(&a2b2));
    check_true!(checker, a().add_entry(tag_a, -1).equal(&empty));
}

// ─────────────────────────────────────────────────────────────────────────────
// quantity
// ─────────────────────────────────────────────────────────────────────────────

fn quantity_suite(checker: &mut Checker) {
    let qa = || Quantity::<i32>::one_of::<TagA>();
    let qb = || Quantity::<i32>::one_of::<TagB>();

    // one
    check_equal!(checker, qa().to_string(), "1a");
    check_equal!(checker, qb().to_string(), "1b");

    // divide
    check_equal!(checker, (qa() / 1).to_string(), "1a");
    let per_b = (qa() / qb()).into_quantity();
    check_equal!(checker, *per_b.value(), 1);
    check_equal!(checker, terms(per_b.dimension()), expected_terms(&["a", "b^-1"]));
    check_true!(checker, matches!((qb() * 6) / (qb() * 3), Quotient::Scalar(2)));

    // multiply
    check_equal!(checker, (qa() * 14).to_string(), "14a");
    let ab = (qb() * 5) * (qa() * 3);
    check_equal!(checker, *ab.value(), 15);
    check_equal!(checker, terms(ab.dimension()), expected_terms(&["a", "b"]));
    check_equal!(checker, ((qb() * 6) * (2 / qb())).to_string(), "12");

    // reverse forms
    check_equal!(checker, (15 * qa()).to_string(), "15a");
    let inverse = 3 / qb();
    check_equal!(checker, *inverse.value(), 3);
    check_equal!(checker, inverse.to_string(), "3b-1");

    // incompatible add
    let rejected = qa() + qb();
    check_true!(checker, rejected.is_err());
    check_equal!(
        checker,
        rejected.err().map(|err| err.operation()),
        Some(Operation::Add)
    );
    check_true!(checker, qa().checked_lt(&qb()).is_err());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_suite_passes() {
        for suite in SUITES {
            let mut checker = Checker::new();
            (suite.run)(&mut checker);
            let summary = checker.summary();
            assert!(summary.total > 0, "suite {} ran no checks", suite.name);
            assert!(
                summary.is_success(),
                "suite {} failed:\n{}",
                suite.name,
                checker
                    .failures()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            );
        }
    }

    #[test]
    fn find_suite_by_name() {
        assert!(find_suite("dimension").is_some());
        assert!(find_suite("quantity").is_some());
        assert!(find_suite("units").is_none());
        assert_eq!(suite_names(), ["dimension", "quantity"]);
    }

    #[test]
    fn run_suites_accumulates() {
        let mut checker = Checker::new();
        let all: Vec<&Suite> = SUITES.iter().collect();
        run_suites(&all, &mut checker);
        let mut separate = 0;
        for suite in SUITES {
            let mut single = Checker::new();
            (suite.run)(&mut single);
            separate += single.total();
        }
        assert_eq!(checker.total(), separate);
    }

    #[test]
    fn term_lists_ignore_entry_order() {
        assert_eq!(terms(&a().add(&b())), terms(&b().add(&a())));
        assert_eq!(terms(&DimensionSet::empty()), ["1"]);
    }
}
