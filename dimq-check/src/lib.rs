//! Self-check harness for the `dimq` dimension algebra.
//!
//! Runs named suites of checks against the algebra and the quantity operators, recording every failure with its
//! location and the rendered operands instead of stopping at the first one. The `dimq-check` binary wraps this
//! library; the exit status is the number of failed checks (capped at 255).
//!
//! ```rust
//! use dimq_check::{checks, Checker};
//!
//! let mut checker = Checker::new();
//! let suites: Vec<_> = checks::SUITES.iter().collect();
//! checks::run_suites(&suites, &mut checker);
//! assert!(checker.summary().is_success());
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod checks;
pub mod config;
pub mod report;

pub use config::{CheckConfig, ConfigError};
pub use report::{Checker, Failure, Summary};
