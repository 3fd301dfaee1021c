//! Check bookkeeping: counts, failure records and the final summary.

use std::fmt::{self, Debug, Display};

/// One failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Kind of check (`check_equal`, `check_true`, …).
    pub check: &'static str,
    /// `file:line` of the check.
    pub location: String,
    /// Source text of the left operand.
    pub left_expr: &'static str,
    /// Rendered left operand.
    pub left: String,
    /// Source text and rendered value of the right operand, for two-operand checks.
    pub right: Option<(&'static str, String)>,
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} check failed", self.location)?;
        write!(f, "   {}( {}", self.check, self.left_expr)?;
        if let Some((expr, _)) = &self.right {
            write!(f, " , {}", expr)?;
        }
        writeln!(f, " )")?;
        write!(f, "   left  \"{}\" = {}", self.left_expr, self.left)?;
        if let Some((expr, value)) = &self.right {
            write!(f, "\n   right \"{}\" = {}", expr, value)?;
        }
        Ok(())
    }
}

/// Outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Checks recorded.
    pub total: usize,
    /// Checks that failed.
    pub failed: usize,
}

impl Summary {
    /// `true` when no check failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status: `0` on success, else the failure count capped at 255.
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.failed).unwrap_or(u8::MAX)
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            write!(f, "check success: {} check(s) passed", self.total)
        } else {
            write!(
                f,
                "CHECK FAILURE: {} of {} check(s) failed",
                self.failed, self.total
            )
        }
    }
}

/// Collects check results.
///
/// Use the [`check_equal!`](crate::check_equal), [`check_not_equal!`](crate::check_not_equal),
/// [`check_true!`](crate::check_true) and [`check_false!`](crate::check_false) macros, which capture the operand
/// source text and location.
#[derive(Debug, Default)]
pub struct Checker {
    total: usize,
    failures: Vec<Failure>,
    verbose: bool,
}

impl Checker {
    /// An empty, quiet checker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also log passing checks, at `info` so the default filter shows them.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Records a two-operand check.
    #[allow(clippy::too_many_arguments)]
    pub fn record_pair<A: Debug, B: Debug>(
        &mut self,
        ok: bool,
        check: &'static str,
        location: String,
        left_expr: &'static str,
        right_expr: &'static str,
        left: &A,
        right: &B,
    ) -> bool {
        self.record(ok, check, location, left_expr, left, Some((right_expr, right as &dyn Debug)))
    }

    /// Records a single-operand check.
    pub fn record_single<A: Debug>(
        &mut self,
        ok: bool,
        check: &'static str,
        location: String,
        expr: &'static str,
        value: &A,
    ) -> bool {
        self.record(ok, check, location, expr, value, None)
    }

    fn record(
        &mut self,
        ok: bool,
        check: &'static str,
        location: String,
        left_expr: &'static str,
        left: &dyn Debug,
        right: Option<(&'static str, &dyn Debug)>,
    ) -> bool {
        self.total += 1;
        if ok {
            if self.verbose {
                tracing::info!(%location, check, left_expr, "check passed");
            }
            return true;
        }
        let failure = Failure {
            check,
            location,
            left_expr,
            left: format!("{:?}", left),
            right: right.map(|(expr, value)| (expr, format!("{:?}", value))),
        };
        tracing::warn!(location = %failure.location, check, "check failed");
        self.failures.push(failure);
        false
    }

    /// Number of checks recorded so far.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Failed checks, in the order they ran.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Counts so far.
    pub fn summary(&self) -> Summary {
        Summary {
            total: self.total,
            failed: self.failures.len(),
        }
    }
}

/// `left == right`.
#[macro_export]
macro_rules! check_equal {
    ($checker:expr, $left:expr, $right:expr $(,)?) => {{
        let left = &$left;
        let right = &$right;
        $checker.record_pair(
            *left == *right,
            "check_equal",
            format!("{}:{}", file!(), line!()),
            stringify!($left),
            stringify!($right),
            left,
            right,
        )
    }};
}

/// `left != right`.
#[macro_export]
macro_rules! check_not_equal {
    ($checker:expr, $left:expr, $right:expr $(,)?) => {{
        let left = &$left;
        let right = &$right;
        $checker.record_pair(
            *left != *right,
            "check_not_equal",
            format!("{}:{}", file!(), line!()),
            stringify!($left),
            stringify!($right),
            left,
            right,
        )
    }};
}

/// `value` is `true`.
#[macro_export]
macro_rules! check_true {
    ($checker:expr, $value:expr $(,)?) => {{
        let value: bool = $value;
        $checker.record_single(
            value,
            "check_true",
            format!("{}:{}", file!(), line!()),
            stringify!($value),
            &value,
        )
    }};
}

/// `value` is `false`.
#[macro_export]
macro_rules! check_false {
    ($checker:expr, $value:expr $(,)?) => {{
        let value: bool = $value;
        $checker.record_single(
            !value,
            "check_false",
            format!("{}:{}", file!(), line!()),
            stringify!($value),
            &value,
        )
    }};
}
