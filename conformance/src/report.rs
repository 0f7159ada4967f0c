//! Report types: one [`TestResult`] per check, aggregated into a
//! [`ConformanceReport`].

use std::fmt;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// Worth a look, but does not block conformance.
    Warning,
    /// Blocks conformance.
    Failure,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        })
    }
}

/// The result of one check.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Validator that ran the check, e.g. `"vocab/catalog"`.
    pub validator: String,
    /// One-line outcome.
    pub message: String,
    /// Outcome.
    pub severity: Severity,
    /// Offending items, one per line.
    pub details: Vec<String>,
}

impl TestResult {
    fn new(
        severity: Severity,
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details,
        }
    }

    /// A passing result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Pass, validator, message, Vec::new())
    }

    /// A failure.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Failure, validator, message, Vec::new())
    }

    /// A failure listing the offending items.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::new(Severity::Failure, validator, message, details)
    }

    /// A warning.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, validator, message, Vec::new())
    }

    /// A warning listing the items it concerns.
    pub fn warn_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::new(Severity::Warning, validator, message, details)
    }

    /// Passes if `offenders` is empty, otherwise fails listing them.
    pub fn check(
        validator: impl Into<String>,
        passed: impl Into<String>,
        failed: impl Into<String>,
        offenders: Vec<String>,
    ) -> Self {
        if offenders.is_empty() {
            Self::pass(validator, passed)
        } else {
            Self::fail_with_details(validator, failed, offenders)
        }
    }

    /// True for a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }

    /// True for a warning.
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.validator, self.message)?;
        for detail in &self.details {
            write!(f, "\n       - {detail}")?;
        }
        Ok(())
    }
}

/// Every result of a run.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// Results in the order the checks ran.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one result.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Adds every result of `other`.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Number of failures.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_warning()).count()
    }

    /// The failures, in order.
    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    /// True if nothing failed. Warnings do not count.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}
