//! Suite runner for orchestrating environment checks

use std::time::Instant;

use super::check::{CheckResult, CheckStatus, EnvCheck};

/// Results from running a check suite
///
/// The report is informational only: the diagnostic always exits 0, so
/// health is reported, never enforced.
#[derive(Debug)]
pub struct SuiteReport {
    /// Individual check results with their check names
    pub results: Vec<(String, CheckResult)>,
    /// Total number of checks run
    pub total: usize,
    /// Number of passing checks
    pub passed: usize,
    /// Number of checks with warnings
    pub warned: usize,
    /// Number of failing checks
    pub failed: usize,
}

impl SuiteReport {
    /// Returns true if all checks passed (no failures)
    pub fn is_healthy(&self) -> bool {
        self.failed == 0
    }

    /// Returns true if there are any warnings
    pub fn has_warnings(&self) -> bool {
        self.warned > 0
    }
}

/// Collects environment checks and runs them sequentially
pub struct CheckSuite {
    checks: Vec<Box<dyn EnvCheck>>,
}

impl CheckSuite {
    /// Creates a new suite with no checks
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Adds a check to the suite
    pub fn add_check<C: EnvCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Runs all registered checks and returns a report
    pub fn run(self) -> SuiteReport {
        let mut results = Vec::new();
        let mut passed = 0;
        let mut warned = 0;
        let mut failed = 0;

        for check in self.checks {
            let name = check.name().to_string();
            let start = Instant::now();
            let result = check.check().with_duration(start.elapsed());

            match result.status {
                CheckStatus::Pass => passed += 1,
                CheckStatus::Warn => warned += 1,
                CheckStatus::Fail => failed += 1,
            }

            results.push((name, result));
        }

        let total = results.len();

        SuiteReport {
            results,
            total,
            passed,
            warned,
            failed,
        }
    }
}

impl Default for CheckSuite {
    fn default() -> Self {
        Self::new()
    }
}
