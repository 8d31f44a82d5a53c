//! Environment check system for the workshop smoke test
//!
//! Provides a small framework for probing the student environment:
//! - Toolchain and platform information
//! - Filesystem write/read/delete in the working directory
//! - One HTTP round trip against a short-lived local server
//! - Presence of the global git configuration
//!
//! # Example
//!
//! ```no_run
//! use workshop_doctor::health::{CheckSuite, checks::*};
//!
//! let report = CheckSuite::new()
//!     .add_check(ToolchainCheck::new())
//!     .add_check(FilesystemCheck::new())
//!     .run();
//!
//! if report.is_healthy() {
//!     println!("環境は利用可能です");
//! }
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, EnvCheck};
pub use reporter::{format_report, print_report};
pub use runner::{CheckSuite, SuiteReport};

/// Runs all default environment checks and returns a report
pub fn run_all_checks() -> SuiteReport {
    CheckSuite::new()
        .add_check(checks::ToolchainCheck::new())
        .add_check(checks::FilesystemCheck::new())
        .add_check(checks::HttpServerCheck::new())
        .add_check(checks::GitConfigCheck::new())
        .run()
}
