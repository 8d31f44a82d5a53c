//! Workshop Doctor
//!
//! A smoke test for the Rust workshop environment: toolchain info,
//! file I/O, one local HTTP round trip, and student onboarding output.

/// Startup banner (execution timestamp and program title)
pub mod banner;

/// Build-time information (rustc version, target triple, timestamp, etc.)
pub mod build_info;

/// Environment check framework and the built-in checks
pub mod health;

/// Logging initialization
pub mod logging;

/// Student onboarding output (next steps and learning tips)
pub mod onboarding;
