//! Toolchain and platform information check

use std::env;

use sysinfo::System;

use crate::build_info;
use crate::health::check::{CheckResult, EnvCheck};

/// Toolchain path variables reported to the student
const TOOLCHAIN_VARS: [&str; 2] = ["CARGO_HOME", "RUSTUP_HOME"];

/// Placeholder reported when a toolchain path variable is unset
const VAR_UNSET: &str = "デフォルト値を使用";

/// Placeholder reported when the working directory cannot be resolved
const WORKDIR_ERROR: &str = "取得エラー";

/// Reports compiler/crate versions, platform, CPU count, toolchain
/// paths, and the working directory
///
/// Nothing here is fatal: every item that cannot be resolved degrades
/// to a placeholder string.
pub struct ToolchainCheck;

impl ToolchainCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ToolchainCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCheck for ToolchainCheck {
    fn name(&self) -> &'static str {
        "Toolchain"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Reports rustc version, platform, CPU count, and toolchain paths")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        details.push(format!(
            "  rustc: {} ({})",
            build_info::RUSTC_SEMVER,
            build_info::RUSTC_CHANNEL
        ));
        details.push(format!(
            "  {}: {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        details.push(format!(
            "  OS/Architecture: {}/{}",
            env::consts::OS,
            env::consts::ARCH
        ));
        details.push(format!(
            "  Build: {} ({})",
            build_info::version_string(),
            build_info::BUILD_TIMESTAMP
        ));

        for var in TOOLCHAIN_VARS {
            let value = env::var(var).unwrap_or_else(|_| VAR_UNSET.to_string());
            details.push(format!("  {}: {}", var, value));
        }

        let workdir = env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|_| WORKDIR_ERROR.to_string());
        details.push(format!("  作業ディレクトリ: {}", workdir));

        let mut sys = System::new_all();
        sys.refresh_all();
        let logical_cores = sys.cpus().len();
        details.push(format!("  CPU cores: {}", logical_cores));

        if logical_cores == 0 {
            return CheckResult::warn("Unable to detect CPU cores").with_details(details.join("\n"));
        }

        CheckResult::pass("Toolchain info gathered").with_details(details.join("\n"))
    }
}
