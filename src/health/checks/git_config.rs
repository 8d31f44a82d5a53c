//! Git configuration presence check

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::health::check::{CheckResult, EnvCheck};

/// Checks whether the student's global git configuration exists
///
/// The home directory comes from `HOME`, falling back to `USERPROFILE`
/// for Windows environments. Any stat error counts as absent.
pub struct GitConfigCheck {
    home: Option<PathBuf>,
}

impl GitConfigCheck {
    /// Creates a check resolving the home directory from the environment
    pub fn new() -> Self {
        Self { home: None }
    }

    /// Creates a check treating the given directory as home
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    fn resolve_home(&self) -> Option<PathBuf> {
        if let Some(home) = &self.home {
            return Some(home.clone());
        }
        env::var("HOME")
            .ok()
            .filter(|home| !home.is_empty())
            .or_else(|| env::var("USERPROFILE").ok().filter(|home| !home.is_empty()))
            .map(PathBuf::from)
    }
}

impl Default for GitConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCheck for GitConfigCheck {
    fn name(&self) -> &'static str {
        "Git Config"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Checks whether the global git configuration file exists")
    }

    fn check(&self) -> CheckResult {
        let Some(home) = self.resolve_home() else {
            return CheckResult::warn("Git設定ファイル: 未設定").with_details(
                "  ⚠ ホームディレクトリを解決できません\n  → git config --global で設定してください",
            );
        };

        let path = home.join(".gitconfig");
        if fs::metadata(&path).is_ok() {
            CheckResult::pass("Git設定ファイル: 存在").with_details(format!("  ✓ {}", path.display()))
        } else {
            CheckResult::warn("Git設定ファイル: 未設定").with_details(format!(
                "  ⚠ {} が見つかりません\n  → git config --global で設定してください",
                path.display()
            ))
        }
    }
}
