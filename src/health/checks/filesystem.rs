//! Filesystem write/read/delete check

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::health::check::{CheckResult, EnvCheck};

/// Fixed name of the scratch file created in the base directory
const SCRATCH_FILE: &str = "test-write.tmp";

/// Fixed content written and read back
const SCRATCH_CONTENT: &str = "Rust Workshop 2025 環境テスト";

/// Checks that the working directory supports write, read-back, and
/// delete of a small scratch file
///
/// A write failure aborts the probe; nothing is read or deleted in
/// that case. The scratch file is removed unconditionally on every
/// path that wrote it. Single attempt per operation.
pub struct FilesystemCheck {
    base_dir: PathBuf,
}

impl FilesystemCheck {
    /// Creates a check that probes the current working directory
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
        }
    }

    /// Creates a check that probes the given directory
    pub fn with_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl Default for FilesystemCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCheck for FilesystemCheck {
    fn name(&self) -> &'static str {
        "Filesystem"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates file write, read-back, and delete in the working directory")
    }

    fn check(&self) -> CheckResult {
        let path = self.base_dir.join(SCRATCH_FILE);
        let mut details = Vec::new();

        if let Err(e) = fs::write(&path, SCRATCH_CONTENT) {
            details.push(format!("  ✗ ファイル書き込みエラー: {}", e));
            return CheckResult::fail("ファイル書き込みエラー").with_details(details.join("\n"));
        }
        details.push("  ✓ ファイル書き込み: 成功".to_string());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&path, fs::Permissions::from_mode(0o644)) {
                warn!(error = %e, "failed to set scratch file permissions");
            }
        }

        let result = match fs::read(&path) {
            Ok(content) if content == SCRATCH_CONTENT.as_bytes() => {
                details.push("  ✓ ファイル読み取り: 成功".to_string());
                CheckResult::pass("ファイル書き込み・読み取り: 成功")
            }
            Ok(_) => {
                details.push("  ✗ ファイル内容不一致".to_string());
                CheckResult::fail("ファイル内容不一致")
            }
            Err(e) => {
                details.push(format!("  ✗ ファイル読み取りエラー: {}", e));
                CheckResult::fail("ファイル読み取りエラー")
            }
        };

        // Unconditional cleanup; a delete error does not change the result.
        match fs::remove_file(&path) {
            Ok(()) => details.push("  ✓ ファイル削除: 成功".to_string()),
            Err(e) => warn!(error = %e, "failed to remove scratch file"),
        }

        result.with_details(details.join("\n"))
    }
}
