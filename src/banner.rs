//! Startup banner
//!
//! Printed by the entry point before any checks run.

use chrono::Local;

/// Program title shown at the top of every run
pub const TITLE: &str = "🚀 Rust Workshop 2025 - 環境確認プログラム";

/// Formats the startup notice: execution timestamp, title, and a rule
pub fn format_banner() -> String {
    let mut banner = String::new();

    banner.push_str(&format!(
        "🕐 実行時刻: {}\n",
        Local::now().format("%Y年%m月%d日 %H:%M:%S")
    ));
    banner.push_str("🏫 Rust Workshop 2025 環境確認\n\n");
    banner.push_str(TITLE);
    banner.push('\n');
    banner.push_str(&"=".repeat(51));

    banner
}

/// Prints the startup notice to stdout
pub fn print_banner() {
    println!("{}", format_banner());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_contains_title_and_timestamp() {
        let banner = format_banner();

        assert!(banner.contains(TITLE));
        assert!(banner.contains("実行時刻"));
        assert!(banner.ends_with(&"=".repeat(51)));
    }

    #[test]
    fn banner_timestamp_is_current_year() {
        let banner = format_banner();
        let year = Local::now().format("%Y年").to_string();

        assert!(banner.contains(&year));
    }
}
