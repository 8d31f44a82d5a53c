//! Integration tests for the environment check system

use workshop_doctor::health::checks::http_server::GREETING_PREFIX;
use workshop_doctor::health::{self, CheckStatus, CheckSuite, EnvCheck, checks::*};

#[test]
fn test_all_environment_checks() {
    // Run the full default suite
    let report = health::run_all_checks();

    // Print report for debugging if tests fail
    if !report.is_healthy() {
        eprintln!("\n{}", health::format_report(&report));
    }

    // Assert that all checks passed (no failures)
    assert!(
        report.is_healthy(),
        "Environment checks failed: {} failures, {} warnings",
        report.failed,
        report.warned
    );
}

#[test]
fn test_toolchain_check() {
    let check = ToolchainCheck::new();
    let result = check.check();

    assert_eq!(
        result.status,
        CheckStatus::Pass,
        "Toolchain check failed: {}",
        result.message
    );

    // Version, platform, and CPU information must all be reported
    let details = result.details.expect("toolchain check should carry details");
    assert!(details.contains("rustc: "));
    assert!(details.contains(&format!(
        "OS/Architecture: {}/{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    )));
    assert!(details.contains("CPU cores: "));
    assert!(details.contains("作業ディレクトリ: "));
}

#[test]
fn test_filesystem_check_round_trip() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let check = FilesystemCheck::with_dir(dir.path());

    let result = check.check();
    assert_eq!(
        result.status,
        CheckStatus::Pass,
        "Filesystem check failed: {}",
        result.message
    );

    // The scratch file must be gone after the probe
    assert!(!dir.path().join("test-write.tmp").exists());
}

#[test]
fn test_http_check_with_ephemeral_port() {
    let check = HttpServerCheck::with_port(0);
    let result = check.check();

    assert_eq!(
        result.status,
        CheckStatus::Pass,
        "HTTP check failed: {} ({})",
        result.message,
        result.details.unwrap_or_default()
    );
}

#[test]
fn test_http_greeting_body() {
    let runtime = tokio::runtime::Runtime::new().expect("failed to create runtime");

    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().expect("no local addr");

        tokio::spawn(async move {
            axum::serve(listener, workshop_doctor::health::checks::http_server::router())
                .await
                .expect("server error");
        });

        let body = reqwest::get(format!("http://{}/test", addr))
            .await
            .expect("probe request failed")
            .text()
            .await
            .expect("failed to read body");

        // Fixed greeting prefix followed by a well-formed timestamp
        assert!(
            body.starts_with(GREETING_PREFIX),
            "unexpected body: {}",
            body
        );
        let timestamp = body.strip_prefix(GREETING_PREFIX).unwrap();
        chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S")
            .expect("greeting timestamp should parse");
    });
}

#[test]
fn test_git_config_present() {
    let home = tempfile::tempdir().expect("failed to create tempdir");
    std::fs::write(home.path().join(".gitconfig"), "[user]\n\tname = student\n")
        .expect("failed to write fixture gitconfig");

    let result = GitConfigCheck::with_home(home.path()).check();

    assert_eq!(result.status, CheckStatus::Pass);
    assert!(result.message.contains("存在"), "message: {}", result.message);
}

#[test]
fn test_git_config_absent() {
    let home = tempfile::tempdir().expect("failed to create tempdir");

    let result = GitConfigCheck::with_home(home.path()).check();

    assert_eq!(result.status, CheckStatus::Warn);
    assert!(result.message.contains("未設定"), "message: {}", result.message);
}

#[test]
fn test_suite_collects_all_checks() {
    let report = CheckSuite::new()
        .add_check(ToolchainCheck::new())
        .add_check(GitConfigCheck::new())
        .run();

    assert_eq!(report.total, 2, "Expected 2 checks in report");
    assert_eq!(report.passed + report.warned + report.failed, report.total);
}

#[test]
fn test_report_formatting_includes_every_check() {
    let report = CheckSuite::new()
        .add_check(ToolchainCheck::new())
        .add_check(GitConfigCheck::new())
        .run();

    let rendered = health::format_report(&report);
    assert!(rendered.contains("Toolchain"));
    assert!(rendered.contains("Git Config"));
    assert!(rendered.contains("Total checks: 2"));
}
