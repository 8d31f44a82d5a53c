use tracing::info;
use workshop_doctor::{banner, health, logging, onboarding};

fn main() {
    logging::init();

    // The banner is an explicit first step, before any check runs.
    banner::print_banner();

    info!("running environment checks");
    let report = health::run_all_checks();
    health::print_report(&report);

    onboarding::print_next_steps();
    onboarding::print_learning_tips();

    println!();
    if report.is_healthy() {
        println!("✅ 環境確認完了!");
        println!("🎯 Phase 1のRust言語基礎学習を開始できます");
    } else {
        println!("⚠️  環境確認完了（一部の項目は失敗しました）");
        println!("🎯 上記の結果を確認してから Phase 1 を開始してください");
    }

    // Diagnostics never fail the process; the report is advisory.
}
