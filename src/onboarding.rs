//! Student onboarding output
//!
//! Fixed instructional text shown after the environment checks: the
//! next steps for personalizing the workshop project, plus a block of
//! learning tips and resources.

/// Formats the next-steps block (project personalization, git
/// identity, first learning step)
pub fn format_next_steps() -> String {
    let mut block = String::new();

    block.push_str("\n👤 学習者情報の設定\n");
    block.push_str(&format!("-{}\n", "-".repeat(30)));
    block.push_str("📝 次のステップ:\n");
    block.push_str("   1. Cargo.tomlの個人化\n");
    block.push_str("      → [package] name を rust-workshop-2025-[学籍番号] に変更\n");
    block.push_str("   2. Git設定の確認\n");
    block.push_str("      → git config --global user.name \"あなたの名前\"\n");
    block.push_str("      → git config --global user.email \"メールアドレス\"\n");
    block.push_str("   3. Phase 1の学習開始\n");
    block.push_str("      → cd phase1-rust-basics/01-hello-world\n");
    block.push_str("      → cargo run");

    block
}

/// Prints the next-steps block to stdout
pub fn print_next_steps() {
    println!("{}", format_next_steps());
}

/// Formats the learning-tips block (workshop commands, resources,
/// where to get help)
pub fn format_learning_tips() -> String {
    let mut block = String::new();

    block.push_str("\n💡 学習のヒント\n");
    block.push_str(&format!("-{}\n", "-".repeat(30)));
    block.push_str("🔧 便利なコマンド:\n");
    block.push_str("   make help       - 利用可能なコマンド一覧\n");
    block.push_str("   make verify     - 環境確認\n");
    block.push_str("   make run-phase1 - Phase 1 Hello World実行\n");
    block.push_str("   make server     - Webサーバー起動\n");
    block.push_str("   make format     - コードフォーマット\n");
    block.push_str("\n📚 学習リソース:\n");
    block.push_str("   - Rust公式ドキュメント: https://doc.rust-lang.org/\n");
    block.push_str("   - The Rust Programming Language: https://doc.rust-lang.org/book/\n");
    block.push_str("   - Rust by Example: https://doc.rust-lang.org/rust-by-example/\n");
    block.push_str("\n🆘 困ったときは:\n");
    block.push_str("   - GitHub Issueで質問・ヘルプ要請\n");
    block.push_str("   - 進捗報告Issueで学習状況共有\n");
    block.push_str("   - READMEファイルで詳細手順確認");

    block
}

/// Prints the learning-tips block to stdout
pub fn print_learning_tips() {
    println!("{}", format_learning_tips());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_steps_cover_personalization_git_and_phase1() {
        let block = format_next_steps();

        assert!(block.contains("Cargo.tomlの個人化"));
        assert!(block.contains("git config --global user.name"));
        assert!(block.contains("git config --global user.email"));
        assert!(block.contains("phase1-rust-basics/01-hello-world"));
        assert!(block.contains("cargo run"));
    }

    #[test]
    fn learning_tips_list_commands_and_resources() {
        let block = format_learning_tips();

        assert!(block.contains("make verify"));
        assert!(block.contains("https://doc.rust-lang.org/"));
        assert!(block.contains("困ったとき"));
    }
}
