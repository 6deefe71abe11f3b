//! End-to-end CLI tests for chatlens.
//!
//! These tests run the actual binary with various arguments and check its
//! output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: text report on stdout
//! - **Output formats**: JSON and CSV, to stdout and to files
//! - **Filters**: sender and date filtering
//! - **Flags**: parser and statistics flags
//! - **Error handling**: proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with test exports.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chat = "[15/1/24, 10:30:00 AM] Alice: Hello everyone!
[15/1/24, 10:31:00 AM] Bob: Hi Alice!
[15/1/24, 10:32:00 AM] Alice: How is everyone doing?
[15/1/24, 10:33:00 AM] Charlie: Messages and calls are end-to-end encrypted.
[3/2/24, 9:00:00 PM] Bob: check https://example.com
and this second line
[4/2/24, 8:15:00 AM] Alice: <Media omitted>";
    fs::write(dir.path().join("chat.txt"), chat).unwrap();

    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(
        dir.path().join("garbage.txt"),
        "this is not\na chat export\nat all",
    )
    .unwrap();

    let unicode = "[01/02/23, 10:15:00] Иван: Привет мир! 🎉
[01/02/23, 10:16:00] 田中: こんにちは";
    fs::write(dir.path().join("unicode.txt"), unicode).unwrap();

    dir
}

fn chatlens_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatlens"));
    Command::from_std(cmd)
}

fn input_path(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_text_report_to_stdout() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Statistics for all users"))
            .stdout(predicate::str::contains("Messages:"))
            .stdout(predicate::str::contains("Most active users"))
            .stdout(predicate::str::contains("January 2024"))
            .stdout(predicate::str::contains("February 2024"));
    }

    #[test]
    fn test_unicode_export() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "unicode.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Иван"))
            .stdout(predicate::str::contains("田中"));
    }

    #[test]
    fn test_help() {
        chatlens_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--user"))
            .stdout(predicate::str::contains("--format"))
            .stdout(predicate::str::contains("EXAMPLES"));
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_json_to_stdout() {
        let fixtures = setup_fixtures();

        let output = chatlens_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "-f", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["total_messages"], 6);
        assert_eq!(value["media_count"], 1);
        assert_eq!(value["link_count"], 1);
        assert_eq!(value["unique_users"], 3);
        assert!(value["user"].is_null());
    }

    #[test]
    fn test_csv_to_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "stats.csv");

        chatlens_cmd()
            .args([
                input_path(&fixtures, "chat.txt").as_str(),
                "-f",
                "csv",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("saved"))
            .stdout(predicate::str::contains("6 messages"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Table;Label;Count"));
        assert!(content.contains("summary;messages;6"));
        assert!(content.contains("user;Alice;3"));
    }

    #[test]
    fn test_txt_alias() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "-f", "txt"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Statistics for all users"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "-f", "xml"])
            .assert()
            .failure();
    }
}

// ============================================================================
// Filter Tests
// ============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_user_filter() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "--user", "Bob"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Statistics for Bob"))
            .stdout(predicate::str::contains("Most active users").not());
    }

    #[test]
    fn test_unknown_user_fails() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "-u", "Mallory"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("Mallory"));
    }

    #[test]
    fn test_date_range() {
        let fixtures = setup_fixtures();

        let output = chatlens_cmd()
            .args([
                input_path(&fixtures, "chat.txt").as_str(),
                "--after",
                "2024-02-01",
                "--before",
                "2024-02-28",
                "-f",
                "json",
            ])
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["total_messages"], 2);
    }

    #[test]
    fn test_bad_date_fails() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([
                input_path(&fixtures, "chat.txt").as_str(),
                "--after",
                "15/01/2024",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid date"));
    }
}

// ============================================================================
// Flag Tests
// ============================================================================

mod flags {
    use super::*;

    fn json_report(args: &[&str]) -> serde_json::Value {
        let output = chatlens_cmd().args(args).output().unwrap();
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).unwrap()
    }

    #[test]
    fn test_skip_system() {
        let fixtures = setup_fixtures();
        let input = input_path(&fixtures, "chat.txt");

        let value = json_report(&[input.as_str(), "-f", "json", "--skip-system"]);
        assert_eq!(value["total_messages"], 5);
        assert_eq!(value["unique_users"], 2);
        assert_eq!(value["parse"]["system_messages"], 1);
    }

    #[test]
    fn test_no_multiline() {
        let fixtures = setup_fixtures();
        let input = input_path(&fixtures, "chat.txt");

        let value = json_report(&[input.as_str(), "-f", "json", "--no-multiline"]);
        assert_eq!(value["total_messages"], 6);
        assert_eq!(value["parse"]["skipped_lines"], 1);
        assert_eq!(value["notices"][0]["kind"], "skipped_lines");
    }

    #[test]
    fn test_top_limits() {
        let fixtures = setup_fixtures();
        let input = input_path(&fixtures, "chat.txt");

        let value = json_report(&[input.as_str(), "-f", "json", "--top", "1", "--words", "2"]);
        assert_eq!(value["top_users"].as_array().unwrap().len(), 1);
        assert_eq!(value["top_users"][0]["sender"], "Alice");
        assert_eq!(value["top_words"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_exclude_media_words() {
        let fixtures = setup_fixtures();
        let input = input_path(&fixtures, "chat.txt");

        let with_media = json_report(&[input.as_str(), "-f", "json"]);
        let without = json_report(&[input.as_str(), "-f", "json", "--exclude-media-words"]);
        assert_eq!(
            with_media["total_words"].as_u64().unwrap(),
            without["total_words"].as_u64().unwrap() + 2
        );
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "-v"])
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stderr(predicate::str::contains("chatlens v"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_empty_file() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "empty.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("No valid chat data found"));
    }

    #[test]
    fn test_garbage_file() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "garbage.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("No valid chat data found"));
    }

    #[test]
    fn test_missing_file() {
        chatlens_cmd()
            .arg("/definitely/not/here/chat.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_missing_input_argument() {
        chatlens_cmd().assert().failure();
    }
}
