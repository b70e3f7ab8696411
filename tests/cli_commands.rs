//! Integration tests for CLI commands.
//!
//! These run the `doc-coverage` binary against the fixture suite.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pdw")
}

/// Runs the binary with the fixture directory as working directory, so the
/// built-in default file names resolve.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_doc-coverage"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run doc-coverage")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

mod check_command {
    use super::*;

    #[test]
    fn test_check_prints_success_message() {
        let output = run_in(&fixture_dir(), &["check"]);
        assert!(output.status.success(), "{}", stderr(&output));
        assert_eq!(
            stdout(&output).trim(),
            "All documentation structure validation tests passed!"
        );
    }

    #[test]
    fn test_check_stops_at_first_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for entry in fs::read_dir(fixture_dir()).unwrap() {
            let entry = entry.unwrap();
            fs::copy(entry.path(), temp_dir.path().join(entry.file_name())).unwrap();
        }
        fs::remove_file(temp_dir.path().join("PDW_Deployment_Guide.md")).unwrap();

        let output = run_in(temp_dir.path(), &["check"]);
        assert!(!output.status.success());
        assert!(stderr(&output)
            .contains("Required documentation file 'PDW_Deployment_Guide.md' not found"));
        assert!(!stdout(&output).contains("passed!"));
    }

    #[test]
    fn test_check_all_json() {
        let output = run_in(&fixture_dir(), &["check", "--all", "--format", "json"]);
        assert!(output.status.success(), "{}", stderr(&output));

        let report: serde_json::Value =
            serde_json::from_str(&stdout(&output)).expect("Output is not JSON");
        let outcomes = report["outcomes"].as_array().unwrap();
        assert_eq!(outcomes.len(), 5);
        assert_eq!(outcomes[0]["check"], "structure-completeness");
        assert!(outcomes.iter().all(|o| o["passed"] == true));
    }

    #[test]
    fn test_check_all_reports_failures_with_exit_code() {
        let temp_dir = TempDir::new().unwrap();
        let output = run_in(temp_dir.path(), &["check", "--all"]);
        assert!(!output.status.success());

        let out = stdout(&output);
        assert!(out.contains("FAIL  structure-completeness"));
        assert!(out.contains("5 of 5 checks failed"));
    }

    #[test]
    fn test_docs_dir_and_source_flags() {
        let fixtures = fixture_dir();
        let temp_dir = TempDir::new().unwrap();
        let output = run_in(
            temp_dir.path(),
            &[
                "--source",
                fixtures.join("PersonalDataWareHouse.py").to_str().unwrap(),
                "--docs-dir",
                fixtures.to_str().unwrap(),
                "check",
            ],
        );
        assert!(output.status.success(), "{}", stderr(&output));
    }

    #[test]
    fn test_config_file() {
        let fixtures = fixture_dir();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("doc-coverage.toml");
        fs::write(
            &config_path,
            format!(
                "source = {:?}\ndocs_dir = {:?}\n\n[documents.technical_specification]\nrequired_sections = [\"Glossary\"]\n",
                fixtures.join("PersonalDataWareHouse.py").to_str().unwrap(),
                fixtures.to_str().unwrap(),
            ),
        )
        .unwrap();

        let output = run_in(
            temp_dir.path(),
            &["--config", config_path.to_str().unwrap(), "check"],
        );
        assert!(!output.status.success());
        assert!(stderr(&output)
            .contains("Technical specification missing required section: Glossary"));
    }
}

mod inspection_commands {
    use super::*;

    #[test]
    fn test_facts_json() {
        let output = run_in(&fixture_dir(), &["facts", "--format", "json"]);
        assert!(output.status.success(), "{}", stderr(&output));

        let facts: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(facts["language"], "python");
        let functions: Vec<&str> = facts["functions"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(functions.contains(&"new_data_loader"));
        assert_eq!(facts["classes"][0], "ReportContext");
    }

    #[test]
    fn test_facts_text() {
        let output = run_in(&fixture_dir(), &["facts"]);
        let out = stdout(&output);
        assert!(out.contains("Functions (8):"));
        assert!(out.contains("Classes (1):"));
        assert!(out.contains("  pandas"));
    }

    #[test]
    fn test_scan_functions_and_components() {
        let output = run_in(&fixture_dir(), &["scan", "PDW_Technical_Specification.md"]);
        assert!(output.status.success());
        let lines: Vec<String> = stdout(&output).lines().map(String::from).collect();
        assert!(lines.contains(&"xlsx_report_generator".to_string()));
        assert!(lines.contains(&"Core".to_string()));

        let output = run_in(
            &fixture_dir(),
            &["scan", "PDW_Technical_Specification.md", "--components"],
        );
        let lines: Vec<String> = stdout(&output).lines().map(String::from).collect();
        assert!(lines.contains(&"Core Functions".to_string()));
    }

    #[test]
    fn test_scan_missing_file() {
        let output = run_in(&fixture_dir(), &["scan", "NOPE.md"]);
        assert!(!output.status.success());
        assert!(stderr(&output).contains("NOPE.md"));
    }

    #[test]
    fn test_candidate() {
        let output = run_in(&fixture_dir(), &["candidate", "new_data_loader"]);
        assert!(output.status.success());
        assert!(stdout(&output).starts_with("passed"));

        let output = run_in(&fixture_dir(), &["candidate", "1abc"]);
        assert!(output.status.success());
        assert!(stdout(&output).starts_with("skipped"));
    }

    #[test]
    fn test_coverage_complete() {
        let output = run_in(&fixture_dir(), &["coverage"]);
        assert!(output.status.success(), "{}", stderr(&output));
        assert!(stdout(&output).contains("All 8 source functions are documented"));
    }
}
