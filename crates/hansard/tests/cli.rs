//! CLI integration tests for hansard commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a hansard command with logging left at its default.
fn hansard() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("hansard").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

/// Writes a small transcript corpus with one unparseable file.
fn write_corpus(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("Senate_2025_02_10_Official.xml"),
        "<hansard><p>The budget debate continued. Budget estimates were tabled.</p></hansard>",
    )
    .unwrap();
    fs::write(
        dir.join("HouseOfReps_report.xml"),
        "<report><p>Question time on the budget.</p></report>",
    )
    .unwrap();
    fs::write(dir.join("broken.xml"), "").unwrap();
    fs::write(dir.join("notes.txt"), "not a transcript").unwrap();
}

mod ingest {
    use super::*;

    #[test]
    fn writes_csv_and_reports_skipped_files() {
        let dir = temp_dir();
        let xml = dir.path().join("xml");
        let out = dir.path().join("out/records.csv");
        write_corpus(&xml);

        hansard()
            .arg("ingest")
            .arg(&xml)
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("Generated:"))
            .stderr(predicate::str::contains("broken.xml"));

        let csv = fs::read_to_string(&out).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "doc_id,date,chamber,source_file,text,text_length,processing_version"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("HouseOfReps_report,,House,"));
        assert!(lines[2].starts_with("Senate_2025_02_10_Official,2025-02-10,Senate,"));
    }

    #[test]
    fn reports_partially_extracted_files() {
        let dir = temp_dir();
        let xml = dir.path().join("xml");
        let out = dir.path().join("records.csv");
        fs::create_dir_all(&xml).unwrap();
        fs::write(
            xml.join("Senate_2025_02_10.xml"),
            "<hansard><p>one</p><!x><p>two</p></hansard>",
        )
        .unwrap();

        let output = hansard()
            .arg("ingest")
            .arg(&xml)
            .arg(&out)
            .arg("--strict")
            .output()
            .unwrap();
        assert!(output.status.success());

        let stderr = strip_ansi(&String::from_utf8_lossy(&output.stderr));
        assert!(stderr.contains("kept text before syntax error in"));
        assert!(stderr.contains("Senate_2025_02_10.xml"));
        assert!(stderr.contains("1 of 1 files only partially extracted"));

        let csv = fs::read_to_string(&out).unwrap();
        assert!(csv.lines().nth(1).unwrap().contains(",one,"));
    }

    #[test]
    fn strict_fails_on_unparseable_file() {
        let dir = temp_dir();
        let xml = dir.path().join("xml");
        let out = dir.path().join("records.csv");
        write_corpus(&xml);

        hansard()
            .arg("ingest")
            .arg(&xml)
            .arg(&out)
            .arg("--strict")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"));

        assert!(!out.exists());
    }

    #[test]
    fn strict_from_config_file() {
        let dir = temp_dir();
        let xml = dir.path().join("xml");
        let out = dir.path().join("records.csv");
        let settings = dir.path().join("settings.toml");
        write_corpus(&xml);
        fs::write(&settings, "[ingest]\nstrict = true\n").unwrap();

        hansard()
            .arg("--config")
            .arg(&settings)
            .arg("ingest")
            .arg(&xml)
            .arg(&out)
            .assert()
            .failure();
    }

    #[test]
    fn empty_directory_writes_header_only() {
        let dir = temp_dir();
        let out = dir.path().join("records.csv");

        hansard()
            .arg("ingest")
            .arg(dir.path())
            .arg(&out)
            .assert()
            .success();

        let csv = fs::read_to_string(&out).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn fails_on_missing_directory() {
        let dir = temp_dir();

        hansard()
            .arg("ingest")
            .arg(dir.path().join("absent"))
            .arg(dir.path().join("records.csv"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read directory"));
    }
}

mod summary {
    use super::*;

    #[test]
    fn prints_chambers_and_terms() {
        let dir = temp_dir();
        let csv = dir.path().join("records.csv");
        fs::write(
            &csv,
            "doc_id,date,chamber,text\n\
             a,2025-02-10,Senate,budget budget motion\n\
             b,2025-13-40,,budget question\n",
        )
        .unwrap();

        let output = hansard().arg("summary").arg(&csv).output().unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("Chamber summary"));
        assert!(stdout.contains("Senate"));
        assert!(stdout.contains("Unknown"));
        assert!(stdout.contains("budget"));
        assert!(stdout.contains("1 invalid dates cleared"));
    }

    #[test]
    fn json_output() {
        let dir = temp_dir();
        let csv = dir.path().join("records.csv");
        fs::write(
            &csv,
            "doc_id,chamber,text\na,Senate,cat sat\nb,Senate,the cat ran\nc,House,\n",
        )
        .unwrap();

        let output = hansard()
            .arg("summary")
            .arg(&csv)
            .arg("--json")
            .arg("-n")
            .arg("1")
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["records"], 3);
        assert_eq!(json["chambers"][0]["chamber"], "House");
        assert_eq!(json["chambers"][1]["docs"], 2);
        assert_eq!(json["chambers"][1]["total_words"], 5);
        assert_eq!(json["top_terms"][0]["term"], "cat");
        assert_eq!(json["top_terms"][0]["count"], 2);
        assert_eq!(json["top_terms"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn fails_on_missing_csv() {
        let dir = temp_dir();

        hansard()
            .arg("summary")
            .arg(dir.path().join("absent.csv"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read CSV"));
    }
}

mod run {
    use super::*;

    #[test]
    fn runs_full_pipeline() {
        let dir = temp_dir();
        let xml = dir.path().join("xml");
        let out = dir.path().join("records.csv");
        write_corpus(&xml);

        let output = hansard().arg("run").arg(&xml).arg(&out).output().unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("Generated:"));
        assert!(stdout.contains("2 records from 3 files"));
        assert!(stdout.contains("Preview"));
        assert!(stdout.contains("Senate_2025_02_10_Official"));
        assert!(stdout.contains("Top 15 terms"));
        assert!(stdout.contains("budget"));
        assert!(out.exists());
    }
}

mod inspect {
    use super::*;

    #[test]
    fn shows_record_fields() {
        let dir = temp_dir();
        let xml = dir.path().join("xml");
        write_corpus(&xml);

        let output = hansard()
            .arg("inspect")
            .arg(xml.join("Senate_2025_02_10_Official.xml"))
            .output()
            .unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("date:       2025-02-10"));
        assert!(stdout.contains("chamber:    Senate"));
        assert!(stdout.contains("budget"));
    }

    #[test]
    fn warns_on_partial_extraction() {
        let dir = temp_dir();
        let file = dir.path().join("House_report.xml");
        fs::write(&file, "<a><p>kept words</p><!x><p>lost</p></a>").unwrap();

        let output = hansard().arg("inspect").arg(&file).output().unwrap();
        assert!(output.status.success());

        let stderr = strip_ansi(&String::from_utf8_lossy(&output.stderr));
        assert!(stderr.contains("kept text before syntax error"));
        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("kept words"));
        assert!(!stdout.contains("lost"));
    }

    #[test]
    fn fails_on_unparseable_file() {
        let dir = temp_dir();
        let xml = dir.path().join("xml");
        write_corpus(&xml);

        hansard()
            .arg("inspect")
            .arg(xml.join("broken.xml"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("no root element"));
    }
}

mod config {
    use super::*;

    #[test]
    fn prints_defaults() {
        let output = hansard().arg("config").output().unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("max_chars = 200000"));
        assert!(stdout.contains("top_terms = 20"));
        assert!(stdout.contains("Senate"));
    }

    #[test]
    fn applies_config_file() {
        let dir = temp_dir();
        let settings = dir.path().join("settings.toml");
        fs::write(&settings, "[analysis]\ntop_terms = 7\n").unwrap();

        let output = hansard()
            .arg("config")
            .arg("--config")
            .arg(&settings)
            .output()
            .unwrap();
        assert!(output.status.success());

        let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
        assert!(stdout.contains("top_terms = 7"));
    }

    #[test]
    fn fails_on_invalid_date_pattern() {
        let dir = temp_dir();
        let settings = dir.path().join("settings.toml");
        fs::write(&settings, "[metadata]\ndate_pattern = \"(\\\\d{4})\"\n").unwrap();

        hansard()
            .arg("--config")
            .arg(&settings)
            .arg("config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}
