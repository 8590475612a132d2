//! Runs the `fittrack` binary end to end in an empty working directory.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use fit_schema::RecordSchemas;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fittrack(args: &[&str], stdin: &str) -> Output {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut child = Command::new(env!("CARGO_BIN_EXE_fittrack"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("FITTRACK_GENERAL__FORMAT")
        .env_remove("FITTRACK_GENERAL__CLOCK")
        .env_remove("FITTRACK_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary starts");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin.as_bytes())
        .expect("stdin written");
    child.wait_with_output().expect("binary finishes")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn parse_argument_line_as_json() {
    let output = fittrack(
        &[
            "--format",
            "json",
            "parse",
            r#"Exercise name "Приседания" sets 4 reps_per_set 10 weight 60.0"#,
        ],
        "",
    );
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json output");
    assert_eq!(json["summary"]["metrics"]["volume"], 2400.0);
    RecordSchemas::builtin()
        .check("record_summary", &json["summary"])
        .unwrap();
}

#[test]
fn rejected_line_fails_the_command() {
    let output = fittrack(&["parse", "UserProfile gender"], "");
    assert!(!output.status.success());
    assert!(stdout(&output).starts_with("Parse error: unpaired key/value"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 of 1 line(s) rejected"), "{stderr}");
}

#[test]
fn parse_reads_stdin_when_no_lines_given() {
    let input = "Workout date 2025.12.15 duration 01:30\n\
                 NutritionGoal goal_type \"похудение\" calories 1800.0 protein 120.0 fat 50.0 carbs 180.0\n";
    let output = fittrack(&["-f", "raw", "parse", "--today", "2026-01-01"], input);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 2);
    for line in text.lines() {
        let json: serde_json::Value = serde_json::from_str(line).expect("raw json line");
        RecordSchemas::builtin()
            .check("record_summary", &json["summary"])
            .unwrap();
    }
}

#[test]
fn session_transcript() {
    let input = "UserProfile пол \"мужской\" возраст 25 рост 180.5 вес 75.0 цель \"похудение\" активность \"средняя\"\n\
                 /bmi\n\
                 /quit\n";
    let output = fittrack(&["session", "--today", "2026-01-01"], input);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Profile created!"));
    assert!(text.contains("- BMI: 23.0"));
    assert!(text.trim_end().ends_with("Bye!"));
}

#[rstest]
#[case(&["schema"], "JSON Schemas (--json NAME)")]
#[case(&["schema", "NutritionGoal"], "goal_type (text, required)")]
#[case(&["schema", "--json", "record_summary"], "\"$schema\"")]
fn schema_command(#[case] args: &[&str], #[case] expected: &str) {
    let output = fittrack(args, "");
    assert!(output.status.success());
    assert!(stdout(&output).contains(expected));
}

#[test]
fn unknown_schema_kind_is_an_error() {
    let output = fittrack(&["schema", "Yoga"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown record kind 'Yoga'"));
}

#[test]
fn configured_format_is_the_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir(dir.path().join(".fittrack")).expect("config dir");
    std::fs::write(
        dir.path().join(".fittrack/config.toml"),
        "[general]\nformat = \"raw\"\n",
    )
    .expect("config file");

    let output = Command::new(env!("CARGO_BIN_EXE_fittrack"))
        .args(["parse", "Workout date 2025.12.15 duration 01:30"])
        .current_dir(dir.path())
        .env_remove("FITTRACK_GENERAL__FORMAT")
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).expect("raw json");
    assert_eq!(json["reply"], "created");
}
