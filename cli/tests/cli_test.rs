use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

const LAUNCH_JSON: &str = r#"{
    "url": "https://lms.example/launch",
    "secret": "s3cr3t",
    "parameters": {
        "oauth_nonce": "abc",
        "oauth_timestamp": "1000000000"
    }
}"#;

// HMAC-SHA1 over the fixture above, computed independently.
const EXPECTED_SIGNATURE: &str = "lAmKfdQgjZ1shADMlFPycRg4+6g=";

fn write_launch_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("launch.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_curl_subcommand_prints_shell_vars() {
    let dir = TempDir::new().unwrap();
    let input = write_launch_file(&dir, LAUNCH_JSON);

    let output = Command::cargo_bin("ltiforge")
        .unwrap()
        .arg("--file")
        .arg(&input)
        .arg("curl")
        .arg("--prefix")
        .arg("FOO")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(2, lines.len());
    assert_eq!("FOO_URL=$'https://lms.example/launch'", lines[0]);
    assert!(lines[1].starts_with("FOO_PARAMS=$'-d "));
    assert!(lines[1].contains(&format!("-d oauth_signature={EXPECTED_SIGNATURE}")));
}

#[test]
fn test_curl_subcommand_default_prefix() {
    let dir = TempDir::new().unwrap();
    let input = write_launch_file(&dir, LAUNCH_JSON);

    let output = Command::cargo_bin("ltiforge")
        .unwrap()
        .arg("--file")
        .arg(&input)
        .arg("curl")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("LTI_URL="));
    assert!(stdout.contains("\nLTI_PARAMS="));
}

#[test]
fn test_html_subcommand_writes_document() {
    let dir = TempDir::new().unwrap();
    let input = write_launch_file(&dir, LAUNCH_JSON);
    let output_path = dir.path().join("launch.html");

    Command::cargo_bin("ltiforge")
        .unwrap()
        .arg("--file")
        .arg(&input)
        .arg("html")
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success();

    let document = fs::read_to_string(&output_path).unwrap();
    assert!(document.starts_with("<!DOCTYPE>"));
    assert!(document.contains("action=\"https://lms.example/launch\""));
    assert!(document.contains(&format!(
        "name=\"oauth_signature\" value=\"{EXPECTED_SIGNATURE}\""
    )));
    assert!(document.ends_with("</html>"));
}

#[test]
fn test_missing_url_fails_without_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_launch_file(&dir, r#"{"secret": "s3cr3t", "parameters": {}}"#);
    let output_path = dir.path().join("launch.html");

    let output = Command::cargo_bin("ltiforge")
        .unwrap()
        .arg("--file")
        .arg(&input)
        .arg("html")
        .arg("--output")
        .arg(&output_path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("url"));
    assert!(!output_path.exists());
}

#[test]
fn test_unreadable_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    Command::cargo_bin("ltiforge")
        .unwrap()
        .arg("--file")
        .arg(&missing)
        .arg("curl")
        .assert()
        .failure();
}

#[test]
fn test_malformed_input_fails_with_diagnostic() {
    let dir = TempDir::new().unwrap();
    let input = write_launch_file(&dir, "{ this is not json");

    let output = Command::cargo_bin("ltiforge")
        .unwrap()
        .arg("--file")
        .arg(&input)
        .arg("curl")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("JSON"));
}
