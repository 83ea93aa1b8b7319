//! Tests that run the `loom` binary against manifests in a temp directory.

use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

const MANIFEST: &str = r#"
[namespace]
name = "Acme.Model"
imports = ["System"]

[[data]]
name = "Customer"
[data.fields]
name = "String"

[[dictionary]]
key = "string"
value = "Int32"
"#;

fn loom(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_loom"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run loom")
}

fn write_manifest(dir: &Path, content: &str) {
    fs::write(dir.join("loom.toml"), content).expect("Failed to write manifest");
}

#[test]
fn test_generate_writes_csharp() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_manifest(temp_dir.path(), MANIFEST);

    let output = loom(temp_dir.path(), &["generate", "-o", "Model.cs"]);
    assert!(output.status.success(), "{:?}", output);

    let source = fs::read_to_string(temp_dir.path().join("Model.cs")).unwrap();
    assert!(source.starts_with("using System;\n"));
    assert!(source.contains("public class CustomerData"));
    assert!(source.contains("public class stringInt32Dictionary : System.Collections.DictionaryBase"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated 2 classes"));
}

#[test]
fn test_generate_json_to_stdout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_manifest(temp_dir.path(), MANIFEST);

    let output = loom(temp_dir.path(), &["generate", "--format", "json"]);
    assert!(output.status.success(), "{:?}", output);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "Acme.Model");
    assert_eq!(json["types"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_check_lists_classes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_manifest(temp_dir.path(), MANIFEST);

    let output = loom(temp_dir.path(), &["check"]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Acme.Model.CustomerData (2 members)"));
    assert!(stdout.contains("Acme.Model.stringInt32Dictionary (5 members)"));
}

#[test]
fn test_missing_dictionary_value_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_manifest(
        temp_dir.path(),
        "[namespace]\nname = \"Acme\"\n\n[[dictionary]]\nkey = \"string\"\n",
    );

    let output = loom(temp_dir.path(), &["generate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_manifest_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = loom(temp_dir.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loom.toml"));
}

#[test]
fn test_colliding_field_names_fail() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_manifest(
        temp_dir.path(),
        "[namespace]\nname = \"Acme\"\n\n[[data]]\nname = \"Customer\"\n[data.fields]\nfirst_name = \"Int32\"\nfirstName = \"Int32\"\n",
    );

    let output = loom(temp_dir.path(), &["generate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("firstName"), "{}", stderr);
}

#[test]
fn test_completions_for_named_shell() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = loom(temp_dir.path(), &["completions", "bash"]);
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("_loom()"));
}

#[test]
fn test_completions_detect_shell_from_env() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_loom"))
        .arg("completions")
        .current_dir(temp_dir.path())
        .env("SHELL", "/usr/bin/zsh")
        .output()
        .expect("Failed to run loom");
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#compdef loom"));
}
