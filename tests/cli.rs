use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn to_standard_via_cli() {
    let mut cmd = cargo_bin_cmd!("piyafmt");
    cmd.arg("to-standard").arg(fixture_path("mixed.pi"));

    cmd.assert()
        .success()
        .stdout(fs::read_to_string(fixture_path("mixed.py")).unwrap());
}

#[test]
fn to_localized_from_stdin() {
    let mut cmd = cargo_bin_cmd!("piyafmt");
    cmd.arg("to-localized")
        .arg("-")
        .write_stdin("if x:\n    print(\"if\")\n");

    cmd.assert()
        .success()
        .stdout("ถ้า x:\n    พิมพ์(\"if\")\n");
}

#[test]
fn format_to_stdout() {
    let mut cmd = cargo_bin_cmd!("piyafmt");
    cmd.arg("format").arg(fixture_path("badly_formatted.pi"));

    cmd.assert().success().stdout(
        predicate::str::contains("    พิมพ์(\"Hello\")  # Badly formatted code")
            .and(predicate::str::contains("        พิมพ์(i)")),
    );
}

#[test]
fn format_write_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.pi");
    fs::write(&path, "ถ้า x:\n        พิมพ์ ( x )\n").unwrap();

    let mut cmd = cargo_bin_cmd!("piyafmt");
    cmd.arg("format").arg(&path).arg("--write");
    cmd.assert().success().stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&path).unwrap(), "ถ้า x:\n    พิมพ์(x)\n");
}

#[test]
fn format_write_rejects_stdin() {
    let mut cmd = cargo_bin_cmd!("piyafmt");
    cmd.arg("format").arg("-").arg("--write").write_stdin("x=1\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--write needs a file path"));
}

#[test]
fn indent_width_override() {
    let mut cmd = cargo_bin_cmd!("piyafmt");
    cmd.arg("--indent-width")
        .arg("2")
        .arg("format")
        .arg("-")
        .write_stdin("ถ้า x:\n        ผ่าน\n");

    cmd.assert().success().stdout("ถ้า x:\n  ผ่าน\n");
}

#[test]
fn config_file_layers_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("piyafmt.toml");
    fs::write(&config, "[formatting]\nspace_after_comma = true\n").unwrap();

    let mut cmd = cargo_bin_cmd!("piyafmt");
    cmd.arg("--config")
        .arg(&config)
        .arg("format")
        .arg("-")
        .write_stdin("พิมพ์(a,b)\n");

    cmd.assert().success().stdout("พิมพ์(a, b)\n");
}

#[test]
fn custom_keyword_table() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("keywords.json");
    fs::write(
        &table,
        r#"{"keywords":[{"localized":"เมื่อ","standard":"if"}]}"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("piyafmt");
    cmd.arg("--keywords")
        .arg(&table)
        .arg("to-standard")
        .arg("-")
        .write_stdin("เมื่อ ถ้า:");

    cmd.assert().success().stdout("if ถ้า:");
}

#[test]
fn invalid_keyword_table_fails() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("keywords.json");
    fs::write(
        &table,
        r#"{"keywords":[{"localized":"ถ้า","standard":"if"},{"localized":"ถ้า","standard":"when"}]}"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("piyafmt");
    cmd.arg("--keywords").arg(&table).arg("keywords");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn scan_json_output() {
    let mut cmd = cargo_bin_cmd!("piyafmt");
    cmd.arg("scan")
        .arg("-")
        .arg("--format")
        .arg("json")
        .write_stdin("x = 1  # c");

    cmd.assert().success().stdout(
        predicate::str::contains(r#""kind": "code""#)
            .and(predicate::str::contains(r#""kind": "comment""#))
            .and(predicate::str::contains(r##""text": "# c""##)),
    );
}

#[test]
fn keywords_listing() {
    let mut cmd = cargo_bin_cmd!("piyafmt");
    cmd.arg("keywords");

    cmd.assert().success().stdout(
        predicate::str::contains("if           ถ้า").and(predicate::str::contains("print")),
    );
}

#[test]
fn missing_input_file_fails() {
    let mut cmd = cargo_bin_cmd!("piyafmt");
    cmd.arg("format").arg("/nonexistent/input.pi");

    cmd.assert().failure().stderr(predicate::str::contains("Error:"));
}
