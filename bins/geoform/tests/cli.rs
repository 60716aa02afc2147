use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn candidates() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"lines":["1600 Amphitheatre Pkwy, Mountain View, CA 94043"],"subThoroughfare":"1600","thoroughfare":"Amphitheatre Pkwy","locality":"Mountain View","adminArea":"CA","postalCode":"94043"}}]"#
    )
    .unwrap();
    file
}

fn geoform() -> Command {
    let mut cmd = Command::cargo_bin("geoform").unwrap();
    cmd.env_remove("RUST_LOG").arg("--quiet");
    cmd
}

#[test]
fn submits_complete_form() {
    let file = candidates();
    geoform()
        .args(["--lat", "37.422", "--lon", "-122.084", "--first", "Ada", "--last", "Lovelace"])
        .arg("--candidates")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Form submitted:"))
        .stdout(predicate::str::contains("\"street\": \"1600 Amphitheatre Pkwy\""));
}

#[test]
fn prints_submitted_json_unindented() {
    let file = candidates();
    geoform()
        .args(["--lat", "37.422", "--lon", "-122.084", "--first", "Ada", "--last", "Lovelace"])
        .arg("--candidates")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Form submitted:\n{\n  \"first\": \"Ada\",\n"))
        .stdout(predicate::str::contains("\n}"));
}

#[test]
fn rejects_without_location() {
    let file = candidates();
    geoform()
        .args(["--first", "Ada", "--last", "Lovelace"])
        .arg("--candidates")
        .arg(file.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "Form not submitted. One or more fields are null or blank.",
        ));
}

#[test]
fn rejects_when_candidates_file_is_missing() {
    geoform()
        .args(["--lat", "37.422", "--lon", "-122.084", "--first", "Ada", "--last", "Lovelace"])
        .args(["--candidates", "/nonexistent/candidates.json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Form not submitted."));
}

#[test]
fn reports_missing_config() {
    geoform()
        .args(["--config", "/nonexistent/geoform.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn uses_configured_messages() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[messages]\nrejected = \"Please complete every field\"").unwrap();

    geoform()
        .args(["--first", "Ada"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Please complete every field"));
}
