//! Integration tests for unarc-cli.
//!
//! Archives are generated into a temp dir per test.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use flate2::Compression;
use flate2::write::GzEncoder;
use predicates::prelude::*;
use std::fs;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

fn unarc_cmd() -> Command {
    cargo_bin_cmd!("unarc")
}

/// Writes `docs.tgz`: `docs-1.0/`, `readme.txt` (0644) and `run.sh` (0755).
fn write_docs_tgz(dir: &Path) -> PathBuf {
    let mut builder = tar::Builder::new(Vec::new());

    let mut header = tar::Header::new_gnu();
    header.set_entry_type(tar::EntryType::Directory);
    header.set_mode(0o755);
    header.set_size(0);
    header.set_cksum();
    builder
        .append_data(&mut header, "docs-1.0/", std::io::empty())
        .unwrap();

    for (name, data, mode) in [
        ("docs-1.0/readme.txt", &b"read me\n"[..], 0o644),
        ("docs-1.0/run.sh", &b"#!/bin/sh\necho hi\n"[..], 0o755),
    ] {
        let mut header = tar::Header::new_gnu();
        header.set_mode(mode);
        header.set_size(data.len() as u64);
        header.set_cksum();
        builder.append_data(&mut header, name, data).unwrap();
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&builder.into_inner().unwrap()).unwrap();
    let path = dir.join("docs.tgz");
    fs::write(&path, encoder.finish().unwrap()).unwrap();
    path
}

fn write_zip(dir: &Path, name: &str, entry: &str, data: &[u8]) -> PathBuf {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file(entry, zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(data).unwrap();
    let path = dir.join(name);
    fs::write(&path, zip.finish().unwrap().into_inner()).unwrap();
    path
}

#[test]
fn test_version_flag() {
    unarc_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unarc"));
}

#[test]
fn test_extract_help() {
    unarc_cmd()
        .arg("extract")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extract archive contents"))
        .stdout(predicate::str::contains("--no-exec-bit"));
}

#[test]
fn test_extract_tgz() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_docs_tgz(temp.path());
    let out = temp.path().join("out");

    unarc_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extraction complete"))
        .stdout(predicate::str::contains("Files extracted: 2"));

    assert_eq!(fs::read_to_string(out.join("readme.txt")).unwrap(), "read me\n");
    assert!(!out.join("docs-1.0").exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(out.join("run.sh")).unwrap().permissions().mode();
        assert_ne!(mode & 0o100, 0);
    }
}

#[cfg(unix)]
#[test]
fn test_extract_no_exec_bit() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_docs_tgz(temp.path());
    let out = temp.path().join("out");

    unarc_cmd()
        .args(["extract", "--no-exec-bit"])
        .arg(&archive)
        .arg(&out)
        .assert()
        .success();

    let mode = fs::metadata(out.join("run.sh")).unwrap().permissions().mode();
    assert_eq!(mode & 0o100, 0);
}

#[test]
fn test_extract_defaults_to_current_dir() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_docs_tgz(temp.path());
    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();

    unarc_cmd()
        .current_dir(&work)
        .arg("extract")
        .arg(&archive)
        .assert()
        .success();

    assert!(work.join("readme.txt").exists());
}

#[test]
fn test_extract_zip_json_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_zip(temp.path(), "bundle.zip", "pkg/data.txt", b"payload");
    let staging = temp.path().join("staging");
    fs::create_dir(&staging).unwrap();
    let out = temp.path().join("out");

    let output = unarc_cmd()
        .args(["--json", "extract", "--staging-dir"])
        .arg(&staging)
        .arg(&archive)
        .arg(&out)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["operation"], "extract");
    assert_eq!(value["status"], "success");
    assert_eq!(value["data"]["format"], "zip");
    assert_eq!(value["data"]["files_extracted"], 1);

    assert_eq!(fs::read(out.join("pkg/data.txt")).unwrap(), b"payload");
    assert_eq!(fs::read_dir(&staging).unwrap().count(), 0);
}

#[test]
fn test_quiet_suppresses_report() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_docs_tgz(temp.path());

    unarc_cmd()
        .args(["-q", "extract"])
        .arg(&archive)
        .arg(temp.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unsupported_format_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("archive.rar");
    fs::write(&archive, b"Rar!").unwrap();
    let out = temp.path().join("out");

    unarc_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"))
        .stderr(predicate::str::contains("archive.rar"));

    assert!(!out.exists());
}

#[test]
fn test_traversal_fails_with_hint() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_zip(temp.path(), "evil.zip", "../../evil.txt", b"evil");
    let out = temp.path().join("a/b/out");

    unarc_cmd()
        .arg("extract")
        .arg(&archive)
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Security violation"))
        .stderr(predicate::str::contains("HINT"));

    assert!(!temp.path().join("a/evil.txt").exists());
}

#[test]
fn test_json_error_output() {
    let temp = TempDir::new().expect("failed to create temp dir");

    unarc_cmd()
        .args(["--json", "extract"])
        .arg(temp.path().join("missing.zip"))
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"status\": \"error\""));
}

#[test]
fn test_completion_bash() {
    unarc_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unarc"));
}
