//! Integration tests for the govanity binary.
//!
//! Each test runs in an isolated temp directory with HOME and the config
//! variables pointed there, so no user config is picked up.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get a command for running govanity inside `dir`.
fn govanity(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("govanity").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("NO_COLOR", "1")
        .env_remove("GOVANITY_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_flag_works() {
    let temp = TempDir::new().unwrap();
    govanity(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("govanity"));
}

#[test]
fn help_mentions_token() {
    let temp = TempDir::new().unwrap();
    govanity(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GITHUB_TOKEN"))
        .stdout(predicate::str::contains("--base-domain"));
}

#[test]
fn missing_token_fails() {
    let temp = TempDir::new().unwrap();
    govanity(temp.path())
        .env_remove("GITHUB_TOKEN")
        .args(["--org", "blksails", "--base-domain", "pkg.blksails.net"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_TOKEN"));

    assert!(!temp.path().join("public").exists());
}

#[test]
fn blank_token_fails() {
    let temp = TempDir::new().unwrap();
    govanity(temp.path())
        .env("GITHUB_TOKEN", "   ")
        .args(["--org", "blksails", "--base-domain", "pkg.blksails.net"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_TOKEN"));
}

#[test]
fn missing_org_fails() {
    let temp = TempDir::new().unwrap();
    govanity(temp.path())
        .env("GITHUB_TOKEN", "ghp_test")
        .args(["--base-domain", "pkg.blksails.net"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--org"));
}

#[test]
fn unknown_config_key_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("govanity.toml"),
        "org = \"blksails\"\nbase_domian = \"typo\"\n",
    )
    .unwrap();

    govanity(temp.path())
        .env("GITHUB_TOKEN", "ghp_test")
        .assert()
        .failure()
        .stderr(predicate::str::contains("govanity.toml"));
}

#[test]
fn unknown_flag_is_usage_error() {
    let temp = TempDir::new().unwrap();
    govanity(temp.path())
        .arg("--frobnicate")
        .assert()
        .code(2);
}

#[tokio::test(flavor = "multi_thread")]
async fn generates_pages_from_config_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orgs/blksails/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "name": "foo",
            "html_url": "https://github.com/blksails/foo",
            "language": "Go",
            "description": "Foo utilities",
            "default_branch": "main",
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/blksails/foo/contents/go.mod"))
        .respond_with(ResponseTemplate::new(200).set_body_string("module pkg.blksails.net/foo\n"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/blksails/foo/git/trees/HEAD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "truncated": false,
            "tree": [{"path": "sub/util.go", "type": "blob"}],
        })))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("govanity.toml"),
        format!(
            "org = \"blksails\"\nbase_domain = \"pkg.blksails.net\"\napi_base = \"{}\"\n",
            server.uri()
        ),
    )
    .unwrap();

    govanity(temp.path())
        .env("GITHUB_TOKEN", "ghp_test")
        .args(["--output", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 packages from 1 repository"));

    let site = temp.path().join("site");
    assert!(site.join("index.html").is_file());
    assert!(site.join("foo/index.html").is_file());
    assert!(site.join("foo/sub/index.html").is_file());
}
