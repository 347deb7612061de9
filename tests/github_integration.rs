//! Integration tests for the GitHub provider.
//!
//! Uses wiremock for HTTP mocking. Tests cover listing pagination, raw file
//! contents, the recursive tree listing, status mapping and a full
//! generation run against the mock API.

use std::fs;

use govanity::cli::generate;
use govanity::core::config::{Config, Overrides};
use govanity::core::types::{EntryKind, FileEntry};
use govanity::engine::{Outcome, SkipReason};
use govanity::forge::{ForgeError, GitHubProvider, RepoProvider};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(server: &MockServer) -> GitHubProvider {
    GitHubProvider::with_api_base("test-token", server.uri())
}

fn repo_json(name: &str, language: Option<&str>) -> Value {
    json!({
        "name": name,
        "html_url": format!("https://github.com/blksails/{}", name),
        "language": language,
        "description": null,
        "default_branch": "main",
    })
}

async fn mount_json(server: &MockServer, at: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn follows_pages_until_short_page() {
        let server = MockServer::start().await;

        let first: Vec<Value> = (0..100)
            .map(|i| repo_json(&format!("repo{}", i), Some("Go")))
            .collect();
        Mock::given(method("GET"))
            .and(path("/orgs/blksails/repos"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "100"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(first))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/orgs/blksails/repos"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(vec![repo_json("last", None)]),
            )
            .expect(1)
            .mount(&server)
            .await;

        let repos = provider(&server).list_repositories("blksails").await.unwrap();

        assert_eq!(repos.len(), 101);
        assert_eq!(repos[0].name, "repo0");
        assert_eq!(repos[0].language.as_deref(), Some("Go"));
        assert_eq!(repos[0].default_branch.as_deref(), Some("main"));
        assert_eq!(repos[100].name, "last");
        assert_eq!(repos[100].language, None);
        assert!(repos[100].file_entries.is_empty());
    }

    #[tokio::test]
    async fn unknown_org_is_not_found() {
        let server = MockServer::start().await;
        mount_json(&server, "/orgs/nobody/repos", 404, json!({"message": "Not Found"})).await;

        let err = provider(&server).list_repositories("nobody").await.unwrap_err();

        assert_eq!(err, ForgeError::NotFound("Not Found".into()));
    }

    #[tokio::test]
    async fn bad_token_is_auth_failure() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/orgs/blksails/repos",
            401,
            json!({"message": "Bad credentials"}),
        )
        .await;

        let err = provider(&server).list_repositories("blksails").await.unwrap_err();

        assert!(matches!(err, ForgeError::AuthFailed(_)));
    }

    #[tokio::test]
    async fn exhausted_quota_is_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/blksails/repos"))
            .respond_with(
                ResponseTemplate::new(403)
                    .insert_header("X-RateLimit-Remaining", "0")
                    .set_body_json(json!({"message": "API rate limit exceeded"})),
            )
            .mount(&server)
            .await;

        let err = provider(&server).list_repositories("blksails").await.unwrap_err();

        assert_eq!(err, ForgeError::RateLimited);
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/blksails/repos"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = provider(&server).list_repositories("blksails").await.unwrap_err();

        assert_eq!(err, ForgeError::RateLimited);
    }

    #[tokio::test]
    async fn server_error_keeps_status() {
        let server = MockServer::start().await;
        mount_json(&server, "/orgs/blksails/repos", 502, json!({"message": "Bad Gateway"})).await;

        let err = provider(&server).list_repositories("blksails").await.unwrap_err();

        assert!(matches!(err, ForgeError::ApiError { status: 502, .. }));
    }

    #[tokio::test]
    async fn empty_token_never_hits_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let provider = GitHubProvider::with_api_base("", server.uri());
        let err = provider.list_repositories("blksails").await.unwrap_err();

        assert_eq!(err, ForgeError::AuthRequired);
    }
}

mod contents {
    use super::*;

    #[tokio::test]
    async fn returns_raw_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/blksails/foo/contents/go.mod"))
            .and(header("accept", "application/vnd.github.raw+json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("module pkg.blksails.net/foo\n"),
            )
            .mount(&server)
            .await;

        let bytes = provider(&server)
            .get_file_content("blksails", "foo", "go.mod")
            .await
            .unwrap();

        assert_eq!(bytes.as_deref(), Some(&b"module pkg.blksails.net/foo\n"[..]));
    }

    #[tokio::test]
    async fn missing_file_is_none() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/repos/blksails/foo/contents/go.mod",
            404,
            json!({"message": "Not Found"}),
        )
        .await;

        let bytes = provider(&server)
            .get_file_content("blksails", "foo", "go.mod")
            .await
            .unwrap();

        assert_eq!(bytes, None);
    }

    #[tokio::test]
    async fn forbidden_is_an_error() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/repos/blksails/foo/contents/go.mod",
            403,
            json!({"message": "Resource not accessible"}),
        )
        .await;

        let err = provider(&server)
            .get_file_content("blksails", "foo", "go.mod")
            .await
            .unwrap_err();

        assert!(matches!(err, ForgeError::AuthFailed(_)));
    }
}

mod tree {
    use super::*;

    fn tree_body(truncated: bool) -> Value {
        json!({
            "sha": "abc123",
            "truncated": truncated,
            "tree": [
                {"path": "go.mod", "type": "blob"},
                {"path": "main.go", "type": "blob"},
                {"path": "sub", "type": "tree"},
                {"path": "sub/util.go", "type": "blob"},
                {"path": "vendored", "type": "commit"},
            ],
        })
    }

    #[tokio::test]
    async fn maps_entry_kinds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/blksails/foo/git/trees/HEAD"))
            .and(query_param("recursive", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tree_body(false)))
            .mount(&server)
            .await;

        let entries = provider(&server)
            .get_directory_listing("blksails", "foo", "")
            .await
            .unwrap();

        assert_eq!(entries.len(), 5);
        assert_eq!(entries[1], FileEntry::file("main.go"));
        assert_eq!(entries[2], FileEntry::dir("sub"));
        assert_eq!(entries[3], FileEntry::file("sub/util.go"));
        assert_eq!(entries[4].kind, EntryKind::Other);
    }

    #[tokio::test]
    async fn truncated_listing_is_still_returned() {
        let server = MockServer::start().await;
        mount_json(&server, "/repos/blksails/foo/git/trees/HEAD", 200, tree_body(true)).await;

        let entries = provider(&server)
            .get_directory_listing("blksails", "foo", "")
            .await
            .unwrap();

        assert_eq!(entries.len(), 5);
    }

    #[tokio::test]
    async fn subdirectory_prefix_filters_entries() {
        let server = MockServer::start().await;
        mount_json(&server, "/repos/blksails/foo/git/trees/HEAD", 200, tree_body(false)).await;

        let entries = provider(&server)
            .get_directory_listing("blksails", "foo", "sub")
            .await
            .unwrap();

        assert_eq!(entries, vec![FileEntry::dir("sub"), FileEntry::file("sub/util.go")]);
    }

    #[tokio::test]
    async fn empty_repository_is_conflict_error() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/repos/blksails/empty/git/trees/HEAD",
            409,
            json!({"message": "Git Repository is empty."}),
        )
        .await;

        let err = provider(&server)
            .get_directory_listing("blksails", "empty", "")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ForgeError::ApiError {
                status: 409,
                message: "Git Repository is empty.".into()
            }
        );
    }
}

mod end_to_end {
    use super::*;

    #[tokio::test]
    async fn generates_site_from_api() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/orgs/blksails/repos",
            200,
            json!([
                repo_json("foo", Some("Go")),
                repo_json("nomod", Some("Go")),
                repo_json("site", Some("HTML")),
            ]),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/repos/blksails/foo/contents/go.mod"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("module pkg.blksails.net/foo\n"),
            )
            .mount(&server)
            .await;
        mount_json(
            &server,
            "/repos/blksails/nomod/contents/go.mod",
            404,
            json!({"message": "Not Found"}),
        )
        .await;
        mount_json(
            &server,
            "/repos/blksails/foo/git/trees/HEAD",
            200,
            json!({
                "truncated": false,
                "tree": [
                    {"path": "main.go", "type": "blob"},
                    {"path": "sub", "type": "tree"},
                    {"path": "sub/util.go", "type": "blob"},
                ],
            }),
        )
        .await;

        let temp = TempDir::new().unwrap();
        let out = temp.path().join("public");
        let settings = Config::default()
            .resolve(
                Overrides {
                    org: Some("blksails".into()),
                    base_domain: Some("pkg.blksails.net".into()),
                    output_dir: Some(out.clone()),
                    api_base: Some(server.uri()),
                    ..Default::default()
                },
                Some("test-token".into()),
            )
            .unwrap();

        let output = generate(&settings).await.unwrap();

        assert_eq!(output.registry.len(), 2);
        assert_eq!(
            output.report.outcome("nomod"),
            Some(&Outcome::Skipped(SkipReason::ManifestMissing))
        );
        assert!(matches!(
            output.report.outcome("site"),
            Some(Outcome::Skipped(SkipReason::NotGo(_)))
        ));

        let page = fs::read_to_string(out.join("foo/sub/index.html")).unwrap();
        assert!(page.contains("pkg.blksails.net/foo/sub git https://github.com/blksails/foo"));
        assert!(page.contains("https://github.com/blksails/foo/tree/main{/dir}"));
        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("go get pkg.blksails.net/foo/sub"));
    }

    #[tokio::test]
    async fn listing_failure_aborts_without_output() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/orgs/blksails/repos",
            401,
            json!({"message": "Bad credentials"}),
        )
        .await;

        let temp = TempDir::new().unwrap();
        let out = temp.path().join("public");
        let settings = Config::default()
            .resolve(
                Overrides {
                    org: Some("blksails".into()),
                    base_domain: Some("pkg.blksails.net".into()),
                    output_dir: Some(out.clone()),
                    api_base: Some(server.uri()),
                    ..Default::default()
                },
                Some("test-token".into()),
            )
            .unwrap();

        assert!(generate(&settings).await.is_err());
        assert!(!out.join("index.html").exists());
    }
}
