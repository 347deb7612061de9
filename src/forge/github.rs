//! forge::github
//!
//! GitHub provider implementation using the REST API.
//!
//! # Design
//!
//! This module implements the `RepoProvider` trait for GitHub:
//! - `GET /orgs/{org}/repos` (paginated) for the repository listing
//! - `GET /repos/{org}/{repo}/contents/{path}` with the raw media type for
//!   file contents, so no base64 decoding is involved
//! - `GET /repos/{org}/{repo}/git/trees/HEAD?recursive=1` for file listings
//!
//! # Rate Limiting
//!
//! GitHub has rate limits. This implementation returns
//! `ForgeError::RateLimited` when limits are hit and never retries.
//!
//! # Example
//!
//! ```ignore
//! use govanity::forge::github::GitHubProvider;
//! use govanity::forge::RepoProvider;
//!
//! let provider = GitHubProvider::new("ghp_xxx");
//! let repos = provider.list_repositories("blksails").await?;
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use super::traits::{ForgeError, RepoProvider};
use crate::core::config::DEFAULT_API_BASE;
use crate::core::types::{EntryKind, FileEntry, Repository};

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "govanity";

/// Media type for JSON responses.
const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Media type returning file contents as raw bytes.
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw+json";

/// GitHub's maximum page size.
const PER_PAGE: usize = 100;

/// GitHub provider implementation.
pub struct GitHubProvider {
    /// HTTP client for making requests
    client: Client,
    /// Personal access token or app token
    token: String,
    /// API base URL (configurable for GitHub Enterprise)
    api_base: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for GitHubProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubProvider")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl GitHubProvider {
    /// Create a provider against api.github.com.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    /// Create a provider with a custom API base URL.
    ///
    /// Use this for GitHub Enterprise installations
    /// (e.g., `https://github.example.com/api/v3`) and for tests.
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self {
            client: Client::new(),
            token: token.into(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Get the API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build common headers for API requests.
    fn headers(&self, accept: &'static str) -> Result<HeaderMap, ForgeError> {
        if self.token.is_empty() {
            return Err(ForgeError::AuthRequired);
        }
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| ForgeError::AuthFailed("token contains invalid characters".into()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(accept));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        Ok(headers)
    }

    /// Build URL for a repository endpoint.
    fn repo_url(&self, org: &str, repo: &str, path: &str) -> String {
        format!("{}/repos/{}/{}/{}", self.api_base, org, repo, path)
    }

    /// Send a GET request.
    async fn get(&self, url: &str, accept: &'static str) -> Result<Response, ForgeError> {
        self.client
            .get(url)
            .headers(self.headers(accept)?)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))
    }

    /// Handle API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, ForgeError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })
        } else {
            Err(self.error_from_response(response, status).await)
        }
    }

    /// Map an error response from the API.
    async fn error_from_response(&self, response: Response, status: StatusCode) -> ForgeError {
        // Extract the rate limit header before consuming the body.
        let rate_limited = response
            .headers()
            .get("X-RateLimit-Remaining")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "0");

        // Try to get error message from body
        let message = match response.json::<GitHubErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => "Unknown error".to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED => ForgeError::AuthFailed("Invalid or expired token".into()),
            StatusCode::FORBIDDEN if rate_limited => ForgeError::RateLimited,
            StatusCode::FORBIDDEN => {
                ForgeError::AuthFailed(format!("Permission denied: {}", message))
            }
            StatusCode::NOT_FOUND => ForgeError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => ForgeError::RateLimited,
            _ if status.is_server_error() => ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("GitHub server error: {}", message),
            },
            _ => ForgeError::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl RepoProvider for GitHubProvider {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>, ForgeError> {
        let mut repos = Vec::new();
        let mut page: u32 = 1;

        loop {
            let url = format!(
                "{}/orgs/{}/repos?per_page={}&page={}",
                self.api_base, org, PER_PAGE, page
            );
            let response = self.get(&url, JSON_MEDIA_TYPE).await?;
            let page_repos: Vec<GitHubRepo> = self.handle_response(response).await?;
            let page_count = page_repos.len();

            tracing::debug!(org, page, count = page_count, "fetched repository page");
            repos.extend(page_repos.into_iter().map(Repository::from));

            // Stop when no more pages
            if page_count < PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(repos)
    }

    async fn get_file_content(
        &self,
        org: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<Vec<u8>>, ForgeError> {
        let url = self.repo_url(org, repo, &format!("contents/{}", path.trim_matches('/')));
        let response = self.get(&url, RAW_MEDIA_TYPE).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(self.error_from_response(response, status).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;
        Ok(Some(bytes.to_vec()))
    }

    async fn get_directory_listing(
        &self,
        org: &str,
        repo: &str,
        path: &str,
    ) -> Result<Vec<FileEntry>, ForgeError> {
        let url = self.repo_url(org, repo, "git/trees/HEAD?recursive=1");
        let response = self.get(&url, JSON_MEDIA_TYPE).await?;
        let tree: GitHubTree = self.handle_response(response).await?;

        if tree.truncated {
            tracing::warn!(
                repo,
                entries = tree.tree.len(),
                "file listing truncated by GitHub; some packages may be missing"
            );
        }

        let prefix = path.trim_matches('/');
        Ok(tree
            .tree
            .into_iter()
            .map(FileEntry::from)
            .filter(|e| {
                prefix.is_empty() || e.path == prefix || e.path.starts_with(&format!("{}/", prefix))
            })
            .collect())
    }
}

// --------------------------------------------------------------------------
// API Response Types
// --------------------------------------------------------------------------

/// GitHub error response format.
#[derive(Deserialize)]
struct GitHubErrorResponse {
    message: String,
}

/// Repository as returned by the org listing.
#[derive(Deserialize)]
struct GitHubRepo {
    name: String,
    html_url: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    default_branch: Option<String>,
}

impl From<GitHubRepo> for Repository {
    fn from(gh: GitHubRepo) -> Self {
        Repository {
            name: gh.name,
            language: gh.language,
            html_url: gh.html_url,
            description: gh.description,
            default_branch: gh.default_branch,
            file_entries: Vec::new(),
        }
    }
}

/// Recursive git tree.
#[derive(Deserialize)]
struct GitHubTree {
    tree: Vec<GitHubTreeEntry>,
    #[serde(default)]
    truncated: bool,
}

/// One git tree entry.
#[derive(Deserialize)]
struct GitHubTreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

impl From<GitHubTreeEntry> for FileEntry {
    fn from(entry: GitHubTreeEntry) -> Self {
        let kind = match entry.kind.as_str() {
            "blob" => EntryKind::File,
            "tree" => EntryKind::Dir,
            _ => EntryKind::Other,
        };
        FileEntry {
            path: entry.path,
            kind,
        }
    }
}
