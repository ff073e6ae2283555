use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{CommitSummary, GitHubUser, Repository};

/// One page of this size covers the commit-count sample.
pub const COMMITS_PER_PAGE: u32 = 100;

/// Read access to the GitHub REST API, as much of it as the analyzer needs.
/// The pipeline is written against this trait so tests can substitute a stub.
#[async_trait]
pub trait GitHubFetcher: Send + Sync {
    async fn get_user(&self, username: &str) -> Result<GitHubUser>;
    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>>;
    async fn get_repo_commits(&self, owner: &str, repo: &str) -> Result<Vec<CommitSummary>>;
}

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::from_config(&Config {
            github_token: token.map(str::to_string),
            ..Config::default()
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = &config.github_token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("gitprofile/0.1"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Maps upstream statuses onto the error taxonomy: 404 means the user
    /// does not exist, 403/429 both signal exhausted quota.
    async fn check_status(&self, response: Response, username: &str) -> Result<Response> {
        match response.status() {
            StatusCode::NOT_FOUND => Err(Error::UserNotFound(username.to_string())),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(Error::RateLimited),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::GitHubApi(format!(
                    "{}: {} - {}",
                    username, status, body
                )))
            }
            _ => Ok(response),
        }
    }
}

#[async_trait]
impl GitHubFetcher for GitHubClient {
    async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let response = self.client.get(&url).send().await?;
        let response = self.check_status(response, username).await?;

        Ok(response.json().await?)
    }

    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!("{}/users/{}/repos", self.base_url, username);
        tracing::info!("Fetching repositories for: {}", username);

        let response = self.client.get(&url).send().await?;
        let response = self.check_status(response, username).await?;

        Ok(response.json().await?)
    }

    async fn get_repo_commits(&self, owner: &str, repo: &str) -> Result<Vec<CommitSummary>> {
        let url = format!(
            "{}/repos/{}/{}/commits?per_page={}",
            self.base_url, owner, repo, COMMITS_PER_PAGE
        );
        tracing::debug!("Fetching commits for: {}/{}", owner, repo);

        let response = self.client.get(&url).send().await?;
        let response = self.check_status(response, owner).await?;

        Ok(response.json().await?)
    }
}
