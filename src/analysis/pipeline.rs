use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;

use crate::analysis::engine::AnalysisEngine;
use crate::error::Result;
use crate::github::username;
use crate::github::GitHubFetcher;
use crate::models::{ProfileReport, Repository};

/// Commit counting samples this many leading repositories.
pub const COMMIT_SAMPLE_REPOS: usize = 3;

/// Sequences one analysis request: validate, fetch, count, analyze, shape.
pub struct ProfileAnalyzer {
    github: Arc<dyn GitHubFetcher>,
    engine: AnalysisEngine,
}

impl ProfileAnalyzer {
    pub fn new(github: impl GitHubFetcher + 'static) -> Self {
        Self {
            github: Arc::new(github),
            engine: AnalysisEngine::new(),
        }
    }

    /// Runs the full pipeline for one username. Validation failures
    /// short-circuit before any network call; profile and repository fetch
    /// errors propagate; commit-count failures never do.
    pub async fn analyze(&self, raw_username: &str) -> Result<ProfileReport> {
        let username = username::validate(raw_username)?;
        tracing::info!("Starting profile analysis for {}", username);

        let profile = self.github.get_user(username).await?;
        let repositories = self.github.get_user_repos(username).await?;
        tracing::info!("Found {} repositories", repositories.len());

        let total_commits = self.count_recent_commits(username, &repositories).await;
        tracing::info!("Counted {} recent commits", total_commits);

        let analysis = self
            .engine
            .analyze_profile(profile, repositories, total_commits, Utc::now());

        tracing::info!("Analysis completed for {}", username);
        Ok(ProfileReport::from(&analysis))
    }

    /// Sums one page of recent commits across the first
    /// [`COMMIT_SAMPLE_REPOS`] repositories as listed. The fetches are
    /// independent; a failed one is logged and contributes an explicit zero,
    /// so a partial outage shrinks the count instead of failing the request.
    async fn count_recent_commits(&self, username: &str, repositories: &[Repository]) -> u64 {
        let fetches = repositories
            .iter()
            .take(COMMIT_SAMPLE_REPOS)
            .map(|repo| async move {
                match self.github.get_repo_commits(username, &repo.name).await {
                    Ok(commits) => commits.len() as u64,
                    Err(err) => {
                        tracing::warn!(
                            "Commit fetch for {}/{} failed, counting zero: {}",
                            username,
                            repo.name,
                            err
                        );
                        0
                    }
                }
            });

        join_all(fetches).await.into_iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Duration, TimeZone};
    use std::collections::HashMap;

    use crate::error::Error;
    use crate::models::{
        CommitAuthor, CommitDetails, CommitSummary, GitHubUser, SkillLevel,
    };

    fn now_ish() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn sample_user() -> GitHubUser {
        GitHubUser {
            login: "octocat".to_string(),
            avatar_url: "https://example.com/a.png".to_string(),
            bio: None,
            public_repos: 5,
            followers: 1,
            following: 1,
            created_at: now_ish() - Duration::days(400),
        }
    }

    fn sample_repo(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            stars: 1,
            forks: 0,
            language: Some("Rust".to_string()),
            updated_at: Utc::now() - Duration::days(3),
        }
    }

    fn commits(n: usize) -> Vec<CommitSummary> {
        (0..n)
            .map(|i| CommitSummary {
                sha: format!("sha-{}", i),
                commit: CommitDetails {
                    message: "change".to_string(),
                    author: Some(CommitAuthor {
                        name: "octocat".to_string(),
                        date: now_ish(),
                    }),
                },
            })
            .collect()
    }

    /// Canned fetcher: per-repo commit results, optional user-level failure.
    struct StubGitHub {
        user: Result<GitHubUser>,
        repos: Vec<Repository>,
        commit_results: HashMap<String, Result<Vec<CommitSummary>>>,
    }

    impl StubGitHub {
        fn healthy(repos: Vec<Repository>, per_repo_commits: usize) -> Self {
            let commit_results = repos
                .iter()
                .map(|r| (r.name.clone(), Ok(commits(per_repo_commits))))
                .collect();
            Self {
                user: Ok(sample_user()),
                repos,
                commit_results,
            }
        }
    }

    // Error is not Clone; replay the stored failure by variant.
    fn replay(err: &Error) -> Error {
        match err {
            Error::UserNotFound(name) => Error::UserNotFound(name.clone()),
            Error::RateLimited => Error::RateLimited,
            other => Error::GitHubApi(other.to_string()),
        }
    }

    #[async_trait]
    impl GitHubFetcher for StubGitHub {
        async fn get_user(&self, _username: &str) -> Result<GitHubUser> {
            match &self.user {
                Ok(user) => Ok(user.clone()),
                Err(err) => Err(replay(err)),
            }
        }

        async fn get_user_repos(&self, _username: &str) -> Result<Vec<Repository>> {
            Ok(self.repos.clone())
        }

        async fn get_repo_commits(
            &self,
            _owner: &str,
            repo: &str,
        ) -> Result<Vec<CommitSummary>> {
            match self.commit_results.get(repo) {
                Some(Ok(list)) => Ok(list.clone()),
                Some(Err(err)) => Err(replay(err)),
                None => panic!("unexpected commit fetch for {}", repo),
            }
        }
    }

    #[tokio::test]
    async fn test_invalid_username_short_circuits() {
        // A stub with no repos and a failing user fetch: neither may be hit.
        let analyzer = ProfileAnalyzer::new(StubGitHub {
            user: Err(Error::GitHubApi("must not be called".to_string())),
            repos: Vec::new(),
            commit_results: HashMap::new(),
        });

        let err = analyzer.analyze("abc--d").await.unwrap_err();
        assert!(matches!(err, Error::InvalidUsername(_)));
        assert_eq!(err.status_code(), 400);

        let err = analyzer.analyze("  ").await.unwrap_err();
        assert!(matches!(err, Error::MissingUsername));
    }

    #[tokio::test]
    async fn test_user_not_found_propagates() {
        let analyzer = ProfileAnalyzer::new(StubGitHub {
            user: Err(Error::UserNotFound("ghost".to_string())),
            repos: Vec::new(),
            commit_results: HashMap::new(),
        });

        let err = analyzer.analyze("ghost").await.unwrap_err();
        assert!(matches!(err, Error::UserNotFound(_)));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_rate_limit_propagates() {
        let analyzer = ProfileAnalyzer::new(StubGitHub {
            user: Err(Error::RateLimited),
            repos: Vec::new(),
            commit_results: HashMap::new(),
        });

        let err = analyzer.analyze("octocat").await.unwrap_err();
        assert!(matches!(err, Error::RateLimited));
        assert_eq!(err.status_code(), 429);
        assert_eq!(
            err.client_message(),
            "GitHub API rate limit exceeded. Please provide a personal access token."
        );
    }

    #[tokio::test]
    async fn test_commit_count_samples_first_three_repos() {
        let repos: Vec<Repository> =
            (0..5).map(|i| sample_repo(&format!("repo-{}", i))).collect();
        let analyzer = ProfileAnalyzer::new(StubGitHub::healthy(repos, 10));

        let report = analyzer.analyze("octocat").await.unwrap();
        assert_eq!(report.total_commits, 30);
    }

    #[tokio::test]
    async fn test_commit_fetch_failure_counts_as_zero() {
        let repos: Vec<Repository> =
            (0..3).map(|i| sample_repo(&format!("repo-{}", i))).collect();
        let mut stub = StubGitHub::healthy(repos, 10);
        stub.commit_results.insert(
            "repo-1".to_string(),
            Err(Error::GitHubApi("boom".to_string())),
        );
        let analyzer = ProfileAnalyzer::new(stub);

        let report = analyzer.analyze("octocat").await.unwrap();
        assert_eq!(report.total_commits, 20);
    }

    #[tokio::test]
    async fn test_report_carries_profile_and_analysis_fields() {
        let repos = vec![sample_repo("solo")];
        let analyzer = ProfileAnalyzer::new(StubGitHub::healthy(repos, 4));

        let report = analyzer.analyze(" octocat ").await.unwrap();
        assert_eq!(report.username, "octocat");
        assert_eq!(report.public_repos, 5);
        assert_eq!(report.total_commits, 4);
        assert_eq!(report.primary_languages[0].language, "Rust");
        assert_eq!(report.most_active_repos.len(), 1);
        assert!(report.is_active);
        assert_eq!(report.skill_level, SkillLevel::Beginner);
    }

    #[tokio::test]
    async fn test_report_serializes_with_camel_case_keys() {
        let repos = vec![sample_repo("solo")];
        let analyzer = ProfileAnalyzer::new(StubGitHub::healthy(repos, 1));

        let report = analyzer.analyze("octocat").await.unwrap();
        let json = serde_json::to_value(&report).unwrap();

        for key in [
            "username",
            "avatarUrl",
            "bio",
            "publicRepos",
            "followers",
            "following",
            "primaryLanguages",
            "totalCommits",
            "mostActiveRepos",
            "recentActivity",
            "isActive",
            "skillLevel",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
        assert!(json["recentActivity"].get("activeReposCount").is_some());
        assert!(json["mostActiveRepos"][0].get("lastUpdated").is_some());
    }
}
