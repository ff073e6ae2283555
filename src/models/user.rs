use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Days a repository may sit untouched and still count as recently active.
pub const RECENT_ACTIVITY_DAYS: i64 = 30;

const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

impl GitHubUser {
    /// Account age in fractional years (365-day year), relative to `now`.
    pub fn account_age_years(&self, now: DateTime<Utc>) -> f64 {
        (now - self.created_at).num_seconds() as f64 / SECONDS_PER_YEAR
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(rename = "stargazers_count")]
    pub stars: u32,
    #[serde(rename = "forks_count")]
    pub forks: u32,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Repository {
    /// True when the last update falls strictly within the recency window.
    pub fn is_recently_active(&self, now: DateTime<Utc>) -> bool {
        self.updated_at > now - Duration::days(RECENT_ACTIVITY_DAYS)
    }
}
