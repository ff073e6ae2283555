use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::user::{GitHubUser, Repository};

/// Share of one language among the sampled repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub language: String,
    pub percentage: u32,
}

/// Estimated skill tier. Ordered; only these four labels exist.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for SkillLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(SkillLevel::Beginner),
            "Intermediate" => Ok(SkillLevel::Intermediate),
            "Advanced" => Ok(SkillLevel::Advanced),
            "Expert" => Ok(SkillLevel::Expert),
            other => Err(Error::InvalidSkillLevel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub active_repos_count: u32,
    pub last_activity: Option<DateTime<Utc>>,
}

/// Everything derived for one analysis request. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileAnalysis {
    pub profile: GitHubUser,
    pub repositories: Vec<Repository>,
    pub primary_languages: Vec<LanguageShare>,
    pub total_commits: u64,
    pub most_active_repos: Vec<Repository>,
    pub recent_activity: RecentActivity,
    pub is_active: bool,
    pub skill_level: SkillLevel,
}
