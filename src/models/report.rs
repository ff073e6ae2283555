use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::analysis::{LanguageShare, ProfileAnalysis, RecentActivity, SkillLevel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRepo {
    pub name: String,
    pub stars: u32,
    pub forks: u32,
    pub last_updated: DateTime<Utc>,
}

/// The external response shape. Keys serialize in camelCase, timestamps as
/// ISO-8601, absent values as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    pub username: String,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub primary_languages: Vec<LanguageShare>,
    pub total_commits: u64,
    pub most_active_repos: Vec<ActiveRepo>,
    pub recent_activity: RecentActivity,
    pub is_active: bool,
    pub skill_level: SkillLevel,
}

impl From<&ProfileAnalysis> for ProfileReport {
    fn from(analysis: &ProfileAnalysis) -> Self {
        Self {
            username: analysis.profile.login.clone(),
            avatar_url: analysis.profile.avatar_url.clone(),
            bio: analysis.profile.bio.clone(),
            public_repos: analysis.profile.public_repos,
            followers: analysis.profile.followers,
            following: analysis.profile.following,
            primary_languages: analysis.primary_languages.clone(),
            total_commits: analysis.total_commits,
            most_active_repos: analysis
                .most_active_repos
                .iter()
                .map(|repo| ActiveRepo {
                    name: repo.name.clone(),
                    stars: repo.stars,
                    forks: repo.forks,
                    last_updated: repo.updated_at,
                })
                .collect(),
            recent_activity: analysis.recent_activity.clone(),
            is_active: analysis.is_active,
            skill_level: analysis.skill_level,
        }
    }
}
