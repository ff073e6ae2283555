use chrono::{DateTime, Duration, Utc};

use crate::analysis::scoring::{ScoringConfig, POPULAR_LANGUAGES};
use crate::models::analysis::{LanguageShare, ProfileAnalysis, RecentActivity, SkillLevel};
use crate::models::user::{GitHubUser, Repository};

/// Languages are sampled from only this many leading repositories.
pub const LANGUAGE_SAMPLE_REPOS: usize = 5;
/// At most this many language shares are reported.
pub const MAX_LANGUAGE_SHARES: usize = 5;
/// At most this many most-active repositories are reported.
pub const MAX_ACTIVE_REPOS: usize = 3;
/// An account with no update inside this window counts as inactive.
pub const ACCOUNT_ACTIVE_DAYS: i64 = 6 * 30;

/// Pure analysis over fetched profile data. Every routine takes the current
/// time as a parameter; recency-dependent results are only reproducible under
/// a pinned `now`.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    scoring: ScoringConfig,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            scoring: ScoringConfig::default(),
        }
    }

    pub fn with_scoring(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    /// Language distribution over the first [`LANGUAGE_SAMPLE_REPOS`]
    /// repositories in the order given, skipping repositories without a
    /// language. Each percentage is rounded independently; shares sort
    /// descending with ties left in first-encounter order. Empty when none of
    /// the sampled repositories carries a language.
    pub fn primary_languages(&self, repositories: &[Repository]) -> Vec<LanguageShare> {
        let mut counts: Vec<(String, u32)> = Vec::new();

        for repo in repositories.iter().take(LANGUAGE_SAMPLE_REPOS) {
            if let Some(language) = &repo.language {
                match counts.iter_mut().find(|(known, _)| known == language) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((language.clone(), 1)),
                }
            }
        }

        let total: u32 = counts.iter().map(|(_, count)| count).sum();
        if total == 0 {
            return Vec::new();
        }

        let mut shares: Vec<LanguageShare> = counts
            .into_iter()
            .map(|(language, count)| LanguageShare {
                language,
                percentage: (count as f64 / total as f64 * 100.0).round() as u32,
            })
            .collect();

        // Stable sort keeps equal percentages in counting order.
        shares.sort_by(|a, b| b.percentage.cmp(&a.percentage));
        shares.truncate(MAX_LANGUAGE_SHARES);
        shares
    }

    /// The up-to-[`MAX_ACTIVE_REPOS`] most recently updated repositories.
    ///
    /// Sorts the given slice in place (descending `updated_at`); callers
    /// keeping their own order must pass a copy.
    pub fn most_active_repos(&self, repositories: &mut [Repository]) -> Vec<Repository> {
        repositories.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        repositories.iter().take(MAX_ACTIVE_REPOS).cloned().collect()
    }

    /// Count of recently active repositories and the timestamp of the first
    /// active one in slice order. That is not necessarily the most recent
    /// one; [`Self::analyze_profile`] runs this after the most-active sort,
    /// where the two coincide.
    pub fn recent_activity(
        &self,
        repositories: &[Repository],
        now: DateTime<Utc>,
    ) -> RecentActivity {
        let active: Vec<&Repository> = repositories
            .iter()
            .filter(|repo| repo.is_recently_active(now))
            .collect();

        RecentActivity {
            active_repos_count: active.len() as u32,
            last_activity: active.first().map(|repo| repo.updated_at),
        }
    }

    /// False for an empty repository list; otherwise true iff the newest
    /// update is within the last [`ACCOUNT_ACTIVE_DAYS`] days.
    pub fn is_account_active(&self, repositories: &[Repository], now: DateTime<Utc>) -> bool {
        repositories
            .iter()
            .map(|repo| repo.updated_at)
            .max()
            .map(|last| last > now - Duration::days(ACCOUNT_ACTIVE_DAYS))
            .unwrap_or(false)
    }

    /// Additive point score over repository count, commit volume, stars,
    /// account age, and the already-computed language shares, thresholded
    /// top-down into a tier.
    pub fn estimate_skill_level(
        &self,
        repositories: &[Repository],
        languages: &[LanguageShare],
        total_commits: u64,
        profile: &GitHubUser,
        now: DateTime<Utc>,
    ) -> SkillLevel {
        let total_stars: u64 = repositories.iter().map(|repo| repo.stars as u64).sum();
        let has_popular_language = languages
            .iter()
            .any(|share| POPULAR_LANGUAGES.contains(&share.language.as_str()));

        let mut score = self.scoring.repo_count.score(repositories.len() as f64);
        score += self.scoring.total_commits.score(total_commits as f64);
        score += self.scoring.total_stars.score(total_stars as f64);
        score += self.scoring.account_age.score(profile.account_age_years(now));
        if has_popular_language {
            score += self.scoring.popular_language_bonus;
        }
        score += (languages.len() as f64).min(self.scoring.max_diversity_bonus);

        if score >= self.scoring.expert_threshold {
            SkillLevel::Expert
        } else if score >= self.scoring.advanced_threshold {
            SkillLevel::Advanced
        } else if score >= self.scoring.intermediate_threshold {
            SkillLevel::Intermediate
        } else {
            SkillLevel::Beginner
        }
    }

    /// Composes the routines above into one analysis record. Languages are
    /// sampled from the caller-supplied repository order; the most-active
    /// sort then reorders the collection before the activity checks run.
    pub fn analyze_profile(
        &self,
        profile: GitHubUser,
        mut repositories: Vec<Repository>,
        total_commits: u64,
        now: DateTime<Utc>,
    ) -> ProfileAnalysis {
        let primary_languages = self.primary_languages(&repositories);
        let most_active_repos = self.most_active_repos(&mut repositories);
        let recent_activity = self.recent_activity(&repositories, now);
        let is_active = self.is_account_active(&repositories, now);
        let skill_level = self.estimate_skill_level(
            &repositories,
            &primary_languages,
            total_commits,
            &profile,
            now,
        );

        ProfileAnalysis {
            profile,
            repositories,
            primary_languages,
            total_commits,
            most_active_repos,
            recent_activity,
            is_active,
            skill_level,
        }
    }
}
