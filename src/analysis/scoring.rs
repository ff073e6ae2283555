/// Languages whose presence among the primary shares earns the popularity
/// bonus.
pub const POPULAR_LANGUAGES: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "Go",
    "Rust",
    "TypeScript",
    "C++",
    "C#",
];

/// One scoring factor: descending `(threshold, points)` tiers, first tier
/// whose threshold the value exceeds wins; below every tier the value earns
/// `per_unit` points each, capped at `fallback_cap`.
#[derive(Debug, Clone)]
pub struct FactorTiers {
    pub tiers: &'static [(f64, f64)],
    pub per_unit: f64,
    pub fallback_cap: f64,
}

impl FactorTiers {
    pub fn score(&self, value: f64) -> f64 {
        for &(threshold, points) in self.tiers {
            if value > threshold {
                return points;
            }
        }
        (value * self.per_unit).min(self.fallback_cap)
    }
}

/// The whole classification rule as data, so tuning never touches the engine.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub repo_count: FactorTiers,
    pub total_commits: FactorTiers,
    pub total_stars: FactorTiers,
    pub account_age: FactorTiers,
    pub popular_language_bonus: f64,
    pub max_diversity_bonus: f64,
    pub expert_threshold: f64,
    pub advanced_threshold: f64,
    pub intermediate_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            // Up to 30 points.
            repo_count: FactorTiers {
                tiers: &[(50.0, 30.0), (20.0, 20.0), (10.0, 15.0), (5.0, 10.0)],
                per_unit: 2.0,
                fallback_cap: 10.0,
            },
            // Up to 25 points.
            total_commits: FactorTiers {
                tiers: &[(5000.0, 25.0), (1000.0, 20.0), (500.0, 15.0), (100.0, 10.0)],
                per_unit: 0.1,
                fallback_cap: 10.0,
            },
            // Up to 20 points.
            total_stars: FactorTiers {
                tiers: &[(1000.0, 20.0), (500.0, 15.0), (100.0, 10.0)],
                per_unit: 0.1,
                fallback_cap: 10.0,
            },
            // Up to 15 points.
            account_age: FactorTiers {
                tiers: &[(5.0, 15.0), (3.0, 10.0), (1.0, 5.0)],
                per_unit: 5.0,
                fallback_cap: 5.0,
            },
            popular_language_bonus: 5.0,
            max_diversity_bonus: 5.0,
            expert_threshold: 80.0,
            advanced_threshold: 50.0,
            intermediate_threshold: 25.0,
        }
    }
}
