//! Configuration types for test data generation.

use serde::{Deserialize, Serialize};

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of weeks of history to generate, ending today.
    pub weeks: usize,

    /// Number of runs per week (range).
    pub runs_per_week: (usize, usize),

    /// Base URL of the runlog server.
    pub base_url: String,

    /// Random seed for reproducible histories.
    pub seed: u64,

    /// Whether to delete existing runs before uploading.
    pub clear_existing: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            weeks: 26,
            runs_per_week: (2, 5),
            base_url: "http://localhost:3001".to_string(),
            seed: 12345,
            clear_existing: true,
        }
    }
}

impl SeedConfig {
    /// Reads overrides from `RUNLOG_URL`, `SEED_WEEKS` and `SEED`.
    ///
    /// Unparseable numbers fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            weeks: parse_env("SEED_WEEKS").unwrap_or(defaults.weeks),
            seed: parse_env("SEED").unwrap_or(defaults.seed),
            base_url: std::env::var("RUNLOG_URL").unwrap_or(defaults.base_url),
            ..defaults
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SeedConfig::default();
        assert_eq!(config.weeks, 26);
        assert_eq!(config.runs_per_week, (2, 5));
        assert_eq!(config.base_url, "http://localhost:3001");
        assert!(config.clear_existing);
    }
}
