//! Run history generation.

use rand::Rng;
use rand::seq::index;
use runlog::models::Run;
use serde::Serialize;
use time::{Date, Duration, OffsetDateTime, Time};

use crate::profiles::{AthleteProfile, RunnerProfile, sample_variance};

/// Shortest run the generator will produce, in kilometers.
const MIN_DISTANCE_KM: f64 = 1.0;

/// A generated run ready to be stored or uploaded.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedRun {
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub duration_minutes: u32,
    pub distance_km: f64,
}

impl GeneratedRun {
    /// Converts into a stored run with a fresh id.
    pub fn into_run(self) -> Run {
        Run::new(self.date, self.duration_minutes, self.distance_km)
    }
}

/// Generates weekly training histories from a runner profile.
pub struct RunGenerator {
    profile: Box<dyn AthleteProfile>,
    runs_per_week: (usize, usize),
}

impl Default for RunGenerator {
    fn default() -> Self {
        Self::new(RunnerProfile::default())
    }
}

impl RunGenerator {
    pub fn new(profile: impl AthleteProfile + 'static) -> Self {
        Self {
            profile: Box::new(profile),
            runs_per_week: (2, 5),
        }
    }

    /// Sets how many runs each week contains. Values are capped at 7.
    pub fn with_runs_per_week(mut self, min: usize, max: usize) -> Self {
        let max = max.min(7);
        self.runs_per_week = (min.min(max), max);
        self
    }

    /// Generates `weeks` weeks of runs ending on `end`, oldest first.
    ///
    /// Each week holds at most one run per day. Weeks are counted back
    /// from `end` in seven day blocks.
    pub fn generate(&self, weeks: usize, end: Date, rng: &mut impl Rng) -> Vec<GeneratedRun> {
        let (min, max) = self.runs_per_week;
        let mut runs = Vec::new();

        for week in 0..weeks {
            let week_end = end - Duration::weeks(week as i64);
            let count = rng.gen_range(min..=max);

            for offset in index::sample(rng, 7, count).into_iter() {
                let day = week_end - Duration::days(offset as i64);
                runs.push(self.generate_one(day, rng));
            }
        }

        runs.sort_by_key(|run| run.date);
        runs
    }

    /// Generates a single morning run on `day`.
    pub fn generate_one(&self, day: Date, rng: &mut impl Rng) -> GeneratedRun {
        let distance = self.profile.typical_distance_km() * sample_variance(&*self.profile, rng);
        // Quarter kilometer steps, like a watch rounds laps.
        let distance_km = ((distance * 4.0).round() / 4.0).max(MIN_DISTANCE_KM);

        let pace = self.profile.base_pace_min_per_km() * sample_variance(&*self.profile, rng);
        let duration_minutes = (distance_km * pace).round().max(1.0) as u32;

        let start = Time::from_hms(rng.gen_range(6..9), rng.gen_range(0..60), 0)
            .unwrap_or(Time::MIDNIGHT);

        GeneratedRun {
            date: day.with_time(start).assume_utc(),
            duration_minutes,
            distance_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;
    use time::macros::date;

    #[test]
    fn test_generate_is_sorted_and_bounded() {
        let mut rng = StdRng::seed_from_u64(12345);
        let end = date!(2025 - 12 - 01);
        let runs = RunGenerator::default().generate(8, end, &mut rng);

        assert!(runs.len() >= 8 * 2 && runs.len() <= 8 * 5);
        assert!(runs.windows(2).all(|w| w[0].date <= w[1].date));

        let oldest = end - Duration::days(8 * 7 - 1);
        assert!(
            runs.iter()
                .all(|run| oldest <= run.date.date() && run.date.date() <= end)
        );
    }

    #[test]
    fn test_one_run_per_day() {
        let mut rng = StdRng::seed_from_u64(1);
        let runs = RunGenerator::default()
            .with_runs_per_week(7, 7)
            .generate(4, date!(2025 - 06 - 30), &mut rng);

        let days: HashSet<Date> = runs.iter().map(|run| run.date.date()).collect();
        assert_eq!(runs.len(), 28);
        assert_eq!(days.len(), 28);
    }

    #[test]
    fn test_same_seed_same_history() {
        let end = date!(2025 - 12 - 01);
        let generator = RunGenerator::new(RunnerProfile::recreational());
        let a = generator.generate(4, end, &mut StdRng::seed_from_u64(99));
        let b = generator.generate(4, end, &mut StdRng::seed_from_u64(99));

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.date, y.date);
            assert_eq!(x.duration_minutes, y.duration_minutes);
            assert_eq!(x.distance_km, y.distance_km);
        }
    }

    #[test]
    fn test_distance_and_pace_are_plausible() {
        let mut rng = StdRng::seed_from_u64(5);
        let profile = RunnerProfile::default();
        let generator = RunGenerator::new(profile.clone());

        for _ in 0..200 {
            let run = generator.generate_one(date!(2025 - 01 - 01), &mut rng).into_run();
            assert!(run.distance_km >= MIN_DISTANCE_KM);
            assert_eq!((run.distance_km * 4.0).fract(), 0.0);
            assert!(run.distance_km <= profile.typical_distance_km() * 1.4 + 0.25);

            // Minute rounding can push pace slightly outside the variance clamp.
            let pace = run.pace();
            assert!(pace > profile.base_pace_min_per_km() * 0.6);
            assert!(pace < profile.base_pace_min_per_km() * 1.6);
        }
    }

    #[test]
    fn test_zero_weeks_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let runs = RunGenerator::default().generate(0, date!(2025 - 01 - 01), &mut rng);
        assert!(runs.is_empty());
    }
}
