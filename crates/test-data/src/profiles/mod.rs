//! Athletic performance profiles.
//!
//! Profiles define a runner's typical pace and distance and how much those
//! vary from day to day. Generators sample from them to produce believable
//! run histories.

mod runner;

pub use runner::RunnerProfile;

/// Trait for athletic performance profiles.
pub trait AthleteProfile: Send + Sync {
    /// Typical pace on an easy day, in minutes per kilometer.
    fn base_pace_min_per_km(&self) -> f64;

    /// Typical distance of a single run, in kilometers.
    fn typical_distance_km(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    ///
    /// A value of 0.1 means typical day-to-day variation of ±10%.
    fn variance(&self) -> f64;
}

/// Samples a variance factor from a normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    match Normal::new(1.0, profile.variance()) {
        Ok(normal) if profile.variance() > 0.0 => {
            let sample: f64 = normal.sample(rng);
            sample.clamp(0.7, 1.4)
        }
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_variance_is_clamped() {
        let profile = RunnerProfile::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let factor = sample_variance(&profile, &mut rng);
            assert!((0.7..=1.4).contains(&factor));
        }
    }

    #[test]
    fn test_zero_variance_is_identity() {
        let profile = RunnerProfile::default().with_variance(0.0);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample_variance(&profile, &mut rng), 1.0);
    }
}
