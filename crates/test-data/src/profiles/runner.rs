//! Runner athletic profile.

use super::AthleteProfile;

/// Athletic profile for a runner logging regular training runs.
///
/// Defaults describe a club runner:
/// - Easy pace: ~5:30/km
/// - Typical run: ~8 km
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Easy pace in minutes per kilometer.
    base_pace: f64,
    /// Typical run distance in kilometers.
    typical_distance: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            base_pace: 5.5,
            typical_distance: 8.0,
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a new runner profile with specified base pace.
    ///
    /// # Arguments
    /// * `pace_min_per_km` - Base pace in minutes per kilometer (e.g., 5.0 for 5:00/km)
    pub fn with_pace(pace_min_per_km: f64) -> Self {
        Self {
            base_pace: pace_min_per_km,
            ..Default::default()
        }
    }

    pub fn with_distance(self, typical_distance_km: f64) -> Self {
        Self {
            typical_distance: typical_distance_km,
            ..self
        }
    }

    pub fn with_variance(self, variance: f64) -> Self {
        Self { variance, ..self }
    }

    /// Creates an elite runner profile (~3:30/km, 14 km runs).
    pub fn elite() -> Self {
        Self::with_pace(3.5).with_distance(14.0)
    }

    /// Creates a recreational runner profile (~6:30/km, 5 km runs).
    pub fn recreational() -> Self {
        Self::with_pace(6.5).with_distance(5.0).with_variance(0.12)
    }
}

impl AthleteProfile for RunnerProfile {
    fn base_pace_min_per_km(&self) -> f64 {
        self.base_pace
    }

    fn typical_distance_km(&self) -> f64 {
        self.typical_distance
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
