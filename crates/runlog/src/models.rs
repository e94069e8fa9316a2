use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, macros::format_description};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::format::{format_distance, format_duration, format_pace};

/// A single logged run.
///
/// Only date, duration and distance are stored. Pace is derived on every
/// read so it always agrees with the current duration and distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Run {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub duration_minutes: u32,
    pub distance_km: f64,
}

impl Run {
    pub fn new(date: OffsetDateTime, duration_minutes: u32, distance_km: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            duration_minutes,
            distance_km,
        }
    }

    /// Minutes per kilometer, or `0.0` when no distance was covered.
    pub fn pace(&self) -> f64 {
        if self.distance_km > 0.0 {
            f64::from(self.duration_minutes) / self.distance_km
        } else {
            0.0
        }
    }

    /// Applies a partial edit. The id never changes.
    pub fn apply(&mut self, update: UpdateRunRequest) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(duration_minutes) = update.duration_minutes {
            self.duration_minutes = duration_minutes;
        }
        if let Some(distance_km) = update.distance_km {
            self.distance_km = distance_km;
        }
    }

    /// Short calendar date used by the history list, e.g. `01/12/2025`.
    pub fn date_label(&self) -> String {
        self.date
            .format(format_description!("[day]/[month]/[year]"))
            .unwrap_or_default()
    }
}

/// Request body for logging a new run.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewRunRequest {
    /// Defaults to the current time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    #[validate(range(max = 10_000, message = "Duration must be at most 10000 minutes"))]
    pub duration_minutes: u32,
    #[validate(range(
        min = 0.0,
        max = 1000.0,
        message = "Distance must be between 0 and 1000 km"
    ))]
    pub distance_km: f64,
}

impl NewRunRequest {
    pub fn into_run(self) -> Run {
        let date = self.date.unwrap_or_else(OffsetDateTime::now_utc);
        Run::new(date, self.duration_minutes, self.distance_km)
    }
}

/// Partial edit of an existing run.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateRunRequest {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    #[validate(range(max = 10_000, message = "Duration must be at most 10000 minutes"))]
    pub duration_minutes: Option<u32>,
    #[validate(range(
        min = 0.0,
        max = 1000.0,
        message = "Distance must be between 0 and 1000 km"
    ))]
    pub distance_km: Option<f64>,
}

/// A run as shown in the history list, with display strings attached.
#[derive(Debug, Serialize, ToSchema)]
pub struct RunEntry {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub duration_minutes: u32,
    pub distance_km: f64,
    pub pace: f64,
    pub date_label: String,
    pub distance_display: String,
    pub duration_display: String,
    pub pace_display: String,
}

impl From<&Run> for RunEntry {
    fn from(run: &Run) -> Self {
        let pace = run.pace();
        Self {
            id: run.id,
            date: run.date,
            duration_minutes: run.duration_minutes,
            distance_km: run.distance_km,
            pace,
            date_label: run.date_label(),
            distance_display: format_distance(run.distance_km),
            duration_display: format_duration(f64::from(run.duration_minutes)),
            pace_display: format_pace(pace),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_pace_is_minutes_per_km() {
        let run = Run::new(datetime!(2025-12-01 0:00 UTC), 60, 10.0);
        assert!((run.pace() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_distance_pace_is_zero() {
        let run = Run::new(datetime!(2025-12-01 0:00 UTC), 30, 0.0);
        assert_eq!(run.pace(), 0.0);
        assert!(run.pace().is_finite());
    }

    #[test]
    fn test_pace_follows_edits() {
        let mut run = Run::new(datetime!(2025-12-01 0:00 UTC), 30, 5.0);
        let id = run.id;
        run.apply(UpdateRunRequest {
            distance_km: Some(6.0),
            ..Default::default()
        });
        assert_eq!(run.id, id);
        assert!((run.pace() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_history_entry_display() {
        let run = Run::new(datetime!(2025-11-26 7:30 UTC), 30, 5.0);
        let entry = RunEntry::from(&run);
        assert_eq!(entry.date_label, "26/11/2025");
        assert_eq!(entry.distance_display, "5.00");
        assert_eq!(entry.duration_display, "00:30");
        assert_eq!(entry.pace_display, "06:00");
    }

    #[test]
    fn test_new_run_validation() {
        let ok = NewRunRequest {
            date: None,
            duration_minutes: 45,
            distance_km: 8.0,
        };
        assert!(ok.validate().is_ok());

        let negative = NewRunRequest {
            date: None,
            duration_minutes: 45,
            distance_km: -1.0,
        };
        assert!(negative.validate().is_err());
    }
}
