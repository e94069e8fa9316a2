//! Chartable run metrics.
//!
//! The set of metrics is closed. Everything that differs between them
//! (extraction, unit, polarity, formatting) lives in one behaviour table
//! keyed by [`Metric`].

use std::sync::LazyLock;

use enum_map::{Enum, EnumMap, enum_map};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    format::{format_distance, format_duration, format_pace},
    models::Run,
};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Enum, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Distance,
    Duration,
    Pace,
}

/// Which direction of a metric counts as an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

impl Polarity {
    /// Picks the better of two values.
    pub fn best(self, a: f64, b: f64) -> f64 {
        match self {
            Polarity::HigherIsBetter => a.max(b),
            Polarity::LowerIsBetter => a.min(b),
        }
    }
}

/// Per-metric behaviour.
pub struct MetricSpec {
    pub label: &'static str,
    pub unit: &'static str,
    /// Presentation hint only.
    pub color: &'static str,
    pub polarity: Polarity,
    value: fn(&Run) -> f64,
    format: fn(f64) -> String,
}

static METRICS: LazyLock<EnumMap<Metric, MetricSpec>> = LazyLock::new(|| {
    enum_map! {
        Metric::Distance => MetricSpec {
            label: "Distance",
            unit: "km",
            color: "blue",
            polarity: Polarity::HigherIsBetter,
            value: |run| run.distance_km,
            format: format_distance,
        },
        Metric::Duration => MetricSpec {
            label: "Duration",
            unit: "min",
            color: "green",
            polarity: Polarity::HigherIsBetter,
            value: |run| f64::from(run.duration_minutes),
            format: format_duration,
        },
        Metric::Pace => MetricSpec {
            label: "Pace",
            unit: "min/km",
            color: "orange",
            polarity: Polarity::LowerIsBetter,
            value: Run::pace,
            format: format_pace,
        },
    }
});

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Distance, Metric::Duration, Metric::Pace];

    pub fn spec(self) -> &'static MetricSpec {
        &METRICS[self]
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn unit(self) -> &'static str {
        self.spec().unit
    }

    pub fn color(self) -> &'static str {
        self.spec().color
    }

    pub fn polarity(self) -> Polarity {
        self.spec().polarity
    }

    pub fn value(self, run: &Run) -> f64 {
        (self.spec().value)(run)
    }

    /// Formats a value without its unit, e.g. `05:30` for a pace.
    pub fn format(self, value: f64) -> String {
        (self.spec().format)(value)
    }

    /// Formats a value followed by its unit.
    pub fn display(self, value: f64) -> String {
        format!("{} {}", self.format(value), self.unit())
    }

    /// Y-axis tick label.
    pub fn axis_label(self, value: f64) -> String {
        match self {
            Metric::Pace => format_pace(value),
            _ => format!("{value:.1} {}", self.unit()),
        }
    }

    /// Lower-is-better metrics are charted with the axis flipped so that
    /// improvement always points up.
    pub fn reversed_axis(self) -> bool {
        self.polarity() == Polarity::LowerIsBetter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn run() -> Run {
        Run::new(datetime!(2025-12-01 0:00 UTC), 45, 8.0)
    }

    #[test]
    fn test_extraction() {
        let run = run();
        assert_eq!(Metric::Distance.value(&run), 8.0);
        assert_eq!(Metric::Duration.value(&run), 45.0);
        assert!((Metric::Pace.value(&run) - 5.625).abs() < 1e-9);
    }

    #[test]
    fn test_polarity() {
        assert_eq!(Metric::Distance.polarity(), Polarity::HigherIsBetter);
        assert_eq!(Metric::Duration.polarity(), Polarity::HigherIsBetter);
        assert_eq!(Metric::Pace.polarity(), Polarity::LowerIsBetter);
        assert_eq!(Polarity::LowerIsBetter.best(5.0, 4.5), 4.5);
        assert_eq!(Polarity::HigherIsBetter.best(5.0, 4.5), 5.0);
    }

    #[test]
    fn test_format_and_display() {
        assert_eq!(Metric::Duration.format(125.0), "02:05");
        assert_eq!(Metric::Pace.format(5.5), "05:30");
        assert_eq!(Metric::Distance.format(10.0), "10.00");
        assert_eq!(Metric::Distance.display(10.0), "10.00 km");
        assert_eq!(Metric::Pace.display(5.5), "05:30 min/km");
    }

    #[test]
    fn test_axis() {
        assert!(Metric::Pace.reversed_axis());
        assert!(!Metric::Distance.reversed_axis());
        assert_eq!(Metric::Pace.axis_label(6.25), "06:15");
        assert_eq!(Metric::Duration.axis_label(30.0), "30.0 min");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Metric::Pace).unwrap(), "\"pace\"");
        let metric: Metric = serde_json::from_str("\"duration\"").unwrap();
        assert_eq!(metric, Metric::Duration);
    }
}
