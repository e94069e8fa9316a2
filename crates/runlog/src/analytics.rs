//! Windowed run analytics: the visible subset of runs for a selection, the
//! chart baseline and summary statistics.
//!
//! Every function here is pure. The caller owns the [`Selection`] and passes
//! it in on each call; nothing is cached between calls.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    metrics::{Metric, Polarity},
    models::Run,
    window::{Granularity, TimeWindow, can_move_forward, date_range_label, start_date},
};

/// Shown in place of a statistic when there is nothing to compute it from.
pub const NO_DATA: &str = "N/A";

/// Headroom added above the slowest pace for the area chart baseline.
pub const PACE_BASELINE_MARGIN: f64 = 0.5;

/// What the user is currently looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Selection {
    pub metric: Metric,
    pub window: TimeWindow,
}

impl Selection {
    pub fn new(metric: Metric, window: TimeWindow) -> Self {
        Self { metric, window }
    }
}

/// Runs dated within the window, oldest first.
///
/// Runs sharing a timestamp keep their input order. An unrepresentable
/// window start yields no runs.
pub fn filtered_runs<'a>(runs: &'a [Run], window: &TimeWindow) -> Vec<&'a Run> {
    let Some(start) = start_date(window) else {
        return Vec::new();
    };
    let mut visible: Vec<&Run> = runs
        .iter()
        .filter(|run| start <= run.date && run.date <= window.reference_date)
        .collect();
    visible.sort_by_key(|run| run.date);
    visible
}

/// Value the chart's filled area is drawn against.
///
/// Pace is plotted on a reversed axis, so its area hangs from just past the
/// slowest visible pace instead of from zero.
pub fn chart_baseline<'a>(runs: impl IntoIterator<Item = &'a Run>, metric: Metric) -> f64 {
    match metric {
        Metric::Pace => {
            let slowest = runs.into_iter().map(Run::pace).reduce(f64::max);
            slowest.unwrap_or(0.0) + PACE_BASELINE_MARGIN
        }
        Metric::Distance | Metric::Duration => 0.0,
    }
}

/// Average, best and last value of a metric over a sequence of runs.
///
/// `None` means the sequence was empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
pub struct Summary {
    pub count: usize,
    pub average: Option<f64>,
    pub best: Option<f64>,
    pub last: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FormattedSummary {
    pub average: String,
    pub best: String,
    pub last: String,
}

impl Summary {
    pub fn formatted(&self, metric: Metric) -> FormattedSummary {
        let show = |value: Option<f64>| {
            value.map_or_else(|| NO_DATA.to_string(), |v| metric.format(v))
        };
        FormattedSummary {
            average: show(self.average),
            best: show(self.best),
            last: show(self.last),
        }
    }
}

/// Summarises `runs` for `metric`. "Last" is the final element of the
/// sequence as given, so pass runs already sorted by date.
pub fn aggregate<'a>(runs: impl IntoIterator<Item = &'a Run>, metric: Metric) -> Summary {
    let polarity: Polarity = metric.polarity();
    let mut summary = Summary::default();
    let mut total = 0.0;

    for run in runs {
        let value = metric.value(run);
        total += value;
        summary.count += 1;
        summary.best = Some(summary.best.map_or(value, |best| polarity.best(best, value)));
        summary.last = Some(value);
    }

    if summary.count > 0 {
        summary.average = Some(total / summary.count as f64);
    }
    summary
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MetricInfo {
    pub metric: Metric,
    pub label: String,
    pub unit: String,
    pub color: String,
    pub polarity: Polarity,
    pub reversed_axis: bool,
}

impl From<Metric> for MetricInfo {
    fn from(metric: Metric) -> Self {
        Self {
            metric,
            label: metric.label().to_string(),
            unit: metric.unit().to_string(),
            color: metric.color().to_string(),
            polarity: metric.polarity(),
            reversed_axis: metric.reversed_axis(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WindowInfo {
    pub granularity: Granularity,
    #[serde(with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub reference_date: OffsetDateTime,
    pub label: String,
    pub can_move_forward: bool,
}

impl WindowInfo {
    pub fn new(window: &TimeWindow, now: OffsetDateTime) -> Self {
        Self {
            granularity: window.granularity,
            start_date: start_date(window),
            reference_date: window.reference_date,
            label: date_range_label(window),
            can_move_forward: can_move_forward(window, now),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartPoint {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub value: f64,
    pub display: String,
    /// Value followed by its unit, e.g. `05:38 min/km`.
    pub tooltip: String,
    pub axis_label: String,
}

/// Everything needed to draw the chart and stats for one selection.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartView {
    pub metric: MetricInfo,
    pub window: WindowInfo,
    pub baseline: f64,
    pub points: Vec<ChartPoint>,
    pub summary: Summary,
    pub display: FormattedSummary,
}

impl ChartView {
    pub fn build(runs: &[Run], selection: &Selection, now: OffsetDateTime) -> Self {
        let metric = selection.metric;
        let visible = filtered_runs(runs, &selection.window);
        let summary = aggregate(visible.iter().copied(), metric);

        debug!(
            ?metric,
            granularity = ?selection.window.granularity,
            total = runs.len(),
            visible = visible.len(),
            "Built chart view"
        );

        Self {
            metric: MetricInfo::from(metric),
            window: WindowInfo::new(&selection.window, now),
            baseline: chart_baseline(visible.iter().copied(), metric),
            points: visible
                .iter()
                .map(|run| {
                    let value = metric.value(run);
                    ChartPoint {
                        id: run.id,
                        date: run.date,
                        value,
                        display: metric.format(value),
                        tooltip: metric.display(value),
                        axis_label: metric.axis_label(value),
                    }
                })
                .collect(),
            display: summary.formatted(metric),
            summary,
        }
    }
}
