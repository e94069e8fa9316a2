//! Navigable time windows.
//!
//! A window is a granularity plus a reference date marking its (inclusive)
//! end. All calendar arithmetic is done in the reference date's own offset
//! and keeps its time of day.

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, OffsetDateTime, macros::format_description};
use tracing::warn;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    #[default]
    Week,
    Month,
    ThreeMonths,
    SixMonths,
    Year,
}

/// A calendar-aware amount of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarStep {
    Days(i64),
    Months(i32),
}

impl CalendarStep {
    /// Applies the step `times` times (negative goes back in time).
    ///
    /// Month steps clamp the day to the target month's length, so Jan 31
    /// plus one month lands on the last day of February.
    pub fn apply(self, from: OffsetDateTime, times: i32) -> Option<OffsetDateTime> {
        match self {
            CalendarStep::Days(days) => {
                let days = days.checked_mul(i64::from(times))?;
                from.checked_add(Duration::days(days))
            }
            CalendarStep::Months(months) => add_months(from, months.checked_mul(times)?),
        }
    }
}

fn add_months(from: OffsetDateTime, months: i32) -> Option<OffsetDateTime> {
    let date = from.date();
    let index = date
        .year()
        .checked_mul(12)?
        .checked_add(i32::from(u8::from(date.month())) - 1)?
        .checked_add(months)?;
    let year = index.div_euclid(12);
    let month = Month::try_from(u8::try_from(index.rem_euclid(12) + 1).ok()?).ok()?;
    let day = date.day().min(time::util::days_in_year_month(year, month));
    let target = Date::from_calendar_date(year, month, day).ok()?;
    Some(from.replace_date(target))
}

impl Granularity {
    pub const ALL: [Granularity; 5] = [
        Granularity::Week,
        Granularity::Month,
        Granularity::ThreeMonths,
        Granularity::SixMonths,
        Granularity::Year,
    ];

    /// The navigation step for this granularity.
    pub fn step(self) -> CalendarStep {
        match self {
            Granularity::Week => CalendarStep::Days(7),
            Granularity::Month => CalendarStep::Months(1),
            Granularity::ThreeMonths => CalendarStep::Months(3),
            Granularity::SixMonths => CalendarStep::Months(6),
            Granularity::Year => CalendarStep::Months(12),
        }
    }

    /// How far the window's start lies before its reference date.
    ///
    /// A week reaches back six days so that the reference day itself makes
    /// the seventh; every other granularity reaches back a full step.
    pub fn span(self) -> CalendarStep {
        match self {
            Granularity::Week => CalendarStep::Days(6),
            other => other.step(),
        }
    }
}

/// Navigation direction for [`move_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn signum(self) -> i32 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeWindow {
    pub granularity: Granularity,
    #[serde(with = "time::serde::rfc3339")]
    pub reference_date: OffsetDateTime,
}

impl TimeWindow {
    pub fn new(granularity: Granularity, reference_date: OffsetDateTime) -> Self {
        Self {
            granularity,
            reference_date,
        }
    }

    pub fn ending_now(granularity: Granularity) -> Self {
        Self::new(granularity, OffsetDateTime::now_utc())
    }

    pub fn start_date(&self) -> Option<OffsetDateTime> {
        start_date(self)
    }

    /// Whether `date` falls inside `[start_date, reference_date]`.
    pub fn contains(&self, date: OffsetDateTime) -> bool {
        self.start_date()
            .is_some_and(|start| start <= date && date <= self.reference_date)
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::ending_now(Granularity::default())
    }
}

/// First instant of the window, or `None` if the calendar arithmetic
/// overflows.
pub fn start_date(window: &TimeWindow) -> Option<OffsetDateTime> {
    window.granularity.span().apply(window.reference_date, -1)
}

/// Shifts the reference date one full step in `direction`.
///
/// Does not stop at the present; see [`can_move_forward`]. If the new date
/// cannot be represented the window comes back unchanged.
pub fn move_window(window: TimeWindow, direction: Direction) -> TimeWindow {
    match window
        .granularity
        .step()
        .apply(window.reference_date, direction.signum())
    {
        Some(reference_date) => TimeWindow {
            reference_date,
            ..window
        },
        None => {
            warn!(
                granularity = ?window.granularity,
                reference_date = %window.reference_date,
                ?direction,
                "Window move overflowed the calendar, keeping current window"
            );
            window
        }
    }
}

/// Whether a forward move should be offered, i.e. the window does not
/// already end at or after `now`.
pub fn can_move_forward(window: &TimeWindow, now: OffsetDateTime) -> bool {
    window.reference_date < now
}

/// Short label for the window, e.g. `25 Nov - 01 Dec` for a week.
pub fn date_range_label(window: &TimeWindow) -> String {
    let Some(start) = start_date(window) else {
        return String::new();
    };
    let reference = window.reference_date;

    let label = match window.granularity {
        Granularity::Week => {
            let fmt = format_description!("[day] [month repr:short]");
            start
                .format(fmt)
                .and_then(|s| Ok(format!("{s} - {}", reference.format(fmt)?)))
        }
        Granularity::Month => reference.format(format_description!("[month repr:short] [year]")),
        Granularity::ThreeMonths | Granularity::SixMonths => {
            let fmt = format_description!("[month repr:short] [year]");
            start
                .format(fmt)
                .and_then(|s| Ok(format!("{s} - {}", reference.format(fmt)?)))
        }
        Granularity::Year => reference.format(format_description!("[year]")),
    };

    label.unwrap_or_else(|e| {
        warn!("Failed to format window label: {e}");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn window(granularity: Granularity, reference: OffsetDateTime) -> TimeWindow {
        TimeWindow::new(granularity, reference)
    }

    #[test]
    fn test_week_start_is_inclusive() {
        let w = window(Granularity::Week, datetime!(2025-12-01 0:00 UTC));
        assert_eq!(start_date(&w), Some(datetime!(2025-11-25 0:00 UTC)));
    }

    #[test]
    fn test_month_based_starts() {
        let reference = datetime!(2025-12-01 8:15 UTC);
        assert_eq!(
            start_date(&window(Granularity::Month, reference)),
            Some(datetime!(2025-11-01 8:15 UTC))
        );
        assert_eq!(
            start_date(&window(Granularity::ThreeMonths, reference)),
            Some(datetime!(2025-09-01 8:15 UTC))
        );
        assert_eq!(
            start_date(&window(Granularity::SixMonths, reference)),
            Some(datetime!(2025-06-01 8:15 UTC))
        );
        assert_eq!(
            start_date(&window(Granularity::Year, reference)),
            Some(datetime!(2024-12-01 8:15 UTC))
        );
    }

    #[test]
    fn test_month_end_clamps() {
        let w = window(Granularity::Month, datetime!(2025-03-31 0:00 UTC));
        assert_eq!(start_date(&w), Some(datetime!(2025-02-28 0:00 UTC)));

        let leap = window(Granularity::Year, datetime!(2024-02-29 0:00 UTC));
        assert_eq!(start_date(&leap), Some(datetime!(2023-02-28 0:00 UTC)));

        let into_leap = window(Granularity::Month, datetime!(2024-03-31 0:00 UTC));
        assert_eq!(start_date(&into_leap), Some(datetime!(2024-02-29 0:00 UTC)));

        let thirty = window(Granularity::ThreeMonths, datetime!(2025-07-31 0:00 UTC));
        assert_eq!(start_date(&thirty), Some(datetime!(2025-04-30 0:00 UTC)));
    }

    #[test]
    fn test_start_date_keeps_offset() {
        let w = window(Granularity::Month, datetime!(2025-01-15 23:00 -3));
        assert_eq!(start_date(&w), Some(datetime!(2024-12-15 23:00 -3)));
    }

    #[test]
    fn test_move_week_uses_full_step() {
        let w = window(Granularity::Week, datetime!(2025-12-01 0:00 UTC));
        let back = move_window(w, Direction::Backward);
        assert_eq!(back.reference_date, datetime!(2025-11-24 0:00 UTC));
        assert_eq!(back.granularity, Granularity::Week);
        let forward = move_window(back, Direction::Forward);
        assert_eq!(forward.reference_date, w.reference_date);
    }

    #[test]
    fn test_move_round_trip_mid_month() {
        let reference = datetime!(2025-06-15 12:00 UTC);
        for granularity in Granularity::ALL {
            let w = window(granularity, reference);
            let there = move_window(w, Direction::Forward);
            let back = move_window(there, Direction::Backward);
            assert_eq!(back.reference_date, reference, "{granularity:?}");
        }
    }

    #[test]
    fn test_move_drifts_at_month_end() {
        let w = window(Granularity::Month, datetime!(2025-01-31 0:00 UTC));
        let forward = move_window(w, Direction::Forward);
        assert_eq!(forward.reference_date, datetime!(2025-02-28 0:00 UTC));
        let back = move_window(forward, Direction::Backward);
        assert_eq!(back.reference_date, datetime!(2025-01-28 0:00 UTC));
    }

    #[test]
    fn test_move_does_not_clamp_at_now() {
        let now = OffsetDateTime::now_utc();
        let w = window(Granularity::Year, now);
        let forward = move_window(w, Direction::Forward);
        assert!(forward.reference_date > now);
        assert!(!can_move_forward(&w, now));
        assert!(can_move_forward(&move_window(w, Direction::Backward), now));
    }

    #[test]
    fn test_overflow_degrades() {
        let max = Date::MAX.midnight().assume_utc();
        let w = window(Granularity::Year, max);
        assert_eq!(move_window(w, Direction::Forward), w);

        let min = Date::MIN.midnight().assume_utc();
        let w = window(Granularity::Month, min);
        assert_eq!(start_date(&w), None);
        assert!(!w.contains(min));
        assert_eq!(date_range_label(&w), "");
    }

    #[test]
    fn test_labels() {
        let reference = datetime!(2025-12-01 0:00 UTC);
        assert_eq!(
            date_range_label(&window(Granularity::Week, reference)),
            "25 Nov - 01 Dec"
        );
        assert_eq!(
            date_range_label(&window(Granularity::Month, reference)),
            "Dec 2025"
        );
        assert_eq!(
            date_range_label(&window(Granularity::ThreeMonths, reference)),
            "Sep 2025 - Dec 2025"
        );
        assert_eq!(
            date_range_label(&window(Granularity::SixMonths, reference)),
            "Jun 2025 - Dec 2025"
        );
        assert_eq!(
            date_range_label(&window(Granularity::Year, reference)),
            "2025"
        );
    }

    #[test]
    fn test_contains_bounds() {
        let w = window(Granularity::Week, datetime!(2025-12-01 0:00 UTC));
        assert!(w.contains(datetime!(2025-11-25 0:00 UTC)));
        assert!(w.contains(datetime!(2025-12-01 0:00 UTC)));
        assert!(!w.contains(datetime!(2025-11-24 0:00 UTC)));
        assert!(!w.contains(datetime!(2025-12-01 0:01 UTC)));
    }
}
