//! Demo run history, useful for local development and tests.

use time::{Date, Month, OffsetDateTime, Time};

use crate::models::Run;

const DEMO_HISTORY: [(i32, Month, u8, u32, f64); 11] = [
    (2025, Month::December, 1, 45, 8.0),
    (2025, Month::November, 29, 60, 10.0),
    (2025, Month::November, 26, 30, 5.0),
    (2025, Month::November, 20, 90, 15.0),
    (2025, Month::November, 17, 50, 9.0),
    (2025, Month::November, 10, 55, 10.0),
    (2025, Month::November, 5, 40, 7.0),
    (2025, Month::October, 25, 120, 21.0),
    (2025, Month::October, 15, 60, 11.0),
    (2025, Month::October, 5, 45, 8.5),
    (2025, Month::September, 15, 45, 7.0),
];

/// Eleven runs between mid-September and the 1st of December 2025, newest
/// first, each dated at midnight UTC.
pub fn demo_runs() -> Vec<Run> {
    DEMO_HISTORY
        .iter()
        .filter_map(|&(year, month, day, duration_minutes, distance_km)| {
            let date = Date::from_calendar_date(year, month, day).ok()?;
            Some(Run::new(
                date.midnight().assume_utc(),
                duration_minutes,
                distance_km,
            ))
        })
        .collect()
}

/// The demo history with every date shifted so the newest run lands on
/// `today`'s date.
pub fn demo_runs_ending(today: OffsetDateTime) -> Vec<Run> {
    let runs = demo_runs();
    let Some(newest) = runs.first().map(|run| run.date) else {
        return runs;
    };
    let shift = today.replace_time(Time::MIDNIGHT) - newest;
    runs.into_iter()
        .map(|run| Run {
            date: run.date + shift,
            ..run
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_demo_runs() {
        let runs = demo_runs();
        assert_eq!(runs.len(), 11);
        assert!(runs.windows(2).all(|w| w[0].date > w[1].date));
        assert_eq!(runs[0].date, datetime!(2025-12-01 0:00 UTC));
    }

    #[test]
    fn test_demo_runs_ending() {
        let runs = demo_runs_ending(datetime!(2026-03-10 15:45 UTC));
        assert_eq!(runs[0].date, datetime!(2026-03-10 0:00 UTC));
        assert_eq!(runs[1].date, datetime!(2026-03-08 0:00 UTC));
        assert_eq!(runs.len(), 11);
    }
}
