use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::common::Dated;

/// Period selector driving every dashboard view filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Week,
    Month,
    Year,
    Custom { month: u32, year: i32 },
}

/// A resolved filtering window.
///
/// `Today` compares by calendar-date equality rather than instant
/// containment, so the time of day on either side never matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodWindow {
    CalendarDay(NaiveDate),
    /// Closed-inclusive instant range.
    Range {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl PeriodWindow {
    /// Computes the window for `period` relative to the injected reference
    /// instant. Returns `None` only for an unusable custom selector, which
    /// downstream aggregation treats as an empty window rather than an
    /// error.
    ///
    /// Week and month windows are capped at `now` while the year window
    /// runs through December 31st. The asymmetry is carried over from the
    /// production dashboard on purpose; see the regression tests before
    /// unifying it.
    pub fn resolve(period: Period, now: NaiveDateTime) -> Option<PeriodWindow> {
        let today = now.date();
        match period {
            Period::Today => Some(PeriodWindow::CalendarDay(today)),
            Period::Week => {
                // Week starts on Sunday.
                let back = today.weekday().num_days_from_sunday() as i64;
                let start = (today - Duration::days(back)).and_time(NaiveTime::MIN);
                Some(PeriodWindow::Range { start, end: now })
            }
            Period::Month => {
                let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
                    .unwrap_or(today);
                Some(PeriodWindow::Range {
                    start: first.and_time(NaiveTime::MIN),
                    end: now,
                })
            }
            Period::Year => {
                let start = NaiveDate::from_ymd_opt(today.year(), 1, 1)
                    .unwrap_or(today)
                    .and_time(NaiveTime::MIN);
                let end = NaiveDate::from_ymd_opt(today.year(), 12, 31)
                    .unwrap_or(today)
                    .and_time(end_of_day());
                Some(PeriodWindow::Range { start, end })
            }
            Period::Custom { month, year } => {
                if !(1..=12).contains(&month) {
                    return None;
                }
                let first = NaiveDate::from_ymd_opt(year, month, 1)?;
                let last = last_day_of_month(year, month);
                Some(PeriodWindow::Range {
                    start: first.and_time(NaiveTime::MIN),
                    end: last.and_time(end_of_day()),
                })
            }
        }
    }

    /// Whether a record's calendar date falls inside this window. Record
    /// dates carry no time of day, so ranged windows test the date's
    /// midnight instant.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            PeriodWindow::CalendarDay(day) => date == *day,
            PeriodWindow::Range { start, end } => {
                let instant = date.and_time(NaiveTime::MIN);
                *start <= instant && instant <= *end
            }
        }
    }
}

/// Whether a single record falls inside the given period. Records with no
/// filterable date are excluded unconditionally.
pub fn is_in_period<T: Dated + ?Sized>(record: &T, period: Period, now: NaiveDateTime) -> bool {
    let Some(window) = PeriodWindow::resolve(period, now) else {
        return false;
    };
    match record.filter_date() {
        Some(date) => window.contains(date),
        None => false,
    }
}

/// Returns the subset of `records` whose filter date falls in the period.
pub fn filter_by_period<T: Dated>(
    records: &[T],
    period: Period,
    now: NaiveDateTime,
) -> Vec<&T> {
    records
        .iter()
        .filter(|record| is_in_period(*record, period, now))
        .collect()
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap())
        - Duration::days(1)
}
