//! Monday-anchored week bucketing.
//!
//! Week keys are the ISO-local date of the week's Monday; day indices use
//! the host widget's convention of 0 = Sunday … 6 = Saturday. Sunday
//! therefore belongs to the week that started six days earlier, not the one
//! beginning the next day.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use planboard_domain::Task;

use super::normalize::format_local;

/// Day-of-week index in the host widget's convention (0 = Sunday … 6 =
/// Saturday).
pub fn day_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// The Monday starting the week containing `date`.
///
/// Idempotent, and the result's weekday is always Monday. Sunday maps
/// backward six days to the Monday of its own week.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let dow = day_index(date);
    let back = if dow == 0 { 6 } else { u64::from(dow) - 1 };
    date - Days::new(back)
}

/// Week key for `date`: `format_local(monday_of(date))`.
pub fn week_key(date: NaiveDate) -> String {
    format_local(monday_of(date))
}

/// A task paired with its canonical calendar date.
///
/// Produced by the view adapter after normalization (including the
/// today-fallback for missing or unparsable dates), so grouping never has to
/// drop a task.
#[derive(Debug, Clone)]
pub struct PlacedTask {
    pub task: Task,
    pub date: NaiveDate,
}

/// Group placed tasks into `week key → day-of-week → tasks` buckets.
///
/// Every task lands in exactly one `(week, day)` slot; input order is
/// preserved within each slot.
pub fn group_by_week_and_day(placed: Vec<PlacedTask>) -> BTreeMap<String, BTreeMap<u8, Vec<Task>>> {
    let mut weeks: BTreeMap<String, BTreeMap<u8, Vec<Task>>> = BTreeMap::new();

    for item in placed {
        let key = week_key(item.date);
        let day = day_index(item.date);
        weeks.entry(key).or_default().entry(day).or_default().push(item.task);
    }

    weeks
}
