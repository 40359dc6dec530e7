//! Calendar view adapter - orchestrates the scheduling pipeline.
//!
//! Normalize → group → per-day stable sort → density annotation → optional
//! week restriction. Each build is a pure, synchronous computation over its
//! input snapshot; the returned structure is independent of the caller's
//! task list and fully supersedes any earlier result.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Days, NaiveDate, Weekday};
use planboard_domain::{
    BuildOptions, BuildWarning, CalendarStructure, DateInput, DayBucket, PlanboardError, Result,
    Task, WeekDays,
};
use tracing::warn;

use super::cache::ProjectCodeCache;
use super::density::classify_day;
use super::normalize::{format_local, normalize, parse_local};
use super::ports::{CalendarEvent, Clock};
use super::priority::compare;
use super::week::{group_by_week_and_day, PlacedTask};

/// Builds immutable calendar structures from raw task lists.
///
/// Re-entrant: every call produces a fresh snapshot; there is no incremental
/// patching and no error state. Malformed individual tasks degrade via the
/// per-task today-fallback instead of aborting the batch.
pub struct CalendarView {
    clock: Arc<dyn Clock>,
    code_cache: Option<Arc<ProjectCodeCache>>,
}

impl CalendarView {
    /// Create a view adapter with the given local-date source.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock, code_cache: None }
    }

    /// Attach the known-code cache used for data-quality warnings.
    pub fn with_code_cache(mut self, cache: Arc<ProjectCodeCache>) -> Self {
        self.code_cache = Some(cache);
        self
    }

    /// Build the `week → day → ordered-task` structure for `tasks`.
    ///
    /// Tasks with a missing or unparsable date are placed on "today" and
    /// recorded in the structure's warnings - visible on the calendar rather
    /// than silently dropped. When `weeks_to_show` is set the result is
    /// restricted to exactly those week keys, contents unchanged.
    pub fn build(&self, tasks: &[Task], options: &BuildOptions) -> CalendarStructure {
        let today = self.clock.today();
        let mut warnings = Vec::new();
        let mut placed = Vec::with_capacity(tasks.len());

        for task in tasks {
            let date = self.place_date(task, today, &mut warnings);
            self.check_project_code(task, &mut warnings);
            placed.push(PlacedTask { task: task.clone(), date });
        }

        let mut weeks: BTreeMap<String, WeekDays> = BTreeMap::new();
        for (key, days) in group_by_week_and_day(placed) {
            let mut buckets = WeekDays::new();
            for (day, mut day_tasks) in days {
                // slice::sort_by is stable: ordinary tasks keep authored order
                day_tasks.sort_by(|a, b| compare(a, b));
                let density = classify_day(&day_tasks);
                buckets.insert(day, DayBucket { tasks: day_tasks, dense: density.dense });
            }
            weeks.insert(key, buckets);
        }

        if let Some(show) = &options.weeks_to_show {
            weeks.retain(|key, _| show.iter().any(|wanted| wanted == key));
        }

        CalendarStructure { weeks, warnings }
    }

    /// Week keys for the two-week preview: the Monday of the week preceding
    /// `iso_week` (`"YYYY-Www"`), then the Monday of `iso_week` itself.
    ///
    /// # Errors
    /// `InvalidDate` for a malformed week identifier.
    pub fn preview_week_keys(iso_week: &str) -> Result<[String; 2]> {
        let monday = monday_of_iso_week(iso_week)?;
        let previous = monday - Days::new(7);
        Ok([format_local(previous), format_local(monday)])
    }

    fn place_date(
        &self,
        task: &Task,
        today: NaiveDate,
        warnings: &mut Vec<BuildWarning>,
    ) -> NaiveDate {
        match normalize(task.effective_date(), today) {
            Ok(normalized) => {
                if normalized.fell_back {
                    warn!(task_id = %task.id, "task has no usable date; placing on today");
                    warnings.push(BuildWarning::MissingDate { task_id: task.id.clone() });
                }
                normalized.date
            }
            Err(err) => {
                let raw = match task.effective_date() {
                    Some(DateInput::Text(raw)) => raw.clone(),
                    _ => String::new(),
                };
                warn!(task_id = %task.id, error = %err, "unparsable task date; placing on today");
                warnings.push(BuildWarning::UnparsableDate { task_id: task.id.clone(), raw });
                today
            }
        }
    }

    fn check_project_code(&self, task: &Task, warnings: &mut Vec<BuildWarning>) {
        let Some(cache) = &self.code_cache else { return };
        // Unpopulated cache: the catalog has not synced, skip the check
        if cache.is_empty() {
            return;
        }
        let Some(code) = task.project_code.as_deref() else { return };

        if !cache.contains(code) {
            warn!(task_id = %task.id, code = %code, "task references unknown project code");
            warnings.push(BuildWarning::UnknownProjectCode {
                task_id: task.id.clone(),
                code: code.to_string(),
            });
        }
    }
}

/// Project a built structure onto the host widget's event model: one all-day
/// event per task, `start` = the task's canonical date.
pub fn events_for(structure: &CalendarStructure) -> Vec<CalendarEvent> {
    let mut events = Vec::with_capacity(structure.task_count());

    for (week, days) in &structure.weeks {
        let Ok(monday) = parse_local(week) else { continue };
        for (day, bucket) in days {
            // Invert the Sunday-last layout: Monday is offset 0, Sunday 6
            let offset = if *day == 0 { 6 } else { u64::from(*day) - 1 };
            let date = monday + Days::new(offset);
            for task in &bucket.tasks {
                events.push(CalendarEvent {
                    id: task.id.clone(),
                    title: task.name.clone(),
                    start: date,
                    all_day: true,
                });
            }
        }
    }

    events
}

fn monday_of_iso_week(iso_week: &str) -> Result<NaiveDate> {
    let trimmed = iso_week.trim();
    let (year_part, week_part) = trimmed
        .split_once("-W")
        .ok_or_else(|| PlanboardError::InvalidDate(trimmed.to_string()))?;

    let year: i32 =
        year_part.parse().map_err(|_| PlanboardError::InvalidDate(trimmed.to_string()))?;
    let week: u32 =
        week_part.parse().map_err(|_| PlanboardError::InvalidDate(trimmed.to_string()))?;

    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .ok_or_else(|| PlanboardError::InvalidDate(trimmed.to_string()))
}
