//! Calendar view structures produced by the scheduling engine.
//!
//! A build turns a flat task list into `week → day-of-week → ordered tasks`.
//! Week keys are the ISO-local date (`YYYY-MM-DD`) of the week's Monday; day
//! keys use the host widget's convention of 0 = Sunday … 6 = Saturday.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Per-day slot: priority-ordered tasks plus the compact-layout flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub tasks: Vec<Task>,
    pub dense: bool,
}

/// Density classification for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDensity {
    /// Task count exceeds the compact-rendering threshold.
    pub dense: bool,
}

/// Day-of-week index (0 = Sunday … 6 = Saturday) to bucket mapping.
pub type WeekDays = BTreeMap<u8, DayBucket>;

/// Immutable snapshot handed to the rendering layer.
///
/// Rebuilt from scratch on every engine invocation; later mutation of the
/// source task list never changes a previously produced structure, and
/// superseded structures are discarded rather than patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarStructure {
    /// Week key (`YYYY-MM-DD` of the week's Monday) → day buckets.
    pub weeks: BTreeMap<String, WeekDays>,
    /// Per-task degradations recorded during the build.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<BuildWarning>,
}

impl CalendarStructure {
    /// Total number of tasks placed across all weeks.
    pub fn task_count(&self) -> usize {
        self.weeks
            .values()
            .flat_map(BTreeMap::values)
            .map(|bucket| bucket.tasks.len())
            .sum()
    }

    /// Bucket lookup for a `(week key, day index)` slot.
    pub fn day(&self, week_key: &str, day: u8) -> Option<&DayBucket> {
        self.weeks.get(week_key).and_then(|days| days.get(&day))
    }
}

/// Data-quality record for a task that degraded during a build.
///
/// Bad dates place the task on "today" instead of dropping it; the warning
/// keeps the degradation observable so missing source data is not silently
/// masked as legitimate current-day work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildWarning {
    /// No usable date field on the task.
    MissingDate { task_id: String },
    /// Date field present but outside the accepted shapes.
    UnparsableDate { task_id: String, raw: String },
    /// Project code not present in the populated code cache.
    UnknownProjectCode { task_id: String, code: String },
}

/// Options for a single calendar build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Restrict the result to exactly these week keys (e.g. the two-week
    /// preview); weeks not listed are omitted, listed weeks are preserved
    /// unchanged. `None` returns every week the tasks span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks_to_show: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            name: format!("Task {id}"),
            issued_date: None,
            created_date: None,
            task_category_name: None,
            is_holiday: None,
            is_out_of_office: None,
            project_type: None,
            project_code: None,
            status: None,
        }
    }

    #[test]
    fn task_count_spans_weeks_and_days() {
        let mut structure = CalendarStructure::default();
        let mut week = WeekDays::new();
        week.insert(1, DayBucket { tasks: vec![named_task("a"), named_task("b")], dense: false });
        week.insert(5, DayBucket { tasks: vec![named_task("c")], dense: false });
        structure.weeks.insert("2024-09-09".to_string(), week);

        assert_eq!(structure.task_count(), 3);
        assert_eq!(structure.day("2024-09-09", 1).map(|b| b.tasks.len()), Some(2));
        assert!(structure.day("2024-09-16", 1).is_none());
    }

    #[test]
    fn build_warning_serde_shape() {
        let warning = BuildWarning::UnparsableDate {
            task_id: "T-9".to_string(),
            raw: "15/09/2024".to_string(),
        };

        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "unparsable_date");
        assert_eq!(json["task_id"], "T-9");

        let back: BuildWarning = serde_json::from_value(json).unwrap();
        assert_eq!(back, warning);
    }

    #[test]
    fn structure_round_trips_through_json() {
        let mut structure = CalendarStructure::default();
        let mut week = WeekDays::new();
        week.insert(0, DayBucket { tasks: vec![named_task("sun")], dense: false });
        structure.weeks.insert("2024-09-09".to_string(), week);
        structure.warnings.push(BuildWarning::MissingDate { task_id: "sun".to_string() });

        let json = serde_json::to_string(&structure).unwrap();
        let back: CalendarStructure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, structure);
    }
}
