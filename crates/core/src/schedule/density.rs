//! Day density classification.
//!
//! Decides purely from the grouped model whether a day has enough tasks to
//! switch the renderer to its compact card layout - no rendering timing or
//! DOM state involved.

use planboard_domain::constants::DENSE_DAY_THRESHOLD;
use planboard_domain::{DayDensity, Task};

/// Classify a day's (already grouped and sorted) task list.
///
/// `dense` when the count exceeds [`DENSE_DAY_THRESHOLD`].
pub fn classify_day(day_tasks: &[Task]) -> DayDensity {
    DayDensity { dense: day_tasks.len() > DENSE_DAY_THRESHOLD }
}
