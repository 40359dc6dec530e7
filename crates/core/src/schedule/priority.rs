//! Deterministic per-day ordering for calendar tasks.
//!
//! Holiday and out-of-office entries are pinned ahead of ordinary work and
//! sub-ordered among themselves; ordinary tasks keep their authored order.
//! [`compare`] returns `Equal` for ordinary pairs on purpose and relies on
//! the caller pairing it with a stable sort (`slice::sort_by`).

use std::cmp::Ordering;

use planboard_domain::constants::{PRIORITY_HOLIDAY, PRIORITY_OUT_OF_OFFICE, PRIORITY_STANDARD};
use planboard_domain::{ProjectType, Task};

/// Coarse ordering tier for a task; lower sorts earlier.
///
/// Holiday wins over out-of-office when both apply; the out-of-office check
/// (explicit flag or category-name heuristic) only runs for non-holidays.
pub fn priority_bucket(task: &Task) -> u16 {
    if task.holiday() {
        PRIORITY_HOLIDAY
    } else if task.out_of_office() {
        PRIORITY_OUT_OF_OFFICE
    } else {
        PRIORITY_STANDARD
    }
}

/// Comparator for tasks sharing a day. Total; never panics.
///
/// Ordinary (standard-bucket) pairs compare `Equal` so the stable sort keeps
/// their original relative order; only the featured tiers get the
/// project-type → project-code → name cascade. Absent fields rank last /
/// compare as empty strings, so the ordering always terminates.
pub fn compare(a: &Task, b: &Task) -> Ordering {
    let bucket_a = priority_bucket(a);
    let bucket_b = priority_bucket(b);

    if bucket_a != bucket_b {
        return bucket_a.cmp(&bucket_b);
    }

    // Ordinary tasks stay as authored; only featured tiers re-order
    if bucket_a == PRIORITY_STANDARD {
        return Ordering::Equal;
    }

    type_rank(a)
        .cmp(&type_rank(b))
        .then_with(|| code_key(a).cmp(&code_key(b)))
        .then_with(|| name_key(a).cmp(&name_key(b)))
}

fn type_rank(task: &Task) -> u8 {
    task.project_type.map_or(3, ProjectType::rank)
}

fn code_key(task: &Task) -> String {
    task.project_code.as_deref().unwrap_or_default().to_uppercase()
}

fn name_key(task: &Task) -> String {
    task.name.to_uppercase()
}
