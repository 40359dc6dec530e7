//! Domain types and models

pub mod schedule;
pub mod task;

// Re-export the task and calendar types for convenience
pub use schedule::{BuildOptions, BuildWarning, CalendarStructure, DayBucket, DayDensity, WeekDays};
pub use task::{DateInput, ProjectType, Task};
