//! # Planboard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The task-to-calendar scheduling engine (normalize, group, rank,
//!   classify)
//! - Port/adapter interfaces (traits) for the fetch and rendering boundaries
//! - The coalesced refresh service driving the host calendar widget
//!
//! ## Architecture Principles
//! - Only depends on `planboard-domain`
//! - No database, HTTP, or DOM code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod schedule;

// Re-export specific items to avoid ambiguity
pub use schedule::cache::ProjectCodeCache;
pub use schedule::density::classify_day;
pub use schedule::normalize::{format_local, normalize, parse_local, NormalizedDate};
pub use schedule::ports::{
    CalendarEvent, CalendarHost, CalendarViewInfo, CardRenderer, Clock, FixedClock, SystemClock,
    TaskSource,
};
pub use schedule::priority::{compare, priority_bucket};
pub use schedule::service::ScheduleService;
pub use schedule::view::{events_for, CalendarView};
pub use schedule::week::{day_index, group_by_week_and_day, monday_of, week_key, PlacedTask};
