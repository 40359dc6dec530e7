//! Port interfaces for the scheduling engine's collaborators.
//!
//! The engine supplies ordering and density only; fetching tasks, rendering
//! cards and the host calendar widget live behind these traits.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use planboard_domain::{Result, Task};
use serde::{Deserialize, Serialize};

/// One all-day event handed to the host calendar widget: one per task,
/// `start` = the task's canonical date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    pub all_day: bool,
}

/// Current view window reported by the host calendar widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarViewInfo {
    pub view_type: String,
    pub active_start: NaiveDate,
    pub active_end: NaiveDate,
}

/// Trait for fetching the task list from the upstream project service.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Fetch the full task list for the visible range.
    async fn fetch_tasks(&self) -> Result<Vec<Task>>;
}

/// Trait for the host calendar widget consuming engine output.
pub trait CalendarHost: Send + Sync {
    /// Replace the widget's event set.
    fn set_events(&self, events: Vec<CalendarEvent>);

    /// Move the widget to the given `YYYY-MM-DD` date.
    fn goto_date(&self, date: &str);

    /// Report the widget's current view window.
    fn view(&self) -> CalendarViewInfo;
}

/// Trait for the task-card renderer.
///
/// The engine never produces markup; it tells the renderer the per-day order
/// and whether the day is dense enough for the compact layout.
pub trait CardRenderer: Send + Sync {
    /// Rendered card type (DOM handle, virtual node, test string, ...).
    type Card;

    /// Render one task card.
    fn render_card(&self, task: &Task, dense: bool) -> Self::Card;
}

/// Local-date source injected into the engine (the "today" fallback).
pub trait Clock: Send + Sync {
    /// Today's date in the local calendar.
    fn today(&self) -> NaiveDate;
}

/// System clock: the local calendar date of "now".
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed clock for deterministic builds in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
