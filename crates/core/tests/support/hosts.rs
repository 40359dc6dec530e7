//! In-memory mocks of the collaborator ports.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use planboard_core::{CalendarEvent, CalendarHost, CalendarViewInfo, CardRenderer, TaskSource};
use planboard_domain::{PlanboardError, Result as DomainResult, Task};

/// Host widget mock recording every `set_events` and `goto_date` call.
#[derive(Default, Clone)]
pub struct RecordingHost {
    events: Arc<Mutex<Vec<Vec<CalendarEvent>>>>,
    gotos: Arc<Mutex<Vec<String>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_events` notifications received.
    pub fn notify_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// The most recent event set, if any notification happened.
    pub fn last_events(&self) -> Option<Vec<CalendarEvent>> {
        self.events.lock().unwrap().last().cloned()
    }

    /// Every `goto_date` target in call order.
    pub fn goto_targets(&self) -> Vec<String> {
        self.gotos.lock().unwrap().clone()
    }
}

impl CalendarHost for RecordingHost {
    fn set_events(&self, events: Vec<CalendarEvent>) {
        self.events.lock().unwrap().push(events);
    }

    fn goto_date(&self, date: &str) {
        self.gotos.lock().unwrap().push(date.to_string());
    }

    fn view(&self) -> CalendarViewInfo {
        CalendarViewInfo {
            view_type: "dayGridMonth".to_string(),
            active_start: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            active_end: NaiveDate::from_ymd_opt(2024, 10, 6).unwrap(),
        }
    }
}

/// Task source mock serving a configurable in-memory list.
#[derive(Default)]
pub struct StaticTaskSource {
    tasks: Mutex<Vec<Task>>,
}

impl StaticTaskSource {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks: Mutex::new(tasks) }
    }

    /// Replace the served task list (simulates new upstream data).
    pub fn set_tasks(&self, tasks: Vec<Task>) {
        *self.tasks.lock().unwrap() = tasks;
    }
}

#[async_trait]
impl TaskSource for StaticTaskSource {
    async fn fetch_tasks(&self) -> DomainResult<Vec<Task>> {
        Ok(self.tasks.lock().unwrap().clone())
    }
}

/// Task source mock that always fails, for error-path tests.
pub struct FailingTaskSource;

#[async_trait]
impl TaskSource for FailingTaskSource {
    async fn fetch_tasks(&self) -> DomainResult<Vec<Task>> {
        Err(PlanboardError::Source("project service unavailable".to_string()))
    }
}

/// Card renderer mock producing plain strings.
pub struct TextCardRenderer;

impl CardRenderer for TextCardRenderer {
    type Card = String;

    fn render_card(&self, task: &Task, dense: bool) -> String {
        if dense {
            format!("[compact] {}", task.name)
        } else {
            format!("[card] {}", task.name)
        }
    }
}
